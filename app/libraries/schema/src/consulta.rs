use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Projection returned by the city filter. The per-row cidade/uf columns are
/// scanned but never copied into the output, so both fields stay empty and
/// serialize away; only the nested client summary is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultaCidade {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidade: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientes: Option<ConsultaCliente>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsultaCliente {
    #[serde(default, skip_serializing_if = "crate::is_zero")]
    pub id: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nome: String,
}

#[derive(Debug, FromRow)]
pub struct ConsultaClienteRow {
    pub id: i32,
    pub primeiro_nome: String,
}

impl From<ConsultaClienteRow> for ConsultaCidade {
    fn from(row: ConsultaClienteRow) -> Self {
        ConsultaCidade {
            clientes: Some(ConsultaCliente {
                id: row.id,
                nome: row.primeiro_nome,
            }),
            ..ConsultaCidade::default()
        }
    }
}
