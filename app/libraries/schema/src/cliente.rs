use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client record as it travels over the wire. Zero integers and empty
/// strings are omitted from output; `endereco` is omitted only when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "crate::is_zero")]
    pub id: i32,
    #[serde(rename = "nome", default, skip_serializing_if = "String::is_empty")]
    pub primeiro_nome: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sobrenome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<Endereco>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Endereco {
    #[serde(rename = "endereco_id", default, skip_serializing_if = "crate::is_zero")]
    pub id: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logradouro: String,
    #[serde(default, skip_serializing_if = "crate::is_zero")]
    pub cep: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bairro: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidade: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uf: String,
}

/// One row of the cliente/endereco left join. Address columns are NULL when
/// no endereco matches.
#[derive(Debug, FromRow)]
pub struct ClienteRow {
    pub id: i32,
    pub primeiro_nome: String,
    pub sobrenome: String,
    pub endereco_id: Option<i32>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<i32>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
}

impl From<ClienteRow> for Cliente {
    fn from(row: ClienteRow) -> Self {
        Cliente {
            id: row.id,
            primeiro_nome: row.primeiro_nome,
            sobrenome: row.sobrenome,
            // The join always yields an endereco record; unmatched rows carry
            // zero values in every field.
            endereco: Some(Endereco {
                id: row.endereco_id.unwrap_or_default(),
                logradouro: row.logradouro.unwrap_or_default(),
                cep: row.cep.unwrap_or_default(),
                bairro: row.bairro.unwrap_or_default(),
                cidade: row.cidade.unwrap_or_default(),
                uf: row.uf.unwrap_or_default(),
            }),
        }
    }
}

impl Cliente {
    #[inline]
    pub fn select_base() -> &'static str {
        include_str!("../../../SQL/cliente/select_base.sql")
    }

    #[inline]
    pub fn select_by_cidade() -> &'static str {
        include_str!("../../../SQL/cliente/select_cidade.sql")
    }

    #[inline]
    pub fn insert_query() -> &'static str {
        include_str!("../../../SQL/cliente/insert.sql")
    }

    #[inline]
    pub fn update_query() -> &'static str {
        include_str!("../../../SQL/cliente/update.sql")
    }

    #[inline]
    pub fn delete_query() -> &'static str {
        include_str!("../../../SQL/cliente/delete.sql")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_valued_cliente_serializes_as_empty_object() {
        assert_eq!(serde_json::to_string(&Cliente::default()).unwrap(), "{}");
    }

    #[test]
    fn populated_fields_use_wire_names() {
        let cliente = Cliente {
            id: 7,
            primeiro_nome: "Ana".to_string(),
            sobrenome: "Silva".to_string(),
            endereco: Some(Endereco {
                id: 1,
                logradouro: "Rua das Flores".to_string(),
                cep: 88010000,
                bairro: "Centro".to_string(),
                cidade: "Florianopolis".to_string(),
                uf: "SC".to_string(),
            }),
        };
        assert_eq!(
            serde_json::to_string(&cliente).unwrap(),
            r#"{"id":7,"nome":"Ana","sobrenome":"Silva","endereco":{"endereco_id":1,"logradouro":"Rua das Flores","cep":88010000,"bairro":"Centro","cidade":"Florianopolis","uf":"SC"}}"#
        );
    }

    #[test]
    fn create_payload_decodes_without_optional_fields() {
        let cliente: Cliente = serde_json::from_str(
            r#"{"nome":"Ana","sobrenome":"Silva","endereco":{"endereco_id":1}}"#,
        )
        .unwrap();
        assert_eq!(cliente.id, 0);
        assert_eq!(cliente.primeiro_nome, "Ana");
        assert_eq!(cliente.sobrenome, "Silva");
        let endereco = cliente.endereco.unwrap();
        assert_eq!(endereco.id, 1);
        assert_eq!(endereco.cep, 0);
    }

    #[test]
    fn payload_without_endereco_decodes_as_none() {
        let cliente: Cliente =
            serde_json::from_str(r#"{"nome":"Ana","sobrenome":"Silva"}"#).unwrap();
        assert!(cliente.endereco.is_none());
    }

    #[test]
    fn row_without_endereco_maps_to_zero_values() {
        let row = ClienteRow {
            id: 3,
            primeiro_nome: "Rui".to_string(),
            sobrenome: "Costa".to_string(),
            endereco_id: None,
            logradouro: None,
            bairro: None,
            cep: None,
            cidade: None,
            uf: None,
        };
        let cliente = Cliente::from(row);
        let endereco = cliente.endereco.clone().unwrap();
        assert_eq!(endereco.id, 0);
        assert_eq!(endereco.logradouro, "");
        // The empty endereco stays present with every subfield omitted.
        assert_eq!(
            serde_json::to_string(&cliente).unwrap(),
            r#"{"id":3,"nome":"Rui","sobrenome":"Costa","endereco":{}}"#
        );
    }

    #[test]
    fn insert_statement_uses_the_cliente_sequence() {
        assert!(Cliente::insert_query().contains("nextval('my_seq_cliente')"));
    }
}
