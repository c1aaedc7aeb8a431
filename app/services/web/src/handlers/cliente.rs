use app_dto::cliente::{CidadeParams, NomeParams};
use app_error::AppError;
use app_schema::cliente::{Cliente, ClienteRow};
use app_schema::consulta::{ConsultaCidade, ConsultaClienteRow};
use app_state::AppState;
use axum::{
    extract::{Json, Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::*;

const ENDERECO_REQUIRED_MESSAGE: &'static str = "Cliente payload must carry an endereco!";

pub async fn get_clientes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let mut pg = app_database::connect(&state.config).await?;
    let rows = sqlx::query_as::<_, ClienteRow>(Cliente::select_base())
        .fetch_all(&mut pg)
        .await?;
    let clientes: Vec<Cliente> = rows.into_iter().map(Cliente::from).collect();
    debug!("{:?}", &clientes);
    Ok(Json(clientes))
}

pub async fn get_cliente_by_cidade(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CidadeParams>,
) -> Result<Response, AppError> {
    let mut pg = app_database::connect(&state.config).await?;
    let rows = sqlx::query_as::<_, ConsultaClienteRow>(Cliente::select_by_cidade())
        .bind(&params.cidade)
        .fetch_all(&mut pg)
        .await?;
    let consultas: Vec<ConsultaCidade> = rows.into_iter().map(ConsultaCidade::from).collect();
    // The body carries two JSON documents back to back: a standalone empty
    // summary object, then the result list.
    let body = encode_stream(&ConsultaCidade::default(), &consultas)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn get_cliente_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Cliente>, AppError> {
    let mut pg = app_database::connect(&state.config).await?;
    // The id stays a string; the statement casts it so coercion happens in
    // the database.
    let rows = sqlx::query_as::<_, ClienteRow>(&format!(
        "{} where c.id = $1::int",
        Cliente::select_base()
    ))
    .bind(&id)
    .fetch_all(&mut pg)
    .await?;
    // Last matching row wins; no match answers an empty record, never a 404.
    let cliente = rows
        .into_iter()
        .fold(Cliente::default(), |_, row| Cliente::from(row));
    Ok(Json(cliente))
}

pub async fn get_cliente_by_nome(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NomeParams>,
) -> Result<Json<Vec<Cliente>>, AppError> {
    let mut pg = app_database::connect(&state.config).await?;
    let rows = sqlx::query_as::<_, ClienteRow>(&format!(
        "{} where c.primeiro_nome = $1 and c.sobrenome = $2",
        Cliente::select_base()
    ))
    .bind(&params.nome)
    .bind(&params.sobrenome)
    .fetch_all(&mut pg)
    .await?;
    let clientes: Vec<Cliente> = rows.into_iter().map(Cliente::from).collect();
    debug!("{:?}", &clientes);
    Ok(Json(clientes))
}

pub async fn post_cliente(
    State(state): State<Arc<AppState>>,
    Json(args): Json<Cliente>,
) -> Result<StatusCode, AppError> {
    let endereco = args
        .endereco
        .as_ref()
        .ok_or_else(|| AppError::new(ENDERECO_REQUIRED_MESSAGE, StatusCode::BAD_REQUEST, 1))?;
    let mut pg = app_database::connect(&state.config).await?;
    sqlx::query(Cliente::insert_query())
        .bind(&args.primeiro_nome)
        .bind(&args.sobrenome)
        .bind(endereco.id)
        .execute(&mut pg)
        .await?;
    debug!("{}", format!("INSERT cliente: {:#?}", &args));
    Ok(StatusCode::OK)
}

pub async fn put_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(args): Json<Cliente>,
) -> Result<StatusCode, AppError> {
    let endereco = args
        .endereco
        .as_ref()
        .ok_or_else(|| AppError::new(ENDERECO_REQUIRED_MESSAGE, StatusCode::BAD_REQUEST, 1))?;
    let mut pg = app_database::connect(&state.config).await?;
    // No existence check: an unknown id affects zero rows and still answers
    // success.
    sqlx::query(Cliente::update_query())
        .bind(&args.primeiro_nome)
        .bind(&args.sobrenome)
        .bind(endereco.id)
        .bind(&id)
        .execute(&mut pg)
        .await?;
    debug!("{}", format!("UPDATE cliente {}: {:#?}", &id, &args));
    Ok(StatusCode::OK)
}

pub async fn delete_cliente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut pg = app_database::connect(&state.config).await?;
    sqlx::query(Cliente::delete_query())
        .bind(&id)
        .execute(&mut pg)
        .await?;
    debug!("DELETE cliente {}", &id);
    Ok(StatusCode::OK)
}

fn encode_stream<H, L>(head: &H, list: &L) -> Result<String, AppError>
where
    H: Serialize,
    L: Serialize,
{
    Ok(format!(
        "{}\n{}\n",
        serde_json::to_string(head)?,
        serde_json::to_string(list)?
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use app_schema::consulta::ConsultaCliente;

    #[test]
    fn city_body_is_two_json_documents() {
        let consultas = vec![ConsultaCidade {
            clientes: Some(ConsultaCliente {
                id: 1,
                nome: "Ana".to_string(),
            }),
            ..ConsultaCidade::default()
        }];
        let body = encode_stream(&ConsultaCidade::default(), &consultas).unwrap();
        assert_eq!(body, "{}\n[{\"clientes\":{\"id\":1,\"nome\":\"Ana\"}}]\n");
    }

    #[test]
    fn city_body_with_no_rows() {
        let body =
            encode_stream(&ConsultaCidade::default(), &Vec::<ConsultaCidade>::new()).unwrap();
        assert_eq!(body, "{}\n[]\n");
    }
}
