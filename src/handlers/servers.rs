// src/handlers/servers.rs
use actix_web::{ web, HttpResponse };
use log::debug;
use serde_json::json;
use crate::config::Config;
use crate::models::server::{ EndpointBody, EndpointKey, ServerQuery, UpsertRequest };
use crate::storage::memory::ServerStorage;
use crate::utils::RequestError;

pub async fn get_servers(storage: web::Data<ServerStorage>) -> Result<HttpResponse, RequestError> {
    let servers = storage.get_servers();
    debug!("Building server list response with {} servers", servers.len());
    Ok(HttpResponse::Ok().json(servers))
}

pub async fn get_server(
    storage: web::Data<ServerStorage>,
    query: web::Query<ServerQuery>
) -> Result<HttpResponse, RequestError> {
    let key = query.endpoint_key()?;

    match storage.get_server(&key) {
        Some(server) => Ok(HttpResponse::Ok().json(server)),
        None => {
            debug!("Lookup for unknown server {}", key);
            Err(RequestError::NotFound)
        }
    }
}

pub async fn upsert_server(
    storage: web::Data<ServerStorage>,
    config: web::Data<Config>,
    payload: web::Json<UpsertRequest>
) -> Result<HttpResponse, RequestError> {
    let record = payload.into_inner().into_record(config.max_player_count)?;
    storage.upsert_server(record);
    Ok(HttpResponse::Ok().json(json!({ "body": "OK" })))
}

/// The endpoint comes from the query string. Older clients send it as a JSON
/// body instead, which is only consulted when the query names no address.
pub async fn delete_server(
    storage: web::Data<ServerStorage>,
    query: web::Query<ServerQuery>,
    body: web::Bytes
) -> Result<HttpResponse, RequestError> {
    let key = delete_target(&query, &body)?;

    match storage.remove_server(&key) {
        Some(_) => Ok(HttpResponse::Ok().json(json!({ "message": "Server deleted successfully" }))),
        None => {
            debug!("Delete for unknown server {}", key);
            Err(RequestError::NotFound)
        }
    }
}

fn delete_target(query: &ServerQuery, body: &[u8]) -> Result<EndpointKey, RequestError> {
    if query.ip.is_some() || body.is_empty() {
        return query.endpoint_key();
    }
    let payload: EndpointBody = serde_json
        ::from_slice(body)
        .map_err(|e| RequestError::InvalidBody(e.to_string()))?;
    payload.endpoint_key()
}
