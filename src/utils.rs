// src/utils.rs
use actix_web::{ http::StatusCode, HttpResponse, ResponseError };
use serde_json::json;
use std::fmt;
use std::net::IpAddr;
use crate::models::server::LooseInt;

const MAX_ADDRESS_LEN: usize = 253;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    InvalidAddress(String),
    InvalidPort(String),
    InvalidPlayerCount(String),
    InvalidBody(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Server not found"),
            Self::InvalidAddress(reason) => write!(f, "Invalid address: {}", reason),
            Self::InvalidPort(reason) => write!(f, "Invalid port: {}", reason),
            Self::InvalidPlayerCount(reason) => write!(f, "Invalid player count: {}", reason),
            Self::InvalidBody(reason) => write!(f, "Invalid request body: {}", reason),
        }
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Accepts an IP literal or a plain hostname.
pub fn validate_address(raw: Option<&str>) -> Result<String, RequestError> {
    let address = match raw {
        Some(a) if !a.is_empty() => a,
        _ => {
            return Err(RequestError::InvalidAddress("must not be empty".to_string()));
        }
    };

    if address.len() > MAX_ADDRESS_LEN {
        return Err(
            RequestError::InvalidAddress(format!("too long (max {} chars)", MAX_ADDRESS_LEN))
        );
    }

    if address.parse::<IpAddr>().is_ok() {
        return Ok(address.to_string());
    }

    let is_hostname = address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    if !is_hostname {
        return Err(
            RequestError::InvalidAddress(format!("'{}' is not an IP address or hostname", address))
        );
    }

    Ok(address.to_string())
}

pub fn parse_port(raw: Option<&LooseInt>) -> Result<u16, RequestError> {
    let raw = match raw {
        Some(r) => r,
        None => {
            return Err(RequestError::InvalidPort("missing".to_string()));
        }
    };

    let value = raw
        .as_i64()
        .ok_or_else(|| RequestError::InvalidPort(format!("'{}' is not a number", raw)))?;

    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(RequestError::InvalidPort(format!("{} is outside 1-65535", value))),
    }
}

/// A missing player count is treated as an empty server.
pub fn parse_player_count(raw: Option<&LooseInt>, max: u32) -> Result<u32, RequestError> {
    let raw = match raw {
        Some(r) => r,
        None => {
            return Ok(0);
        }
    };

    let value = raw
        .as_i64()
        .ok_or_else(|| RequestError::InvalidPlayerCount(format!("'{}' is not a number", raw)))?;

    if value < 0 {
        return Err(RequestError::InvalidPlayerCount(format!("{} is negative", value)));
    }
    if value > i64::from(max) {
        return Err(RequestError::InvalidPlayerCount(format!("{} exceeds {}", value, max)));
    }

    Ok(value as u32)
}
