// src/models/server.rs
use serde::{ Deserialize, Serialize };
use std::fmt;
use crate::utils::{ parse_player_count, parse_port, validate_address, RequestError };

/// Identity of a registry entry, rendered as `address:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointKey {
    pub address: String,
    pub port: u16,
}

impl EndpointKey {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    /// Validates raw wire fields into a key.
    pub fn from_parts(ip: Option<&str>, port: Option<&LooseInt>) -> Result<Self, RequestError> {
        let address = validate_address(ip)?;
        let port = parse_port(port)?;
        Ok(Self { address, port })
    }
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}

/// One advertised game server, as returned by `/servers` and `/server`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub name: String,
    #[serde(rename = "ip")]
    pub address: String,
    pub port: u16,
    #[serde(rename = "players")]
    pub player_count: u32,
    pub ping: u32,
    #[serde(rename = "dedicatedServer")]
    pub is_dedicated: bool,
}

impl ServerRecord {
    /// Ping always starts at zero; nothing in the registry updates it.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        port: u16,
        player_count: u32,
        is_dedicated: bool
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            port,
            player_count,
            ping: 0,
            is_dedicated,
        }
    }

    pub fn key(&self) -> EndpointKey {
        EndpointKey::new(self.address.clone(), self.port)
    }
}

/// Integer field that some game clients send as a JSON string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
    Number(i64),
    Text(String),
}

impl LooseInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for LooseInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Body of `POST /server`.
#[derive(Debug, Deserialize)]
pub struct UpsertRequest {
    pub ip: Option<String>,
    pub port: Option<LooseInt>,
    pub name: Option<String>,
    pub players: Option<LooseInt>,
    #[serde(rename = "dedicatedServer")]
    pub dedicated_server: Option<bool>,
}

impl UpsertRequest {
    pub fn into_record(self, max_player_count: u32) -> Result<ServerRecord, RequestError> {
        let key = EndpointKey::from_parts(self.ip.as_deref(), self.port.as_ref())?;
        let player_count = parse_player_count(self.players.as_ref(), max_player_count)?;
        Ok(
            ServerRecord::new(
                self.name.unwrap_or_default(),
                key.address,
                key.port,
                player_count,
                self.dedicated_server.unwrap_or_default()
            )
        )
    }
}

/// Query string of `GET /server` and `DELETE /server`.
#[derive(Debug, Default, Deserialize)]
pub struct ServerQuery {
    pub ip: Option<String>,
    pub port: Option<String>,
}

impl ServerQuery {
    pub fn endpoint_key(&self) -> Result<EndpointKey, RequestError> {
        let port = self.port.clone().map(LooseInt::Text);
        EndpointKey::from_parts(self.ip.as_deref(), port.as_ref())
    }
}

/// JSON body form of an endpoint, accepted by `DELETE /server` from older clients.
#[derive(Debug, Deserialize)]
pub struct EndpointBody {
    pub ip: Option<String>,
    pub port: Option<LooseInt>,
}

impl EndpointBody {
    pub fn endpoint_key(&self) -> Result<EndpointKey, RequestError> {
        EndpointKey::from_parts(self.ip.as_deref(), self.port.as_ref())
    }
}
