use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    // Listener
    pub bind_address: String,
    pub port: u16,

    // Website
    pub public_dir: PathBuf,
    pub database_url: String,

    // Registration limits
    pub max_player_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 80,
            public_dir: PathBuf::from("public"),
            database_url: "sqlite://data/reviews.db".to_string(),
            max_player_count: 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),

            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),

            max_player_count: env::var("MAX_PLAYER_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_player_count),
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.bind(), "0.0.0.0:80");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.max_player_count, 1024);
    }
}
