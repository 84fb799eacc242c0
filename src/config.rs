use crate::error::Error;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3001);
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            host,
            port,
            database_url,
        })
    }
}
