use anyhow::{bail, Context};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    /// Process-local; contents are lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match var("STORAGE_BACKEND").as_deref().unwrap_or("postgres") {
            "postgres" => StorageBackend::Postgres {
                database_url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
            },
            "memory" => StorageBackend::Memory,
            other => bail!("STORAGE_BACKEND must be `postgres` or `memory`, got `{other}`"),
        };

        Ok(Self {
            storage,
            max_connections: var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
