const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;

#[derive(Clone, Debug)]
pub struct LevainConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl LevainConfig {
    pub fn from_env() -> Self {
        // the store connection string is the only knob read from the environment
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            database_url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
