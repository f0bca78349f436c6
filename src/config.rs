use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    // Mood history
    pub storage_key: String,
    pub history_preview_len: usize,
    pub top_symptoms_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://moodlog.db?mode=rwc".into(),
            db_max_connections: 5,
            host: "127.0.0.1".into(),
            port: 8080,
            frontend_url: "http://localhost:8081".into(),
            cors_extra_origins: Vec::new(),
            storage_key: "moodHistory".into(),
            history_preview_len: 3,
            top_symptoms_limit: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            // e.g. a device on the LAN running the app
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(defaults.cors_extra_origins),

            storage_key: env::var("STORAGE_KEY")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.storage_key),
            history_preview_len: parse_or("HISTORY_PREVIEW_LEN", defaults.history_preview_len),
            top_symptoms_limit: parse_or("TOP_SYMPTOMS_LIMIT", defaults.top_symptoms_limit),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
