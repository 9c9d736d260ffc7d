use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,

    // Database (Postgres)
    pub database_url: String,

    // Browser
    pub dev: bool,
    pub chromium_local_path: Option<String>,
    pub chromium_bin: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let dev = env::var("APP_ENV")
            .map(|v| v == "development")
            .unwrap_or(false);

        Self {
            gemini_api_key: required_env("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            database_url: required_env("DATABASE_URL"),
            dev,
            chromium_local_path: env::var("CHROMIUM_LOCAL_PATH").ok(),
            chromium_bin: env::var("CHROMIUM_BIN").unwrap_or_else(|_| "chromium".to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }

    /// Browser executable for the current deployment mode: the local binary
    /// in development, the installed one in production.
    pub fn chromium_executable(&self) -> &str {
        if self.dev {
            self.chromium_local_path
                .as_deref()
                .unwrap_or_else(|| panic!("CHROMIUM_LOCAL_PATH is required when APP_ENV=development"))
        } else {
            &self.chromium_bin
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
