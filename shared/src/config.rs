use dotenv::dotenv;

pub struct Config {
    pub database_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        Ok(Config {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://watchlist.db?mode=rwc".to_string()),
            api_host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
        })
    }
}
