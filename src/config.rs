use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    /// Emails granted the admin claim at provisioning time, and treated as
    /// administrators even when a token predates the claim. The store-side
    /// handlers re-check the role on every mutation; this list is never the
    /// only gate.
    pub admin_emails: Vec<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        let host: IpAddr = env_or("FOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_HOST: {e}"))?;

        let port: u16 = env_or("FOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FOLIO_PORT: {e}"))?;

        let base_url = env_or("FOLIO_BASE_URL", &format!("http://{host}:{port}"));

        let admin_emails: Vec<String> = env_or("FOLIO_ADMIN_EMAILS", "")
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let log_level = env_or("FOLIO_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            base_url,
            admin_emails,
            log_level,
        })
    }

    pub fn is_allow_listed(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|e| e == &email.to_lowercase())
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
