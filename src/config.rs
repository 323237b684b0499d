// Configuration module: one struct holding every tunable the binaries
// use, instead of scattering module-level constants. Each field can be
// overridden from the environment so tests can point the client at a
// mock endpoint or a temp directory.

use std::path::PathBuf;
use std::time::Duration;

/// Default webhook endpoint of the local n8n "scan food" workflow.
const DEFAULT_WEBHOOK_URL: &str =
    "http://localhost:3001/webhook/46c547d2-3645-42af-a02a-scan-food";

/// Question sent when the user does not provide one.
const DEFAULT_QUESTION: &str = "How healthy is this?";

/// Runtime configuration for both tools.
#[derive(Clone, Debug)]
pub struct Config {
    /// Webhook URL the notifier POSTs to.
    pub webhook_url: String,
    /// Default question attached to an analysis request.
    pub question: String,
    /// Hard cap on a single request, connection included.
    pub request_timeout: Duration,
    /// Seed SQL script replayed by the bootstrapper.
    pub sql_file: PathBuf,
    /// SQLite file the bootstrapper (re)creates.
    pub db_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            webhook_url: DEFAULT_WEBHOOK_URL.into(),
            question: DEFAULT_QUESTION.into(),
            request_timeout: Duration::from_secs(30),
            sql_file: PathBuf::from("db/init_sqlite.sql"),
            db_file: PathBuf::from("db/food_urban_semi_urban.sqlite"),
        }
    }
}

impl Config {
    /// Build a configuration from the defaults, letting `FOODSCAN_*`
    /// environment variables override individual fields.
    pub fn from_env() -> Self {
        let mut cfg = Config::default();
        if let Ok(url) = std::env::var("FOODSCAN_WEBHOOK_URL") {
            cfg.webhook_url = url;
        }
        if let Ok(q) = std::env::var("FOODSCAN_QUESTION") {
            cfg.question = q;
        }
        if let Ok(sql) = std::env::var("FOODSCAN_SQL_FILE") {
            cfg.sql_file = PathBuf::from(sql);
        }
        if let Ok(db) = std::env::var("FOODSCAN_DB_FILE") {
            cfg.db_file = PathBuf::from(db);
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_workflow() {
        let cfg = Config::default();
        assert!(cfg.webhook_url.starts_with("http://localhost:3001/"));
        assert_eq!(cfg.question, "How healthy is this?");
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.sql_file, PathBuf::from("db/init_sqlite.sql"));
    }
}
