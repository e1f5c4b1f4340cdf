use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the card services.
///
/// Defaults reproduce the original deployment layout (database and output
/// directory relative to the working directory, imgbb as the upload host).
/// Every field can be overridden through an `EDUID_*` environment variable,
/// which is also how tests point the services at temporary directories.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory for staged card PNGs.
    pub output_dir: PathBuf,
    /// Directory searched first for TTF font files.
    pub fonts_dir: PathBuf,
    /// Image-hosting upload endpoint.
    pub upload_endpoint: String,
    /// Upload credential. When empty, no upload is attempted and every QR
    /// payload falls back to a local file reference.
    pub upload_key: String,
    /// Timeout for the single upload attempt.
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("eduid_maker.db"),
            output_dir: PathBuf::from("generated_cards"),
            fonts_dir: PathBuf::from("./fonts"),
            upload_endpoint: "https://api.imgbb.com/1/upload".to_string(),
            upload_key: String::new(),
            http_timeout: Duration::from_secs(15),
        }
    }
}

impl AppConfig {
    /// Defaults with `EDUID_*` environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(v) = env::var("EDUID_DB_PATH") {
            config.db_path = PathBuf::from(v);
        }
        if let Ok(v) = env::var("EDUID_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("EDUID_FONTS_DIR") {
            config.fonts_dir = PathBuf::from(v);
        }
        if let Ok(v) = env::var("EDUID_UPLOAD_ENDPOINT") {
            config.upload_endpoint = v;
        }
        if let Ok(v) = env::var("EDUID_UPLOAD_KEY") {
            config.upload_key = v;
        }
        if let Some(secs) = env::var("EDUID_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.http_timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_layout() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from("eduid_maker.db"));
        assert_eq!(config.output_dir, PathBuf::from("generated_cards"));
        assert_eq!(config.upload_endpoint, "https://api.imgbb.com/1/upload");
        assert!(config.upload_key.is_empty());
    }

    // Env vars are process-global; one test owns them to keep the suite
    // parallel-safe.
    #[test]
    fn env_overrides_apply() {
        env::set_var("EDUID_DB_PATH", "/tmp/override.db");
        env::set_var("EDUID_HTTP_TIMEOUT_SECS", "3");
        let config = AppConfig::from_env();
        assert_eq!(config.db_path, PathBuf::from("/tmp/override.db"));
        assert_eq!(config.http_timeout, Duration::from_secs(3));

        // An unparsable timeout keeps the default.
        env::set_var("EDUID_HTTP_TIMEOUT_SECS", "not-a-number");
        let config = AppConfig::from_env();
        assert_eq!(config.http_timeout, Duration::from_secs(15));

        env::remove_var("EDUID_DB_PATH");
        env::remove_var("EDUID_HTTP_TIMEOUT_SECS");
    }
}
