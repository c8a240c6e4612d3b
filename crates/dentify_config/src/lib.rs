use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources are layered: `config/default`, then `config/{RUN_ENV}`, then
/// environment variables prefixed with `DENTIFY` using `__` as the nesting
/// separator (for example `DENTIFY__API__BASE_URL`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .ancestors()
        .nth(2) // go from crates/dentify_config to workspace root
        .unwrap_or(&manifest_dir)
        .to_path_buf();

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("DENTIFY").separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a `OnceCell`.
/// If not, it attempts to load the dotenv file specified by the first command line argument.
/// If no argument is provided, it defaults to loading a file named ".env".
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = std::env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_config_deserializes_with_defaults() {
        let yaml = r#"
api:
  base_url: "http://localhost:8080"
"#;
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.session_cookie, None);
        assert_eq!(config.clinic.timezone, "Asia/Ho_Chi_Minh");
        assert_eq!(config.clinic.default_service_id, None);
    }

    #[test]
    fn test_config_reads_clinic_section() {
        let yaml = r#"
api:
  base_url: "https://clinic.example.com"
  session_cookie: "JSESSIONID=abc123"
  timeout_seconds: 10
clinic:
  timezone: "Asia/Bangkok"
  default_service_id: 3
  default_service_name: "Cleaning"
"#;
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.session_cookie.as_deref(), Some("JSESSIONID=abc123"));
        assert_eq!(config.api.timeout_seconds, Some(10));
        assert_eq!(config.clinic.timezone, "Asia/Bangkok");
        assert_eq!(config.clinic.default_service_name.as_deref(), Some("Cleaning"));
    }
}
