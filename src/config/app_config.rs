use std::sync::LazyLock;

use config::Config;

/// Spreadsheet the original deployment points at. Overridable through the
/// config file, but in practice a fixed constant of the system.
const DEFAULT_SPREADSHEET_ID: &str = "19sGTnXqhOkZSIsJZSS_weSvO43FtFceXKNRc2ovLhY0";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub sheets: super::sheets_config::SpreadsheetConfig,
    pub server: super::server_config::ServerConfig,
}

/// Builds the configuration from code-level defaults plus an optional config
/// file. A malformed file is a startup error, not something to limp past.
pub fn load_from(config_path: &str) -> AppConfig {
    let config_result = Config::builder()
        .set_default("sheets.priv_key", "credentials.json")
        .and_then(|builder| builder.set_default("sheets.spreadsheet_id", DEFAULT_SPREADSHEET_ID))
        .and_then(|builder| builder.set_default("server.bind_addr", "0.0.0.0:8080"))
        .and_then(|builder| builder.set_default("server.templates_dir", "templates"))
        .expect("Config defaults should be valid")
        .add_source(config::File::with_name(config_path).required(false))
        .build();

    let config = match config_result {
        Ok(config) => config,
        Err(e) => panic!(
            "[CONFIG ERROR] Error reading config file '{}': {:?}",
            config_path, e
        ),
    };

    match config.try_deserialize() {
        Ok(app_config) => app_config,
        Err(e) => panic!(
            "[CONFIG ERROR] Failed to deserialize config file '{}': {}\nMake sure all required fields are present in the configuration file.",
            config_path, e
        ),
    }
}

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
    load_from(&config_path)
});
