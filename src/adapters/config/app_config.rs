use std::ffi::{OsStr, OsString};

use config::{Config, Environment};
use error_stack::{report, ResultExt};
use serde::Deserialize;
use thiserror::Error;

use super::sheets_config::{SpreadsheetConfig, DEFAULT_TAB_NAME};

pub const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";
pub const TAB_NAME_VAR: &str = "GOOGLE_SHEET_TAB_NAME";
pub const SERVICE_ACCOUNT_VAR: &str = "GOOGLE_SERVICE_ACCOUNT_JSON";

const VARS: [&str; 3] = [SHEET_ID_VAR, TAB_NAME_VAR, SERVICE_ACCOUNT_VAR];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingConfiguration(&'static str),
    #[error("Could not read configuration from the environment")]
    InvalidConfiguration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
}

// The environment source lowercases every key.
#[derive(Deserialize, Debug, Default)]
struct EnvironmentVariables {
    google_sheet_id: Option<String>,
    google_sheet_tab_name: Option<String>,
    google_service_account_json: Option<String>,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> error_stack::Result<Self, ConfigError> {
        Self::from_vars(Self::env_vars()?)
    }

    /// The variables this tool reads, taken from the process environment.
    pub fn env_vars() -> error_stack::Result<config::Map<String, String>, ConfigError> {
        collect_vars(std::env::vars_os())
    }

    /// Reads `vars` instead of the process environment.
    pub fn from_vars(vars: config::Map<String, String>) -> error_stack::Result<Self, ConfigError> {
        Self::from_environment(Environment::default().source(Some(vars)))
    }

    fn from_environment(environment: Environment) -> error_stack::Result<Self, ConfigError> {
        let vars: EnvironmentVariables = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .change_context(ConfigError::InvalidConfiguration)?;

        let spreadsheet_id = required(vars.google_sheet_id, SHEET_ID_VAR)?;
        let service_account_json =
            required(vars.google_service_account_json, SERVICE_ACCOUNT_VAR)?;
        let tab_name = vars
            .google_sheet_tab_name
            .unwrap_or_else(|| DEFAULT_TAB_NAME.to_owned());

        Ok(AppConfig {
            sheets: SpreadsheetConfig {
                spreadsheet_id: spreadsheet_id.into(),
                tab_name: tab_name.into(),
                service_account_json: service_account_json.into(),
            },
        })
    }
}

/// Keeps only our variables; other entries are never decoded, so they may
/// hold any bytes.
pub fn collect_vars<I>(vars: I) -> error_stack::Result<config::Map<String, String>, ConfigError>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut map = config::Map::new();
    for (key, value) in vars {
        let Some(name) = VARS.iter().find(|name| key.as_os_str() == OsStr::new(name)) else {
            continue;
        };
        let value = value.into_string().map_err(|_| {
            report!(ConfigError::InvalidConfiguration)
                .attach_printable(format!("{} is not valid UTF-8", name))
        })?;
        map.insert(name.to_string(), value);
    }
    Ok(map)
}

fn required(
    value: Option<String>,
    name: &'static str,
) -> error_stack::Result<String, ConfigError> {
    value.ok_or_else(|| {
        report!(ConfigError::MissingConfiguration(name))
            .attach_printable(format!("Set {} before running the sync", name))
    })
}
