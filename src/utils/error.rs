use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopEnvError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate id {id} in table '{table}'")]
    DuplicateIdError { table: String, id: u32 },
}

impl ShopEnvError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopEnvError::IoError(e) => format!("Could not read the fixture file: {}", e),
            ShopEnvError::TomlError(_) => "The fixture file is not valid TOML".to_string(),
            ShopEnvError::SerializationError(_) => "Could not render the report".to_string(),
            ShopEnvError::ConfigError { message } => message.clone(),
            ShopEnvError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid '{}': {}", field, reason)
            }
            ShopEnvError::DuplicateIdError { table, id } => {
                format!("Id {} appears more than once in [[{}]]", id, table)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShopEnvError::IoError(_) => "Check that the --config path exists and is readable",
            ShopEnvError::TomlError(_) => "Fix the TOML syntax reported above",
            ShopEnvError::SerializationError(_) => "Retry with --format text",
            ShopEnvError::ConfigError { .. } => "Review the fixture against the documented layout",
            ShopEnvError::InvalidConfigValueError { .. } => "Correct the field value and retry",
            ShopEnvError::DuplicateIdError { .. } => "Give every member and user a unique id",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopEnvError>;
