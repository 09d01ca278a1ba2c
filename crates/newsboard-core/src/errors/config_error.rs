/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    ParseFailed { reason: String },

    #[error("config serialize failed: {reason}")]
    SerializeFailed { reason: String },

    #[error("invalid config value: {field} = {value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}
