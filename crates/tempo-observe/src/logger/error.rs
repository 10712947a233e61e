use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid logger format: {0} (expected text, json or journald)")]
    InvalidFormat(String),
    #[error("journald output requires linux and the journald feature")]
    JournaldNotSupported,
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger initialization failed: {0}")]
    InitializationFailed(String),
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}
