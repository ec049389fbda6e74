use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] mh_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics recorder error: {message}")]
    Metrics { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
