use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpiderError>;

#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("remote judge `{0}` is not supported")]
    UnsupportedJudge(String),
    #[error("no adapter registered for `{0}`")]
    NotRegistered(String),
    #[error("failed to read config file `{path}`")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file `{path}`")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("config already initialised")]
    ConfigAlreadySet,
    #[error("adapter registry already installed")]
    RegistryAlreadyInstalled,
    #[error("failed to initialise logger: {0}")]
    Logger(String),
}
