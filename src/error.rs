use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("status node already resolved as {0}")]
    AlreadyResolved(crate::models::Status),

    #[error("project node has no .status element")]
    MissingStatusElement,

    #[error("status task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
