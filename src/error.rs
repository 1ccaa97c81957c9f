use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("forecast route must start with '/', got {0:?}")]
    InvalidRoute(String),
    #[error("tls needs both a key file and a cert file")]
    IncompleteTls,
    #[error("failed to load tls configuration: {0}")]
    Tls(#[source] std::io::Error),
    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}
