use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignateError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Designate API error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Network(String),
}

pub type DesignateResult<T> = Result<T, DesignateError>;
