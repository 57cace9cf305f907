use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to reach the record store: {0}")]
    Request(#[from] reqwest::Error),

    #[error("The record store returned HTTP {0}: {1}")]
    Api(u16, String),

    #[error("Failed to deserialize the record store response: {0}")]
    Deserialization(String),
}
