//! Error types for spamlists-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unknown confidence level: {0}")]
    UnknownConfidence(String),
}
