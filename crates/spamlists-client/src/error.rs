//! Error types for the spam list client

use spamlists_core::{Confidence, Network};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request for {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("List host returned status {status} for {path}")]
    Status { path: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Spam list for {network} with confidence {confidence} not found: {source}")]
    TokenList {
        network: Network,
        confidence: Confidence,
        #[source]
        source: Box<ClientError>,
    },

    #[error("NFT spam list for {network} not found: {source}")]
    NftList {
        network: Network,
        #[source]
        source: Box<ClientError>,
    },
}
