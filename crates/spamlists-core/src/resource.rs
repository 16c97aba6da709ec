//! Resource keys addressing the published list files

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::network::Network;

/// Asset class a spam list covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Erc20,
    Nft,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Erc20 => write!(f, "erc20"),
            AssetKind::Nft => write!(f, "nft"),
        }
    }
}

/// Classification strength of a token list
///
/// NFT lists are published without a confidence dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Flagged spam
    Yes,
    /// Suspected spam
    Maybe,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Yes => "yes",
            Confidence::Maybe => "maybe",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Yes
    }
}

impl FromStr for Confidence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Confidence::Yes),
            "maybe" => Ok(Confidence::Maybe),
            _ => Err(Error::UnknownConfidence(s.to_string())),
        }
    }
}

/// Identifies one published list file by its path relative to the list
/// host root. Doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey(String);

impl ResourceKey {
    /// Keys for a network's token spam list.
    ///
    /// The BSC yes-confidence list is published split in two parts; both
    /// keys are returned in order and their contents belong concatenated.
    /// Every other combination is a single file.
    pub fn erc20(network: Network, confidence: Confidence) -> Vec<ResourceKey> {
        let key = format!("{}_token_spam_contracts_{}", network.file_stem(), confidence);
        if network == Network::BscMainnet && confidence == Confidence::Yes {
            vec![
                ResourceKey(format!("erc20/{}_1.yaml", key)),
                ResourceKey(format!("erc20/{}_2.yaml", key)),
            ]
        } else {
            vec![ResourceKey(format!("erc20/{}.yaml", key))]
        }
    }

    /// Key for a network's NFT spam list
    pub fn nft(network: Network) -> ResourceKey {
        ResourceKey(format!("nft/{}_nft_spam_contracts.yaml", network.file_stem()))
    }

    /// Path relative to the list host root
    pub fn path(&self) -> &str {
        &self.0
    }

    /// Name of the on-disk cache copy for this resource
    pub fn cache_file_name(&self) -> String {
        format!("{}.json", self.0.replace('/', "_"))
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
