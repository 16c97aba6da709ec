//! Parsed representation of one published list file

use serde::{Deserialize, Serialize};

/// Contents of one list file.
///
/// Token files name the entry array `SpamContracts`; bundled NFT files
/// have historically used `SpamCollections`. Both names are accepted on
/// input, the canonical one is always written on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamListData {
    /// Raw `chainId/address/score` entries in published order
    #[serde(rename = "SpamContracts", alias = "SpamCollections")]
    pub entries: Vec<String>,
}

impl SpamListData {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Case-insensitive membership test against this list
    pub fn contains(&self, address: &str) -> bool {
        crate::entry::is_contract_spam(address, &self.entries)
    }
}
