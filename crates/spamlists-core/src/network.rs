//! Networks with published spam lists

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Network whose spam lists are published upstream
///
/// The canonical identifier is the hyphenated GoldRush form
/// (`eth-mainnet`); list file names use the underscore form
/// (`eth_mainnet`). `FromStr` accepts either separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    EthMainnet,
    PolMainnet,
    BaseMainnet,
    BscMainnet,
    OpMainnet,
    GnosisMainnet,
}

impl Network {
    /// All networks with published lists
    pub const ALL: [Network; 6] = [
        Network::EthMainnet,
        Network::PolMainnet,
        Network::BaseMainnet,
        Network::BscMainnet,
        Network::OpMainnet,
        Network::GnosisMainnet,
    ];

    /// Canonical hyphenated identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::EthMainnet => "eth-mainnet",
            Network::PolMainnet => "pol-mainnet",
            Network::BaseMainnet => "base-mainnet",
            Network::BscMainnet => "bsc-mainnet",
            Network::OpMainnet => "op-mainnet",
            Network::GnosisMainnet => "gnosis-mainnet",
        }
    }

    /// Underscore form used in the list file names
    pub fn file_stem(&self) -> &'static str {
        match self {
            Network::EthMainnet => "eth_mainnet",
            Network::PolMainnet => "pol_mainnet",
            Network::BaseMainnet => "base_mainnet",
            Network::BscMainnet => "bsc_mainnet",
            Network::OpMainnet => "op_mainnet",
            Network::GnosisMainnet => "gnosis_mainnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('_', "-").as_str() {
            "eth-mainnet" => Ok(Network::EthMainnet),
            "pol-mainnet" => Ok(Network::PolMainnet),
            "base-mainnet" => Ok(Network::BaseMainnet),
            "bsc-mainnet" => Ok(Network::BscMainnet),
            "op-mainnet" => Ok(Network::OpMainnet),
            "gnosis-mainnet" => Ok(Network::GnosisMainnet),
            _ => Err(Error::UnknownNetwork(s.to_string())),
        }
    }
}
