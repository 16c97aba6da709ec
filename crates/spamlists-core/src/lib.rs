//! spamlists-core: types and entry handling for the GoldRush spam lists
//!
//! The GoldRush enhanced spam lists are per-network YAML files flagging
//! ERC-20 token and NFT contracts as spam. This crate holds the pure
//! building blocks:
//! - [`Network`], [`AssetKind`] and [`Confidence`] identify one list
//! - [`ResourceKey`] derives the file a lookup resolves to, including the
//!   two-part split of the BSC yes-confidence token list
//! - [`SpamListData`] is the parsed contents of one list file
//! - [`is_contract_spam`] and [`spam_score`] operate on raw entries
//!
//! Entries are `chainId/address/score` strings. Address matching is
//! case-insensitive; malformed entries are skipped, never fatal.
//!
//! Fetching, caching and the lookup API live in the companion
//! spamlists-client crate.

mod network;
mod resource;
mod entry;
mod data;
mod error;

pub use network::Network;
pub use resource::{AssetKind, Confidence, ResourceKey};
pub use entry::{is_contract_spam, parse_entry, spam_score, ParsedEntry};
pub use data::SpamListData;
pub use error::Error;

/// Constants shared by the list tooling
pub mod constants {
    /// Host root under which the list files are published
    pub const DEFAULT_BASE_URL: &str =
        "https://raw.githubusercontent.com/covalenthq/goldrush-enhanced-spam-lists/main/src/lists";

    /// Cache directory name under the system temp directory
    pub const CACHE_DIR_NAME: &str = "goldrush-spam-cache";
}
