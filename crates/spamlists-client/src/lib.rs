//! Client for the GoldRush enhanced spam lists
//!
//! Resolves (network, asset kind, confidence) to the published list
//! files, caches them in memory and on disk, and answers membership
//! checks against the result.
//!
//! ## Usage
//!
//! ```no_run
//! use spamlists_client::{CacheMode, SpamListClient};
//! use spamlists_core::{Confidence, Network};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SpamListClient::builder().build();
//!     let spam = client
//!         .is_erc20_spam(
//!             "0x00a7b9517d6184db4a9efdf07bdbc93515fa8bdd",
//!             Network::BaseMainnet,
//!             Confidence::Yes,
//!             CacheMode::Enabled,
//!         )
//!         .await?;
//!     println!("{}", spam);
//!     Ok(())
//! }
//! ```

mod cache;
mod client;
mod error;
mod fetch;

pub use cache::{ListCache, DEFAULT_TTL};
pub use client::{CacheMode, ClientBuilder, SpamListClient};
pub use error::{ClientError, Result};
pub use fetch::{DirSource, HttpSource, ListSource, DEFAULT_TIMEOUT};
