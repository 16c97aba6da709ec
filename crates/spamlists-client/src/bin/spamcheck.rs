//! Spam list lookup CLI
//!
//! Run with:
//! ```bash
//! cargo run -p spamlists-client --bin spamcheck -- \
//!     0x00a7b9517d6184db4a9efdf07bdbc93515fa8bdd --network base-mainnet
//! ```

use clap::Parser;
use spamlists_client::{CacheMode, SpamListClient};
use spamlists_core::{is_contract_spam, parse_entry, spam_score, AssetKind, Confidence, Network};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spamcheck")]
#[command(about = "Check a contract address against the GoldRush spam lists")]
struct Args {
    /// Contract address to check
    address: String,

    /// Network identifier (e.g. eth-mainnet, bsc-mainnet)
    #[arg(long)]
    network: String,

    /// Check the NFT list instead of the token list
    #[arg(long)]
    nft: bool,

    /// Token list confidence: yes or maybe
    #[arg(long, default_value = "yes")]
    confidence: String,

    /// Always fetch, skipping the cache tiers
    #[arg(long)]
    no_cache: bool,

    /// Also print the matching entry's score
    #[arg(long)]
    score: bool,

    /// Override the list host root
    #[arg(long)]
    base_url: Option<String>,

    /// Override the cache directory
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("spamlists_client=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let network: Network = args.network.parse()?;
    let confidence: Confidence = args.confidence.parse()?;
    let kind = if args.nft { AssetKind::Nft } else { AssetKind::Erc20 };
    let mode = if args.no_cache {
        CacheMode::Bypass
    } else {
        CacheMode::Enabled
    };

    let mut builder = SpamListClient::builder();
    if let Some(url) = args.base_url {
        builder = builder.base_url(url);
    }
    if let Some(dir) = args.cache_dir {
        builder = builder.cache_dir(dir);
    }
    let client = builder.build();

    let entries = client.list(network, kind, confidence, mode).await?;
    let spam = is_contract_spam(&args.address, &entries);

    if spam && args.score {
        let matched = entries.iter().find(|entry| {
            parse_entry(entry)
                .map(|parsed| parsed.address.eq_ignore_ascii_case(&args.address))
                .unwrap_or(false)
        });
        match matched.and_then(|entry| spam_score(entry)) {
            Some(score) => println!("spam (score {})", score),
            None => println!("spam"),
        }
    } else if spam {
        println!("spam");
    } else {
        println!("not spam");
    }

    Ok(())
}
