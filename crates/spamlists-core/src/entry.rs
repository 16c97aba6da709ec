//! Parsing and matching of raw list entries
//!
//! An entry is a `chainId/address/score` string. Only the address and
//! score fields carry meaning here; entries without at least a chain id
//! and address are skipped wherever they appear.

/// Fields of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedEntry<'a> {
    pub chain_id: &'a str,
    pub address: &'a str,
    pub score: Option<&'a str>,
}

/// Split an entry into its fields. Returns `None` when the entry lacks
/// the chain id or address field.
pub fn parse_entry(entry: &str) -> Option<ParsedEntry<'_>> {
    let mut fields = entry.split('/');
    let chain_id = fields.next()?;
    let address = fields.next()?;
    let score = fields.next();
    Some(ParsedEntry {
        chain_id,
        address,
        score,
    })
}

/// Case-insensitive membership test of `address` against raw list entries.
///
/// Malformed entries never match. An empty list never matches.
pub fn is_contract_spam<I, S>(address: &str, entries: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries.into_iter().any(|entry| {
        parse_entry(entry.as_ref())
            .map(|parsed| parsed.address.eq_ignore_ascii_case(address))
            .unwrap_or(false)
    })
}

/// Score field of an entry, verbatim. `None` when the entry has fewer
/// than three fields.
pub fn spam_score(entry: &str) -> Option<&str> {
    entry.split('/').nth(2)
}
