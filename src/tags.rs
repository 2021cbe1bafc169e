use crate::drs::{ServerRecord, TagSet};
use std::collections::HashMap;
use std::io::{self, Write};

/// Source server id to its tags.
pub type TagIndex = HashMap<String, TagSet>;

/// Index tags by server id. A repeated id keeps the tags of its last record.
pub fn build_index<I>(records: I) -> TagIndex
where
    I: IntoIterator<Item = ServerRecord>,
{
    records
        .into_iter()
        .map(|record| (record.id, record.tags))
        .collect()
}

/// The tag name a match key refers to: everything before the first `.`.
///
/// `"env.prod"` and `"env"` both name `env`; the value part is not used.
pub fn tag_name(key: &str) -> &str {
    key.split_once('.').map_or(key, |(name, _)| name)
}

/// Ids of every server carrying the tag named by `key`, whatever its value.
///
/// Prints the match count to stdout. Order follows the index and is not stable.
pub fn match_by_tag(key: &str, index: &TagIndex) -> Vec<String> {
    match_by_tag_reporting(key, index, &mut io::stdout())
}

/// [`match_by_tag`], writing the `Updating <n> servers` line to `out`.
pub fn match_by_tag_reporting<W: Write>(
    key: &str,
    index: &TagIndex,
    out: &mut W,
) -> Vec<String> {
    let name = tag_name(key);
    let matched: Vec<String> = index
        .iter()
        .filter(|(_, tags)| tags.contains_key(name))
        .map(|(id, _)| id.clone())
        .collect();

    // informational only, a failed write does not affect the result
    let _ = writeln!(out, "Updating {} servers", matched.len());
    matched
}
