//! Aggregation and ranking

use std::cmp::Ordering;

use tracing::debug;

use crate::core::error::Result;
use crate::core::model::{Entry, FrequencyMap, Token};

/// Entries in output order
pub type RankedList = Vec<Entry>;

/// Fold a token stream into counts.
///
/// Stops at the first error; no partial map is returned.
pub fn aggregate<I>(tokens: I) -> Result<FrequencyMap>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut map = FrequencyMap::new();
    for token in tokens {
        map.record(token?);
    }
    debug!(distinct = map.len(), total = map.total(), "aggregated tokens");
    Ok(map)
}

/// Count descending, then token ascending
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.token.cmp(&b.token))
}

/// Order every entry of the map.
///
/// Tokens are unique keys, so the comparator never reports two entries equal
/// and the result is independent of map iteration order.
pub fn rank(map: FrequencyMap) -> RankedList {
    let mut entries = map.into_entries();
    entries.sort_unstable_by(compare_entries);
    entries
}
