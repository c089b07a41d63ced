//! Match scoring.
//!
//! Each facet pass adds a flat bonus. An exact name match (`3000 + 500`)
//! outranks anything a later facet can score (at most `2000 + 500`).

/// Name / alias facet.
pub const NAME_BONUS: i32 = 3000;
/// Description facet.
pub const DESCRIPTION_BONUS: i32 = 2000;
/// Tag facet.
pub const TAG_BONUS: i32 = 1000;
/// Category facet.
pub const CATEGORY_BONUS: i32 = 0;

/// Score of a case-insensitive exact match, before the bonus.
pub const EXACT_SCORE: i32 = 500;
const PREFIX_WEIGHT: i32 = 3;
const SUBSTRING_WEIGHT: i32 = 2;

/// Score `candidate` against an already-lowercased `query`.
///
/// Exact beats prefix beats substring; among prefix and substring matches,
/// shorter candidates score higher. Returns `None` when the query does not
/// occur in the candidate.
pub fn match_score(query: &str, candidate: &str, bonus: i32) -> Option<i32> {
    let candidate = candidate.to_lowercase();
    let query_len = query.len() as i32;
    let candidate_len = candidate.len() as i32;

    if candidate == query {
        Some(EXACT_SCORE + bonus)
    } else if candidate.starts_with(query) {
        Some(PREFIX_WEIGHT * query_len - candidate_len + bonus)
    } else if candidate.contains(query) {
        Some(SUBSTRING_WEIGHT * query_len - candidate_len + bonus)
    } else {
        None
    }
}
