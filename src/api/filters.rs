//! Response filtering for cast listings and person credits

use std::collections::HashSet;

use super::types::{CastMember, MovieCredit};

/// Keep the top-billed cast members
///
/// Drops members without an id or whose id is excluded, keeps those whose
/// `order` lies in `[0, limit)`, sorts by `order` and truncates to `limit`.
pub fn filter_cast(cast: Vec<CastMember>, limit: usize, exclude_ids: &[String]) -> Vec<CastMember> {
    let excluded: HashSet<&str> = exclude_ids.iter().map(String::as_str).collect();

    let mut kept: Vec<CastMember> = cast
        .into_iter()
        .filter(|member| {
            member
                .id
                .as_deref()
                .is_some_and(|id| !excluded.contains(id))
        })
        .filter(|member| {
            member
                .order
                .and_then(|order| usize::try_from(order).ok())
                .is_some_and(|order| order < limit)
        })
        .collect();

    // Stable, so equal orders keep API order
    kept.sort_by_key(|member| member.order);
    kept.truncate(limit);
    kept
}

/// Keep credits released inside `[start_date, end_date]`
///
/// Dates are ISO `YYYY-MM-DD`, so string comparison orders them correctly.
/// Credits without a release date are dropped; a missing bound is open.
pub fn filter_credits(
    credits: Vec<MovieCredit>,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Vec<MovieCredit> {
    credits
        .into_iter()
        .filter(|credit| {
            let Some(date) = credit.release_date.as_deref().filter(|d| !d.is_empty()) else {
                return false;
            };
            start_date.is_none_or(|start| date >= start) && end_date.is_none_or(|end| date <= end)
        })
        .collect()
}
