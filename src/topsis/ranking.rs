//! Rank assignment from scores.

use super::config::TiePolicy;
use std::cmp::Ordering;

/// Ranks `scores` descending (highest score = rank 1).
///
/// Ranks are returned in the same order as `scores`. Ties are exact
/// equality; callers round scores beforehand so that differences below
/// the reporting precision collapse into ties.
///
/// # Examples
///
/// ```
/// use u_topsis::topsis::{assign_ranks, TiePolicy};
///
/// let scores = [0.7, 0.9, 0.7, 0.1];
/// assert_eq!(assign_ranks(&scores, TiePolicy::Competition), vec![2, 1, 2, 4]);
/// assert_eq!(assign_ranks(&scores, TiePolicy::Dense), vec![2, 1, 2, 3]);
/// ```
pub fn assign_ranks(scores: &[f64], policy: TiePolicy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    // Stable sort keeps input order inside tie groups.
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0usize; scores.len()];
    let mut dense = 0usize;
    let mut i = 0;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        dense += 1;
        let rank = match policy {
            TiePolicy::Competition => i + 1,
            TiePolicy::Dense => dense,
        };
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}
