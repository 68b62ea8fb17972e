//! Stable descending sort of scored candidates.
//!
//! Classic top-down merge sort. Stability is part of the contract: equal
//! scores keep their input order, which is the only tiebreak candidates
//! have.

use crate::matcher::RankedMatch;

/// Sorts candidates by score, highest first. Ties preserve input order;
/// empty and single-element inputs come back unchanged.
pub fn rank(mut candidates: Vec<RankedMatch>) -> Vec<RankedMatch> {
    if candidates.len() <= 1 {
        return candidates;
    }
    let second = candidates.split_off(candidates.len() / 2);
    merge(rank(candidates), rank(second))
}

fn merge(left: Vec<RankedMatch>, right: Vec<RankedMatch>) -> Vec<RankedMatch> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // ties take the left head, so equal scores keep their input order
        if l.score >= r.score {
            merged.push(left.next().unwrap());
        } else {
            merged.push(right.next().unwrap());
        }
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, score: f64, position: usize) -> RankedMatch {
        RankedMatch {
            display_name: name.to_string(),
            score,
            contact_details: String::new(),
            position,
        }
    }

    fn names(ranked: &[RankedMatch]) -> Vec<&str> {
        ranked.iter().map(|c| c.display_name.as_str()).collect()
    }

    #[test]
    fn test_rank_empty_and_single() {
        assert!(rank(Vec::new()).is_empty());
        let single = vec![candidate("only", 2.0, 0)];
        assert_eq!(names(&rank(single)), vec!["only"]);
    }

    #[test]
    fn test_rank_descending() {
        let input = vec![
            candidate("d", 0.5, 0),
            candidate("c", 1.5, 1),
            candidate("b", 3.0, 2),
            candidate("a", 4.5, 3),
        ];
        assert_eq!(names(&rank(input)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let input = vec![
            candidate("first", 1.0, 0),
            candidate("second", 1.0, 1),
            candidate("third", 1.0, 2),
            candidate("top", 2.0, 3),
        ];
        assert_eq!(names(&rank(input)), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let input = vec![
            candidate("b", 1.0, 0),
            candidate("a", 2.5, 1),
            candidate("c", 1.0, 2),
            candidate("d", 0.0, 3),
        ];
        let once = rank(input);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rank_mixed_ties_and_distinct() {
        let input = vec![
            candidate("w", 0.5, 0),
            candidate("x", 2.0, 1),
            candidate("y", 0.5, 2),
            candidate("z", 2.0, 3),
            candidate("q", 1.0, 4),
        ];
        assert_eq!(names(&rank(input)), vec!["x", "z", "q", "w", "y"]);
    }
}
