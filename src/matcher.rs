//! Substitution-tolerant matching of IUPAC patterns against sequences.
//!
//! All scans delegate to [`is_match`] for every candidate offset, so that
//! [`first_match`] is always the smallest element of [`all_matches`].

use std::ops::Range;

use crate::pattern::Pattern;

/// Start offsets at which a pattern of `pattern_len` fits inside a subject of
/// `subject_len`. Empty for empty patterns and for patterns longer than the
/// subject.
pub fn candidate_offsets(pattern_len: usize, subject_len: usize) -> Range<usize> {
    if pattern_len == 0 || pattern_len > subject_len {
        0..0
    } else {
        0..subject_len - pattern_len + 1
    }
}

/// Tests if `pattern` matches `subject` at `start` with at most `tolerance`
/// mismatching positions.
///
/// Windows running past the end of the subject never match, and neither does
/// an empty pattern.
pub fn is_match(pattern: &Pattern, subject: &[u8], start: usize, tolerance: usize) -> bool {
    if pattern.is_empty() || start.saturating_add(pattern.len()) > subject.len() {
        return false;
    }

    let mut mismatches = 0;
    for (idx, &base) in subject[start..start + pattern.len()].iter().enumerate() {
        if !pattern.accepts(idx, base) {
            mismatches += 1;

            if mismatches > tolerance {
                return false;
            }
        }
    }

    true
}

/// Returns the leftmost offset at which `pattern` matches, if any.
pub fn first_match(pattern: &Pattern, subject: &[u8], tolerance: usize) -> Option<usize> {
    candidate_offsets(pattern.len(), subject.len())
        .find(|&start| is_match(pattern, subject, start, tolerance))
}

/// Returns every offset at which `pattern` matches, in increasing order.
/// Overlapping matches are all reported.
pub fn all_matches(pattern: &Pattern, subject: &[u8], tolerance: usize) -> Vec<usize> {
    candidate_offsets(pattern.len(), subject.len())
        .filter(|&start| is_match(pattern, subject, start, tolerance))
        .collect()
}
