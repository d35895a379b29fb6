pub mod clean;
pub mod log;
pub mod scan;
pub mod stats;

use std::collections::BTreeSet;

/// Combine configured and per-invocation skip names into one exact-match set.
fn merge_skip_sets(configured: &[String], requested: &[String]) -> BTreeSet<String> {
    configured
        .iter()
        .chain(requested.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_skip_sets_deduplicates() {
        let merged = merge_skip_sets(
            &["a".to_string(), "b".to_string()],
            &["b".to_string(), "c".to_string()],
        );
        assert_eq!(merged.len(), 3);
        assert!(merged.contains("a"));
        assert!(merged.contains("c"));
    }
}
