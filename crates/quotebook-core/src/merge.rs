//! Remote-to-local merge
//!
//! Reconciles a remote quote list into the local one by exact text match.
//! New texts are appended, a differing category on the first local match is
//! overwritten. Nothing is ever deleted on either side.

use crate::quote::Quote;
use serde::{Deserialize, Serialize};

/// What a merge changed locally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Remote quotes appended to the local list
    pub added: usize,
    /// Local quotes whose category was overwritten
    pub updated: usize,
}

impl MergeReport {
    /// Whether the local list was mutated
    #[must_use]
    pub fn changed(&self) -> bool {
        self.added > 0 || self.updated > 0
    }
}

/// Merge `remote` into `local`
///
/// The first local quote with the same text wins when duplicates exist.
pub fn merge(local: &mut Vec<Quote>, remote: &[Quote]) -> MergeReport {
    let mut report = MergeReport::default();

    for incoming in remote {
        match local.iter_mut().find(|q| q.text == incoming.text) {
            None => {
                local.push(incoming.clone());
                report.added += 1;
            }
            Some(existing) if existing.category != incoming.category => {
                existing.category.clone_from(&incoming.category);
                report.updated += 1;
            }
            Some(_) => {}
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELIEVE: &str = "Believe you can and you're halfway there.";

    #[test]
    fn test_category_overwrite() {
        let mut local = vec![Quote::new(BELIEVE, "Mindset")];
        let report = merge(&mut local, &[Quote::new(BELIEVE, "Growth")]);

        assert_eq!(report, MergeReport { added: 0, updated: 1 });
        assert_eq!(local, vec![Quote::new(BELIEVE, "Growth")]);
    }

    #[test]
    fn test_append_new_text() {
        let mut local = vec![Quote::new("a", "x")];
        let report = merge(&mut local, &[Quote::new("b", "y")]);

        assert_eq!(report.added, 1);
        assert_eq!(local.len(), 2);
        assert_eq!(local[1], Quote::new("b", "y"));
    }

    #[test]
    fn test_idempotent() {
        let mut local = vec![Quote::new("a", "x"), Quote::new("c", "z")];
        let remote = vec![Quote::new("a", "y"), Quote::new("b", "y")];

        assert!(merge(&mut local, &remote).changed());
        let snapshot = local.clone();
        let second = merge(&mut local, &remote);

        assert!(!second.changed());
        assert_eq!(local, snapshot);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut local = vec![Quote::new("dup", "one"), Quote::new("dup", "two")];
        merge(&mut local, &[Quote::new("dup", "three")]);

        assert_eq!(local[0].category, "three");
        assert_eq!(local[1].category, "two");
    }

    #[test]
    fn test_no_deletions() {
        let mut local = vec![Quote::new("keep", "me")];
        let report = merge(&mut local, &[]);

        assert!(!report.changed());
        assert_eq!(local.len(), 1);
    }
}
