//! Shared identity/dedup helpers for listener lists.
//!
//! Both registry variants keep listeners for a signal in an insertion-ordered
//! `Vec` and decide membership through a probe closure: the direct registry
//! probes by value equality, the keyed registry by the capability's key.
//! Keeping the scan and the shift-remove here keeps the dedup discipline in
//! one place.
//!
//! ## Rules
//! - Membership is a linear scan; listener lists are expected to stay small.
//! - Removal takes out the **first** matching entry and preserves the
//!   relative order of the rest.

/// Returns true when any entry matches `probe`.
pub(crate) fn contains<E>(entries: &[E], probe: impl Fn(&E) -> bool) -> bool {
    entries.iter().any(probe)
}

/// Removes the first entry matching `probe`, keeping relative order.
///
/// Returns `true` when an entry was removed, `false` when nothing matched.
pub(crate) fn remove_first<E>(entries: &mut Vec<E>, probe: impl Fn(&E) -> bool) -> bool {
    match entries.iter().position(probe) {
        Some(idx) => {
            entries.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_matches_by_probe() {
        let entries = vec![1, 2, 3];
        assert!(contains(&entries, |e| *e == 2));
        assert!(!contains(&entries, |e| *e == 9));
    }

    #[test]
    fn test_contains_empty_is_false() {
        let entries: Vec<i32> = Vec::new();
        assert!(!contains(&entries, |_| true));
    }

    #[test]
    fn test_remove_first_keeps_order() {
        let mut entries = vec!["a", "dup", "b", "dup", "c"];
        assert!(remove_first(&mut entries, |e| *e == "dup"));
        assert_eq!(entries, vec!["a", "b", "dup", "c"]);
    }

    #[test]
    fn test_remove_first_absent_is_noop() {
        let mut entries = vec![1, 2, 3];
        assert!(!remove_first(&mut entries, |e| *e == 9));
        assert_eq!(entries, vec![1, 2, 3]);
    }
}
