//! Fill-order policies: which unfilled category may be scored next.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::key::CategoryKey;

/// Predicate on the fill order of a column.
///
/// Policies only gate; they never mutate. All variants deny an empty
/// category list and an unknown key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderPolicy {
    /// Any unfilled category.
    Free,
    /// Only the first unfilled category in definition order.
    TopDown,
    /// Only the last unfilled category in definition order.
    BottomUp,
}

impl OrderPolicy {
    /// May `key` be filled given the current fill state?
    #[must_use]
    pub fn can_fill(&self, categories: &Vector<Category>, key: &CategoryKey) -> bool {
        let Some(target) = categories.iter().position(|c| c.key() == key) else {
            return false;
        };
        if categories[target].is_filled() {
            return false;
        }
        match self {
            OrderPolicy::Free => true,
            OrderPolicy::TopDown => {
                let first_unfilled = categories.iter().position(|c| !c.is_filled());
                first_unfilled == Some(target)
            }
            OrderPolicy::BottomUp => {
                let last_unfilled = categories.iter().rposition(|c| !c.is_filled());
                last_unfilled == Some(target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::die::Die;
    use crate::rules::Rule;

    fn dice(values: &[u8]) -> Vec<Die> {
        values.iter().map(|&v| Die::new(6, v).unwrap()).collect()
    }

    fn column(names: &[&str]) -> Vector<Category> {
        names
            .iter()
            .map(|&n| Category::new(CategoryKey::of(n), Rule::sum()))
            .collect()
    }

    fn fill(categories: &mut Vector<Category>, name: &str) {
        let idx = categories
            .iter()
            .position(|c| c.key().as_str() == name)
            .unwrap();
        let filled = categories[idx].fill(&dice(&[1, 2, 3])).unwrap();
        categories.set(idx, filled);
    }

    #[test]
    fn test_all_policies_deny_empty_list() {
        let empty = Vector::new();
        let key = CategoryKey::of("ones");
        for policy in [OrderPolicy::Free, OrderPolicy::TopDown, OrderPolicy::BottomUp] {
            assert!(!policy.can_fill(&empty, &key));
        }
    }

    #[test]
    fn test_all_policies_deny_unknown_key() {
        let cats = column(&["a", "b"]);
        let key = CategoryKey::of("zzz");
        for policy in [OrderPolicy::Free, OrderPolicy::TopDown, OrderPolicy::BottomUp] {
            assert!(!policy.can_fill(&cats, &key));
        }
    }

    #[test]
    fn test_free_allows_any_unfilled() {
        let mut cats = column(&["a", "b", "c"]);
        fill(&mut cats, "b");

        assert!(OrderPolicy::Free.can_fill(&cats, &CategoryKey::of("a")));
        assert!(!OrderPolicy::Free.can_fill(&cats, &CategoryKey::of("b")));
        assert!(OrderPolicy::Free.can_fill(&cats, &CategoryKey::of("c")));
    }

    #[test]
    fn test_top_down_allows_only_first_unfilled() {
        let mut cats = column(&["a", "b", "c"]);
        assert!(OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("a")));
        assert!(!OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("b")));

        fill(&mut cats, "a");
        assert!(!OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("a")));
        assert!(OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("b")));
        assert!(!OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("c")));
    }

    #[test]
    fn test_bottom_up_allows_only_last_unfilled() {
        let mut cats = column(&["a", "b", "c"]);
        assert!(!OrderPolicy::BottomUp.can_fill(&cats, &CategoryKey::of("a")));
        assert!(OrderPolicy::BottomUp.can_fill(&cats, &CategoryKey::of("c")));

        fill(&mut cats, "c");
        assert!(OrderPolicy::BottomUp.can_fill(&cats, &CategoryKey::of("b")));
        assert!(!OrderPolicy::BottomUp.can_fill(&cats, &CategoryKey::of("c")));
    }

    #[test]
    fn test_top_down_skips_holes_left_by_nothing() {
        // A gap cannot arise under TopDown itself, but the policy is a pure
        // predicate over whatever fill state it is handed.
        let mut cats = column(&["a", "b", "c"]);
        fill(&mut cats, "b");
        assert!(OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("a")));
        assert!(!OrderPolicy::TopDown.can_fill(&cats, &CategoryKey::of("c")));
    }
}
