//! Reduction-priority ordering.
//!
//! The order in which columns are considered for shrinking is a three-tier
//! policy: the squish column (first on any chopping block), then every
//! ordinary column in declaration order, then the angel column (spared until
//! nothing else suffices). The order is built once per calculator run.

use crate::widths::ColumnWidths;

/// The three-tier column visit order for width reduction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SquishOrder {
    squish: Vec<String>,
    ordinary: Vec<String>,
    angel: Vec<String>,
}

impl SquishOrder {
    /// Build the visit order from the width map and the role designations.
    ///
    /// Callers have already validated that `squish` and `angel` name existing
    /// columns. When both designate the same column it occupies the squish
    /// tier only, so each pass visits it exactly once.
    pub(crate) fn build(
        widths: &ColumnWidths,
        squish: Option<&str>,
        angel: Option<&str>,
    ) -> Self {
        let angel = if squish.is_some() && squish == angel {
            None
        } else {
            angel
        };

        SquishOrder {
            squish: squish.map(String::from).into_iter().collect(),
            ordinary: widths
                .names()
                .filter(|name| Some(*name) != squish && Some(*name) != angel)
                .map(String::from)
                .collect(),
            angel: angel.map(String::from).into_iter().collect(),
        }
    }

    /// Column names in reduction-priority order.
    pub(crate) fn visit(&self) -> impl Iterator<Item = &str> {
        self.squish
            .iter()
            .chain(&self.ordinary)
            .chain(&self.angel)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths() -> ColumnWidths {
        [("a", 10), ("b", 10), ("c", 10)].into_iter().collect()
    }

    fn visited(order: &SquishOrder) -> Vec<&str> {
        order.visit().collect()
    }

    #[test]
    fn no_roles_uses_declaration_order() {
        let order = SquishOrder::build(&widths(), None, None);
        assert_eq!(visited(&order), vec!["a", "b", "c"]);
    }

    #[test]
    fn squish_column_moves_first() {
        let order = SquishOrder::build(&widths(), Some("b"), None);
        assert_eq!(visited(&order), vec!["b", "a", "c"]);
    }

    #[test]
    fn angel_column_moves_last() {
        let order = SquishOrder::build(&widths(), None, Some("a"));
        assert_eq!(visited(&order), vec!["b", "c", "a"]);
    }

    #[test]
    fn both_roles_bracket_the_ordinary_tier() {
        let order = SquishOrder::build(&widths(), Some("c"), Some("a"));
        assert_eq!(visited(&order), vec!["c", "b", "a"]);
    }

    #[test]
    fn equal_roles_collapse_to_one_visit() {
        let order = SquishOrder::build(&widths(), Some("b"), Some("b"));
        assert_eq!(visited(&order), vec!["b", "a", "c"]);
    }
}
