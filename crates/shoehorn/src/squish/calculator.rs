//! Width allocation.
//!
//! [`WidthCalculator`] shrinks a set of natural column widths until their
//! total fits a width budget. Reduction follows the three-tier priority
//! order and is ratio-capped: no single visit may remove more than a
//! configurable fraction of a column's width (default 20%), so shrinkage is
//! spread across several passes and columns instead of flattening one column
//! in a single cut.

use crate::config::DEFAULT_MAX_SQUISH_RATIO;
use crate::error::{Result, SquishError};
use crate::widths::ColumnWidths;

use super::order::SquishOrder;

/// Shrinks column widths to fit a budget.
///
/// The calculator owns an independent copy of the width map it is given;
/// the caller's map is never observed to change.
///
/// # Example
///
/// ```rust
/// use shoehorn::{ColumnWidths, WidthCalculator};
///
/// let natural: ColumnWidths = [("normal", 20), ("squishable", 16)].into_iter().collect();
///
/// let fitted = WidthCalculator::new(34, &natural)
///     .squish_column("squishable")
///     .unwrap()
///     .squish_columns();
///
/// assert_eq!(fitted.get("normal"), Some(20));
/// assert_eq!(fitted.get("squishable"), Some(14));
/// ```
#[derive(Clone, Debug)]
pub struct WidthCalculator {
    budget: usize,
    widths: ColumnWidths,
    squish: Option<String>,
    angel: Option<String>,
    max_ratio: f64,
}

impl WidthCalculator {
    /// Create a calculator for the given budget and natural widths.
    ///
    /// The widths are copied; the caller's map stays untouched.
    pub fn new(budget: usize, widths: &ColumnWidths) -> Self {
        WidthCalculator {
            budget,
            widths: widths.clone(),
            squish: None,
            angel: None,
            max_ratio: DEFAULT_MAX_SQUISH_RATIO,
        }
    }

    /// Designate the column shrunk first.
    ///
    /// Rejects names absent from the width map.
    pub fn squish_column(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !self.widths.contains(&name) {
            return Err(SquishError::UnknownSquishColumn(name));
        }
        self.squish = Some(name);
        Ok(self)
    }

    /// Designate the column shrunk only when nothing else suffices.
    ///
    /// Rejects names absent from the width map.
    pub fn angel_column(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !self.widths.contains(&name) {
            return Err(SquishError::UnknownAngelColumn(name));
        }
        self.angel = Some(name);
        Ok(self)
    }

    /// Set the maximum fraction of a column's width removable per visit.
    pub fn max_squish_ratio(mut self, ratio: f64) -> Self {
        self.max_ratio = ratio;
        self
    }

    /// Shrink the widths until the total fits the budget.
    ///
    /// Passes over the priority order repeat until a fixed point is reached.
    /// Two conditions end the search: the total no longer exceeds the budget,
    /// or a full pass removes zero width (every remaining column is too
    /// narrow for the ratio cap to bite). The second condition makes
    /// infeasible budgets, zero included, return a best-effort and possibly
    /// over-budget map instead of looping.
    pub fn squish_columns(mut self) -> ColumnWidths {
        if self.widths.is_empty() {
            return self.widths;
        }

        let order = SquishOrder::build(
            &self.widths,
            self.squish.as_deref(),
            self.angel.as_deref(),
        );

        while self.widths.total() > self.budget {
            if self.squish_pass(&order) == 0 {
                break;
            }
        }
        self.widths
    }

    /// One pass over the priority order. Returns the total width removed.
    fn squish_pass(&mut self, order: &SquishOrder) -> usize {
        let mut removed = 0;

        for name in order.visit() {
            let total = self.widths.total();
            if total <= self.budget {
                break;
            }

            let width = self.widths.get(name).unwrap_or(0);
            if width == 0 {
                continue;
            }

            let overflow = total - self.budget;
            let ratio = overflow as f64 / width as f64;
            let amount = if ratio >= self.max_ratio {
                (width as f64 * self.max_ratio) as usize
            } else {
                overflow
            };

            self.widths.reduce(name, amount);
            removed += amount;
        }

        removed
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_widths() -> impl Strategy<Value = Vec<(String, usize)>> {
        proptest::collection::vec(1usize..120, 1..8).prop_map(|ws| {
            ws.into_iter()
                .enumerate()
                .map(|(i, w)| (format!("col{}", i), w))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn no_column_ever_grows(entries in arb_widths(), budget in 0usize..400) {
            let original: ColumnWidths = entries.iter().cloned().collect();
            let fitted = WidthCalculator::new(budget, &original).squish_columns();
            for (name, width) in original.iter() {
                prop_assert!(fitted.get(name).unwrap() <= width);
            }
        }

        #[test]
        fn key_set_and_order_are_preserved(entries in arb_widths(), budget in 0usize..400) {
            let original: ColumnWidths = entries.iter().cloned().collect();
            let fitted = WidthCalculator::new(budget, &original).squish_columns();
            let before: Vec<&str> = original.names().collect();
            let after: Vec<&str> = fitted.names().collect();
            prop_assert_eq!(before, after);
        }

        #[test]
        fn generous_budget_is_identity(entries in arb_widths(), slack in 0usize..50) {
            let original: ColumnWidths = entries.iter().cloned().collect();
            let budget = original.total() + slack;
            let fitted = WidthCalculator::new(budget, &original).squish_columns();
            prop_assert_eq!(fitted, original);
        }

        #[test]
        fn feasible_budget_is_reached(entries in arb_widths(), budget in 0usize..400) {
            // The cap can grind any column down to four, and the exact
            // overflow branch covers the last few characters, so any budget
            // of at least 4×columns is reachable.
            let original: ColumnWidths = entries.iter().cloned().collect();
            let fitted = WidthCalculator::new(budget, &original).squish_columns();
            if budget >= 4 * original.len() {
                prop_assert!(fitted.total() <= budget);
            }
        }
    }
}
