//! On-screen ordering of puzzle digits.

use std::fmt::{self, Display};

/// Error returned when an array is not a permutation of `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{order:?} is not a permutation of 0..5")]
pub struct DisplayOrderError {
    /// The rejected order.
    pub order: [usize; 5],
}

/// A permutation of the five digit slots.
///
/// Screen slot `i` shows `digits[order[i]]`. The order is chosen independently
/// of the digit values, so the displayed pair and result land in random slots.
///
/// # Examples
///
/// ```
/// use logic_wheel_core::DisplayOrder;
///
/// let order = DisplayOrder::try_from_array([4, 0, 3, 1, 2]).unwrap();
/// assert_eq!(order.apply(&['a', 'b', 'c', 'd', 'e']), ['e', 'a', 'd', 'b', 'c']);
///
/// assert!(DisplayOrder::try_from_array([0, 0, 1, 2, 3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayOrder {
    order: [usize; 5],
}

impl DisplayOrder {
    /// The order that shows digits in generation order.
    pub const IDENTITY: Self = Self {
        order: [0, 1, 2, 3, 4],
    };

    /// Creates an order from an explicit permutation.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayOrderError`] if `order` is not a permutation of `0..5`.
    pub fn try_from_array(order: [usize; 5]) -> Result<Self, DisplayOrderError> {
        let mut seen = [false; 5];
        for &slot in &order {
            if slot >= seen.len() || seen[slot] {
                return Err(DisplayOrderError { order });
            }
            seen[slot] = true;
        }
        Ok(Self { order })
    }

    /// Returns the underlying permutation.
    #[must_use]
    pub const fn as_array(&self) -> &[usize; 5] {
        &self.order
    }

    /// Rearranges `values` into screen order.
    #[must_use]
    pub fn apply<T: Copy>(&self, values: &[T; 5]) -> [T; 5] {
        self.order.map(|i| values[i])
    }
}

impl Default for DisplayOrder {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for DisplayOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in self.order {
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
