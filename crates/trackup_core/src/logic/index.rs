//! Positional index into the displayed listing.

use std::fmt::{Display, Formatter};

/// Position in a displayed list, convertible between one- and zero-based
/// forms. Users always see one-based numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Returns `None` for `0`, which has no one-based meaning.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    /// Saturates at `usize::MAX`.
    pub fn one_based(self) -> usize {
        self.zero_based.saturating_add(1)
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
