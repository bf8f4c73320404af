//! Variant configuration options.

use crate::pile::EmptyTableau;

/// Configuration options for Klondike.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use patience::KlondikeOptions;
///
/// let options = KlondikeOptions::default()
///     .with_draw_count(3)
///     .with_redeal_limit(Some(2))
///     .with_allow_foundation_return(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KlondikeOptions {
    /// Cards dealt from the stock per deal (clamped to at least 1).
    pub draw_count: u8,
    /// Maximum number of waste recycles; `None` for unlimited.
    pub redeal_limit: Option<u32>,
    /// What an empty tableau column accepts.
    pub empty_tableau: EmptyTableau,
    /// Whether foundation cards may be played back to the tableau.
    pub allow_foundation_return: bool,
    /// Points lost when recycling the waste in draw-one games.
    pub recycle_penalty: i32,
}

impl Default for KlondikeOptions {
    fn default() -> Self {
        Self {
            draw_count: 1,
            redeal_limit: None,
            empty_tableau: EmptyTableau::KingOnly,
            allow_foundation_return: true,
            recycle_penalty: 100,
        }
    }
}

impl KlondikeOptions {
    /// Sets the number of cards dealt per deal.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::KlondikeOptions;
    ///
    /// let options = KlondikeOptions::default().with_draw_count(3);
    /// assert_eq!(options.draw_count, 3);
    /// ```
    #[must_use]
    pub const fn with_draw_count(mut self, draw_count: u8) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Sets the redeal limit.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::KlondikeOptions;
    ///
    /// let options = KlondikeOptions::default().with_redeal_limit(Some(0));
    /// assert_eq!(options.redeal_limit, Some(0));
    /// ```
    #[must_use]
    pub const fn with_redeal_limit(mut self, limit: Option<u32>) -> Self {
        self.redeal_limit = limit;
        self
    }

    /// Sets what an empty tableau column accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use patience::{EmptyTableau, KlondikeOptions};
    ///
    /// let options = KlondikeOptions::default().with_empty_tableau(EmptyTableau::AnyCard);
    /// assert_eq!(options.empty_tableau, EmptyTableau::AnyCard);
    /// ```
    #[must_use]
    pub const fn with_empty_tableau(mut self, empty: EmptyTableau) -> Self {
        self.empty_tableau = empty;
        self
    }

    /// Sets whether foundation cards may return to the tableau.
    #[must_use]
    pub const fn with_allow_foundation_return(mut self, allowed: bool) -> Self {
        self.allow_foundation_return = allowed;
        self
    }

    /// Sets the recycle penalty.
    #[must_use]
    pub const fn with_recycle_penalty(mut self, penalty: i32) -> Self {
        self.recycle_penalty = penalty;
        self
    }
}

/// Configuration options for FreeCell.
///
/// ```
/// use patience::FreeCellOptions;
///
/// let options = FreeCellOptions::default().with_free_cells(2);
/// assert_eq!(options.free_cells, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeCellOptions {
    /// Number of free cells.
    pub free_cells: u8,
    /// What an empty tableau column accepts.
    pub empty_tableau: EmptyTableau,
}

impl Default for FreeCellOptions {
    fn default() -> Self {
        Self {
            free_cells: 4,
            empty_tableau: EmptyTableau::AnyCard,
        }
    }
}

impl FreeCellOptions {
    /// Sets the number of free cells.
    #[must_use]
    pub const fn with_free_cells(mut self, free_cells: u8) -> Self {
        self.free_cells = free_cells;
        self
    }

    /// Sets what an empty tableau column accepts.
    #[must_use]
    pub const fn with_empty_tableau(mut self, empty: EmptyTableau) -> Self {
        self.empty_tableau = empty;
        self
    }
}
