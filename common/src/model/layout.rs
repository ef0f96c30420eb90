use serde::{Deserialize, Serialize};

/// How rendered cards are grouped into grid rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutPolicy {
    /// Every card stands alone inside the content row.
    Plain,
    /// Cards are wrapped two per `<div class="row">`; the last row is closed
    /// even when it holds a single card.
    #[default]
    Paired,
}

impl LayoutPolicy {
    /// Whether the card at `index` opens a new row wrapper.
    pub fn opens_row(self, index: usize) -> bool {
        matches!(self, LayoutPolicy::Paired) && index % 2 == 0
    }

    /// Whether the card at `index` closes the current row wrapper.
    pub fn closes_row(self, index: usize, total: usize) -> bool {
        matches!(self, LayoutPolicy::Paired) && (index % 2 == 1 || index + 1 == total)
    }
}
