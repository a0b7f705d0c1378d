use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
///
/// `Revealed` carries the adjacent-mine count shown on the tile. A probed
/// mine becomes `Detonated`. Both revealed forms are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Flagged,
    Questioned,
    Revealed(u8),
    Detonated,
}

impl CellState {
    /// Cells still hiding their contents.
    pub const fn is_concealed(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged | Self::Questioned)
    }

    /// Cells carrying a flag or question annotation.
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Flagged | Self::Questioned)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_forms_are_not_concealed() {
        assert!(CellState::Covered.is_concealed());
        assert!(CellState::Flagged.is_concealed());
        assert!(CellState::Questioned.is_concealed());
        assert!(!CellState::Revealed(3).is_concealed());
        assert!(!CellState::Detonated.is_concealed());
    }

    #[test]
    fn only_annotations_count_as_marked() {
        assert!(CellState::Flagged.is_marked());
        assert!(CellState::Questioned.is_marked());
        assert!(!CellState::Covered.is_marked());
        assert!(!CellState::Revealed(0).is_marked());
    }
}
