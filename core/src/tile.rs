use serde::{Deserialize, Serialize};

/// Provisional guess a player attaches to an unopened cell before committing it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    NoMark,
    Safe,
    Mine,
}

impl Mark {
    /// Next mark in the `NoMark -> Safe -> Mine -> NoMark` cycle.
    pub const fn cycle(self) -> Self {
        match self {
            Self::NoMark => Self::Safe,
            Self::Safe => Self::Mine,
            Self::Mine => Self::NoMark,
        }
    }

    pub const fn is_marked(self) -> bool {
        !matches!(self, Self::NoMark)
    }
}

/// Canonical per-cell annotation stored by the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    Unopened(Mark),
    Revealed,
}

impl CellMark {
    pub const fn is_unopened(self) -> bool {
        matches!(self, Self::Unopened(_))
    }
}

impl Default for CellMark {
    fn default() -> Self {
        Self::Unopened(Mark::NoMark)
    }
}

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Closed,
    MarkedSafe,
    MarkedMine,
    /// Revealed with its neighbor count, `0` draws blank.
    Open(u8),
    /// Unmarked mine shown once the game is lost.
    Mine,
    /// The cell whose commit lost the game, when it was a mine.
    Exploded,
}

impl CellView {
    /// Whether the cell is visually closed.
    pub const fn is_closed(self) -> bool {
        use CellView::*;
        match self {
            Closed => true,
            MarkedSafe => true,
            MarkedMine => true,
            Open(_) => false,
            Mine => false,
            Exploded => false,
        }
    }
}

impl From<Mark> for CellView {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::NoMark => CellView::Closed,
            Mark::Safe => CellView::MarkedSafe,
            Mark::Mine => CellView::MarkedMine,
        }
    }
}
