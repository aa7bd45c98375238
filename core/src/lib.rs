#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod session;
mod tile;
mod types;

/// Validated board shape and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Fails with [`GameError::InvalidConfiguration`] on an empty board or when the mines don't fit.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 || mines > mult(width, height) {
            log::warn!(
                "Rejected configuration {}x{} with {} mines",
                width,
                height,
                mines
            );
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// Bounds as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }
}

/// Board facts about a single cell, handed to renderers after a commit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellReport {
    pub coords: Coord2,
    pub is_mine: bool,
    pub neighbor_count: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Nothing changed, e.g. committing an unmarked cell or touching a revealed one.
    Ignored,
    /// The mark on an unopened cell moved to the contained value.
    Marked(Mark),
    Revealed(CellReport),
    /// The commit was a wrong guess and ended the session.
    GameLost(CellReport),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn is_game_lost(self) -> bool {
        matches!(self, Self::GameLost(_))
    }

    pub const fn report(self) -> Option<CellReport> {
        match self {
            Self::Revealed(report) | Self::GameLost(report) => Some(report),
            Self::Ignored | Self::Marked(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(GameConfig::new(0, 3, 0), Err(GameError::InvalidConfiguration));
        assert_eq!(GameConfig::new(3, 0, 0), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn config_rejects_too_many_mines() {
        assert_eq!(GameConfig::new(3, 3, 10), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn config_accepts_full_and_empty_boards() {
        let full = GameConfig::new(3, 3, 9).unwrap();
        assert_eq!(full.total_cells(), 9);
        assert_eq!(full.size(), (3, 3));

        let empty = GameConfig::new(4, 2, 0).unwrap();
        assert_eq!(empty.size(), (2, 4));
        assert_eq!(empty.mines(), 0);
    }

    #[test]
    fn largest_board_does_not_overflow() {
        let config = GameConfig::new(Coord::MAX, Coord::MAX, 1).unwrap();
        assert_eq!(config.total_cells(), 255 * 255);
    }

    #[test]
    fn outcome_report_only_for_commits() {
        let report = CellReport {
            coords: (0, 0),
            is_mine: false,
            neighbor_count: 2,
        };
        assert_eq!(ActionOutcome::Revealed(report).report(), Some(report));
        assert_eq!(ActionOutcome::GameLost(report).report(), Some(report));
        assert_eq!(ActionOutcome::Marked(Mark::Safe).report(), None);
        assert!(!ActionOutcome::Ignored.has_update());
        assert!(ActionOutcome::GameLost(report).is_game_lost());
    }
}
