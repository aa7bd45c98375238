use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    InProgress,
    Lost,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost)
    }
}

/// One game: an immutable board plus the player's annotations on it.
///
/// Cells must be marked before they can be committed. Committing a cell checks the mark
/// against the board, and only a wrong guess ends the game. There is no win state, a
/// session stays in progress until a wrong guess is made.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: Board,
    cells: Array2<CellMark>,
    revealed_count: CellCount,
    marked_count: CellCount,
    state: SessionState,
    lost_at: Option<Coord2>,
}

impl GameSession {
    /// Generates a fresh board for `config` from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::from_board(ShuffleGenerator::new(seed).generate(config))
    }

    pub fn from_board(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            cells: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            marked_count: 0,
            state: Default::default(),
            lost_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state.is_finished()
    }

    /// Bounds as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Unopened cells currently carrying a safe or mine mark.
    pub fn marked_count(&self) -> CellCount {
        self.marked_count
    }

    /// The committed cell that ended the game.
    pub fn lost_at(&self) -> Option<Coord2> {
        self.lost_at
    }

    /// # Panics
    ///
    /// When `coords` lies outside the board.
    pub fn cell_at(&self, coords: Coord2) -> CellMark {
        self.cells[coords.to_nd_index()]
    }

    /// Display value of a cell, derived from its annotation and the board.
    ///
    /// # Panics
    ///
    /// When `coords` lies outside the board.
    pub fn view_at(&self, coords: Coord2) -> CellView {
        let is_mine = self.board.is_mine(coords);
        match self.cell_at(coords) {
            CellMark::Revealed if is_mine && self.lost_at == Some(coords) => CellView::Exploded,
            CellMark::Revealed => CellView::Open(self.board.neighbor_mine_count(coords)),
            CellMark::Unopened(Mark::Mine) => CellView::MarkedMine,
            CellMark::Unopened(_) if is_mine && self.is_lost() => CellView::Mine,
            CellMark::Unopened(mark) => mark.into(),
        }
    }

    /// Secondary action: cycle the mark of an unopened cell.
    pub fn secondary(&mut self, coords: Coord2) -> Result<ActionOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let CellMark::Unopened(mark) = self.cells[coords.to_nd_index()] else {
            log::trace!("Ignored mark on revealed cell {:?}", coords);
            return Ok(ActionOutcome::Ignored);
        };

        let next = mark.cycle();
        self.cells[coords.to_nd_index()] = CellMark::Unopened(next);
        match (mark.is_marked(), next.is_marked()) {
            (false, true) => self.marked_count += 1,
            (true, false) => self.marked_count -= 1,
            _ => {}
        }
        log::trace!("Marked {:?}: {:?} -> {:?}", coords, mark, next);

        Ok(ActionOutcome::Marked(next))
    }

    /// Primary action: commit a marked cell, checking the mark against the board.
    ///
    /// Unmarked and already revealed cells are left alone.
    pub fn primary(&mut self, coords: Coord2) -> Result<ActionOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let guessed_mine = match self.cells[coords.to_nd_index()] {
            CellMark::Unopened(Mark::Safe) => false,
            CellMark::Unopened(Mark::Mine) => true,
            cell => {
                log::trace!("Ignored commit on {:?} in state {:?}", coords, cell);
                return Ok(ActionOutcome::Ignored);
            }
        };

        self.cells[coords.to_nd_index()] = CellMark::Revealed;
        self.revealed_count += 1;
        self.marked_count -= 1;

        let clue = self.board.clue_at(coords);
        let report = CellReport {
            coords,
            is_mine: clue.is_mine,
            neighbor_count: clue.neighbor_count,
        };

        if guessed_mine != report.is_mine {
            self.end_game(coords);
            Ok(ActionOutcome::GameLost(report))
        } else {
            log::trace!(
                "Committed {:?} as {}, count {}",
                coords,
                if guessed_mine { "mine" } else { "safe" },
                report.neighbor_count
            );
            Ok(ActionOutcome::Revealed(report))
        }
    }

    fn end_game(&mut self, coords: Coord2) {
        if self.state.is_finished() {
            return;
        }
        log::debug!("Wrong guess at {:?}, game lost", coords);
        self.state = SessionState::Lost;
        self.lost_at = Some(coords);
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            log::warn!("Rejected move on a finished game");
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
