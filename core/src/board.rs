use ndarray::Array2;

use crate::*;

/// Immutable minefield, stored row-major with shape `(height, width)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

/// What the diagnostic view shows for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellClue {
    pub coords: Coord2,
    pub is_mine: bool,
    pub neighbor_count: u8,
}

impl Board {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        // at most 255 * 255 cells, fits the count type
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a fixed layout, `size` being `(rows, cols)`.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (height, width) = self.size();
        GameConfig {
            width,
            height,
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Bounds as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Mine flags in row-major order, index `row * width + col`.
    pub fn layout(&self) -> impl Iterator<Item = bool> + '_ {
        self.mine_mask.iter().copied()
    }

    /// Out-of-bounds coordinates are never mines, so edge lookups need no special casing.
    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Mines among the in-bounds 8-neighbors, plus one when the cell itself is a mine.
    ///
    /// The self-inclusive count is what gets displayed on a revealed cell, so a correctly
    /// identified mine with no mined neighbors shows `1`.
    pub fn neighbor_mine_count(&self, coords: Coord2) -> u8 {
        let neighbors = self
            .iter_neighbors(coords)
            .filter(|&pos| self.is_mine(pos))
            .count() as u8;
        neighbors + u8::from(self.is_mine(coords))
    }

    pub fn clue_at(&self, coords: Coord2) -> CellClue {
        CellClue {
            coords,
            is_mine: self.is_mine(coords),
            neighbor_count: self.neighbor_mine_count(coords),
        }
    }

    /// Every cell's mine flag and count in row-major order, for inspection tooling.
    pub fn clues(&self) -> impl Iterator<Item = CellClue> + '_ {
        self.mine_mask
            .indexed_iter()
            .map(|((row, col), _)| self.clue_at((row as Coord, col as Coord)))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn rejects_mines_outside_the_board() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn out_of_bounds_is_never_a_mine() {
        let full = board((2, 3), &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert!(full.is_mine((1, 2)));
        assert!(!full.is_mine((2, 0)));
        assert!(!full.is_mine((0, 3)));
        assert!(!full.is_mine((Coord::MAX, Coord::MAX)));
    }

    #[test]
    fn generated_boards_have_no_mines_out_of_bounds() {
        for (width, height, mines) in [(1, 1, 0), (1, 1, 1), (3, 3, 9), (5, 2, 4), (9, 9, 10)] {
            let config = GameConfig::new(width, height, mines).unwrap();
            for seed in 0..8 {
                let board = ShuffleGenerator::new(seed).generate(config);
                for col in 0..width {
                    assert!(!board.is_mine((height, col)));
                }
                for row in 0..height {
                    assert!(!board.is_mine((row, width)));
                }
                assert!(!board.is_mine((height, width)));
                assert!(!board.is_mine((Coord::MAX, Coord::MAX)));
                assert_eq!(board.validate_coords((height, 0)), Err(GameError::InvalidCoords));
            }
        }
    }

    #[test]
    fn layout_is_row_major() {
        let board = board((2, 3), &[(0, 2), (1, 0)]);
        let layout: Vec<bool> = board.layout().collect();
        assert_eq!(layout, [false, false, true, true, false, false]);
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 2);
    }

    #[test]
    fn neighbor_count_includes_the_cell_itself() {
        // * * .
        // . * .
        // . . .
        let board = board((3, 3), &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(board.neighbor_mine_count((0, 0)), 3);
        assert_eq!(board.neighbor_mine_count((1, 1)), 3);
        assert_eq!(board.neighbor_mine_count((0, 2)), 2);
        assert_eq!(board.neighbor_mine_count((2, 2)), 1);
        assert_eq!(board.neighbor_mine_count((2, 0)), 1);
    }

    #[test]
    fn full_board_counts_reach_nine() {
        let mines: Vec<Coord2> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let board = board((3, 3), &mines);
        assert_eq!(board.neighbor_mine_count((1, 1)), 9);
        assert_eq!(board.neighbor_mine_count((0, 0)), 4);
        assert_eq!(board.safe_cell_count(), 0);
    }

    #[test]
    fn empty_board_counts_are_zero() {
        let board = board((3, 3), &[]);
        assert!(board.clues().all(|clue| clue.neighbor_count == 0 && !clue.is_mine));
    }

    #[test]
    fn single_mine_cell_counts_itself() {
        let board = board((1, 1), &[(0, 0)]);
        assert!(board.is_mine((0, 0)));
        assert_eq!(board.neighbor_mine_count((0, 0)), 1);
    }

    #[test]
    fn clues_visit_every_cell_once_in_order() {
        let board = board((2, 2), &[(1, 1)]);
        let clues: Vec<CellClue> = board.clues().collect();
        let coords: Vec<Coord2> = clues.iter().map(|clue| clue.coords).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(clues[3].neighbor_count, 1);
        assert!(clues[3].is_mine);
        assert_eq!(clues[0].neighbor_count, 1);
    }

    #[test]
    fn game_config_round_trips_the_shape() {
        let board = board((2, 5), &[(0, 0)]);
        let config = board.game_config();
        assert_eq!((config.width(), config.height(), config.mines()), (5, 2, 1));
    }
}
