use ndarray::Array2;

use super::*;

/// Uniformly random placement: lay the mines out first, then Fisher–Yates shuffle the whole
/// board. The same seed always produces the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let width = usize::from(config.width());
        let mines = usize::from(config.mines());
        let mut mine_mask =
            Array2::from_shape_fn(config.size().to_nd_index(), |(row, col)| {
                row * width + col < mines
            });

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = mine_mask
                .as_slice_mut()
                .expect("layout should be standard");
            for i in (1..cells.len()).rev() {
                let j = rng.random_range(0..=i);
                cells.swap(i, j);
            }
        }

        let board = Board::from_mine_mask(mine_mask);

        // double check mine count
        if board.mine_count() != config.mines() {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines()
            );
        }
        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.width(),
            config.height(),
            board.mine_count(),
            self.seed
        );
        board
    }
}
