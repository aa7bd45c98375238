use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Board;
}
