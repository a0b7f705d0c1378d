use crate::*;
pub use random::*;

mod random;

/// Strategy for laying out mines on a fresh board.
///
/// Takes an already-validated [`BoardConfig`], so generation itself cannot
/// fail.
pub trait MinefieldGenerator {
    fn generate(self, config: BoardConfig) -> Minefield;
}
