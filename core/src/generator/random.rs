use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform placement: draws random positions and discards duplicates until
/// the requested count is placed. The config invariant `mines < rows * cols`
/// keeps the loop finite.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator<R> {
    rng: R,
}

impl RandomMinefieldGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMinefieldGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MinefieldGenerator for RandomMinefieldGenerator<R> {
    fn generate(mut self, config: BoardConfig) -> Minefield {
        let (rows, cols) = config.size();
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());

        let mut placed: CellCount = 0;
        while placed < config.mine_count() {
            let pos = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            let slot = &mut mines[pos.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }
        log::debug!("placed {} mines on a {}x{} board", placed, rows, cols);

        Minefield::from_mine_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mine_count() {
        for seed in 0..10 {
            let config = BoardConfig::new((9, 9), 10).unwrap();
            let field = RandomMinefieldGenerator::from_seed(seed).generate(config);

            assert_eq!(field.mine_count(), 10);
            assert_eq!(field.safe_cell_count(), 71);
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = BoardConfig::new((12, 8), 20).unwrap();

        let first = RandomMinefieldGenerator::from_seed(7).generate(config);
        let second = RandomMinefieldGenerator::from_seed(7).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn handles_a_nearly_full_board() {
        let config = BoardConfig::new((4, 4), 15).unwrap();
        let field = RandomMinefieldGenerator::from_seed(3).generate(config);

        assert_eq!(field.mine_count(), 15);
        assert_eq!(field.safe_cell_count(), 1);
    }

    #[test]
    fn generated_adjacency_matches_an_independent_count() {
        let config = BoardConfig::new((10, 10), 25).unwrap();
        let field = RandomMinefieldGenerator::from_seed(99).generate(config);

        for row in 0..10u16 {
            for col in 0..10u16 {
                if field.contains_mine((row, col)) {
                    continue;
                }
                let mut expected = 0;
                for d_row in -1i32..=1 {
                    for d_col in -1i32..=1 {
                        if d_row == 0 && d_col == 0 {
                            continue;
                        }
                        let n_row = row as i32 + d_row;
                        let n_col = col as i32 + d_col;
                        if (0..10).contains(&n_row)
                            && (0..10).contains(&n_col)
                            && field.contains_mine((n_row as u16, n_col as u16))
                        {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(
                    field.adjacent_mines((row, col)),
                    expected,
                    "at {:?}",
                    (row, col)
                );
            }
        }
    }
}
