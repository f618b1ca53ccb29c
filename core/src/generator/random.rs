use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Places mines uniformly at random on every cell except the start cell.
///
/// The candidate cells are shuffled once and mines are drawn from the front, which is
/// sampling without replacement. When the board cannot hold the requested count, every
/// candidate becomes a mine and the layout reports the smaller count.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig, start: Location) -> Result<MineLayout> {
        let (rows, cols) = config.size();
        let mut candidates: Vec<Location> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Location::new(row, col)))
            .filter(|&location| location != start)
            .collect();

        let requested = usize::from(config.mines);
        if requested > candidates.len() {
            log::warn!(
                "Minefield too small, requested {} mines but only {} fit",
                requested,
                candidates.len()
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        candidates.shuffle(&mut rng);
        candidates.truncate(requested);

        MineLayout::from_mine_locations(config.size(), &candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_cell_never_gets_a_mine() {
        let config = Difficulty::Easy.config();
        for seed in 0..200 {
            let start = Location::new((seed % 8) as Coord, (seed / 8 % 8) as Coord);
            let layout = RandomMineGenerator::new(seed).generate(config, start).unwrap();

            assert!(!layout.contains_mine(start));
            assert_eq!(layout.mine_count(), 10);
        }
    }

    #[test]
    fn oversized_request_fills_all_but_start() {
        let config = BoardConfig::new(2, 2, 10).unwrap();
        let start = Location::new(1, 0);
        let layout = RandomMineGenerator::new(3).generate(config, start).unwrap();

        assert_eq!(layout.mine_count(), 3);
        assert!(!layout.contains_mine(start));
    }

    #[test]
    fn same_seed_same_layout() {
        let config = Difficulty::Hard.config();
        let start = Location::new(4, 4);
        let a = RandomMineGenerator::new(42).generate(config, start).unwrap();
        let b = RandomMineGenerator::new(42).generate(config, start).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn fixed_layout_must_match_board() {
        let layout = MineLayout::from_mine_locations((2, 2), &[Location::new(0, 0)]).unwrap();

        assert_eq!(
            layout.clone().generate(BoardConfig::new_unchecked(3, 3, 1), Location::new(0, 0)),
            Err(GameError::InvalidLayout)
        );
        assert_eq!(
            layout.clone().generate(BoardConfig::new_unchecked(2, 2, 1), Location::new(0, 0)),
            Ok(layout)
        );
    }
}
