//! Reference players that do not look at the position.

use oxidraughts_engine::{Board, Candidate, MoveDecider, Side};
use rand::{Rng, seq::IndexedRandom};

/// Always plays the first legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMove;

impl MoveDecider for FirstMove {
    fn decide(&mut self, _board: &Board, _side: Side, candidates: &[Candidate]) -> Candidate {
        candidates[0].clone()
    }
}

/// Plays a uniformly chosen legal move.
#[derive(Debug, Clone)]
pub struct RandomMove<R> {
    rng: R,
}

impl<R> RandomMove<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> MoveDecider for RandomMove<R>
where
    R: Rng,
{
    fn decide(&mut self, _board: &Board, _side: Side, candidates: &[Candidate]) -> Candidate {
        candidates
            .choose(&mut self.rng)
            .unwrap_or(&candidates[0])
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use oxidraughts_engine::{MatchRunner, legal_moves};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_first_move() {
        let candidates = legal_moves(&Board::INITIAL, Side::Light);
        let chosen = FirstMove.decide(&Board::INITIAL, Side::Light, &candidates);
        assert_eq!(chosen, candidates[0]);
    }

    #[test]
    fn test_random_move_is_offered() {
        let mut random = RandomMove::new(Pcg32::seed_from_u64(7));
        let candidates = legal_moves(&Board::INITIAL, Side::Dark);
        for _ in 0..20 {
            let chosen = random.decide(&Board::INITIAL, Side::Dark, &candidates);
            assert!(candidates.contains(&chosen));
        }
    }

    #[test]
    fn test_seeded_matches_repeat() {
        let play = |seed| {
            let mut light = RandomMove::new(Pcg32::seed_from_u64(seed));
            let mut dark = RandomMove::new(Pcg32::seed_from_u64(seed + 1));
            MatchRunner::new()
                .run(Board::INITIAL, &mut light, &mut dark)
                .unwrap()
        };
        assert_eq!(play(3), play(3));
    }
}
