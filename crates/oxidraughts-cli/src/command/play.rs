use std::{cell::Cell, convert::Infallible, path::PathBuf, str::FromStr};

use anyhow::Context;
use oxidraughts_engine::{Board, Candidate, MatchRunner, MoveDecider, Side};
use oxidraughts_evaluator::{
    baseline::{FirstMove, RandomMove},
    heuristic::PhaseThresholds,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Light player: `first`, `random` or the path of a weights file
    #[arg(long, default_value = "first")]
    light: PlayerSpec,
    /// Dark player: `first`, `random` or the path of a weights file
    #[arg(long, default_value = "random")]
    dark: PlayerSpec,
    /// Search depth of players loaded from weights files
    #[arg(long, default_value_t = 2)]
    depth: u32,
    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PlayerSpec {
    First,
    Random,
    Weights(PathBuf),
}

impl FromStr for PlayerSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "first" => Self::First,
            "random" => Self::Random,
            path => Self::Weights(PathBuf::from(path)),
        })
    }
}

impl PlayerSpec {
    fn build(&self, depth: u32, seed: u64) -> anyhow::Result<Box<dyn MoveDecider>> {
        Ok(match self {
            Self::First => Box::new(FirstMove),
            Self::Random => Box::new(RandomMove::new(Pcg32::seed_from_u64(seed))),
            Self::Weights(path) => {
                let genotype = util::read_weights_file(path)?;
                Box::new(genotype.to_heuristic(depth, PhaseThresholds::default()))
            }
        })
    }
}

/// Prints every move and the resulting board.
struct Narrated<'a> {
    inner: Box<dyn MoveDecider>,
    plies: &'a Cell<usize>,
}

impl MoveDecider for Narrated<'_> {
    fn decide(&mut self, board: &Board, side: Side, candidates: &[Candidate]) -> Candidate {
        let chosen = self.inner.decide(board, side, candidates);
        self.plies.set(self.plies.get() + 1);
        println!("ply {}: {side} plays {}", self.plies.get(), chosen.mv());
        println!("{}", chosen.board());
        chosen
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        light,
        dark,
        depth,
        seed,
    } = arg;
    let seed = seed.unwrap_or_else(rand::random);

    let plies = Cell::new(0);
    let mut light = Narrated {
        inner: light.build(*depth, seed).context("Failed to set up light player")?,
        plies: &plies,
    };
    let mut dark = Narrated {
        inner: dark
            .build(*depth, seed.wrapping_add(1))
            .context("Failed to set up dark player")?,
        plies: &plies,
    };

    println!("{}", Board::INITIAL);
    let outcome = MatchRunner::new()
        .run(Board::INITIAL, &mut light, &mut dark)
        .context("Match aborted")?;
    println!("{outcome} after {} plies", plies.get());
    tracing::info!(%outcome, plies = plies.get(), seed, "match finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spec_parsing() {
        assert_eq!("first".parse::<PlayerSpec>(), Ok(PlayerSpec::First));
        assert_eq!("random".parse::<PlayerSpec>(), Ok(PlayerSpec::Random));
        assert_eq!(
            "best.txt".parse::<PlayerSpec>(),
            Ok(PlayerSpec::Weights(PathBuf::from("best.txt")))
        );
    }
}
