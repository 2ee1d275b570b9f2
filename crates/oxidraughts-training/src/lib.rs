//! Genetic training of draughts heuristics.
//!
//! A [`Genotype`](genotype::Genotype) holds one weight per metric and game
//! phase, 66 genes in total. The [`Trainer`](genetic::Trainer) evolves a
//! population of genotypes by letting them play each other:
//!
//! ```text
//! Trainer (selection, breeding, mutation)
//!     ↓ builds battles for
//! TournamentScheduler (worker threads)
//!     ↓ plays
//! MatchRunner (oxidraughts-engine)
//!     ↓ asks
//! EvaluatedHeuristic (oxidraughts-evaluator)
//! ```
//!
//! # Modules
//!
//! - [`genotype`] - Gene layout and conversion to a heuristic
//! - [`weights`] - Random initialization, crossover and mutation of weights
//! - [`weights_file`] - The plain-text weight file format
//! - [`tournament`] - Parallel match execution
//! - [`genetic`] - The generation cycle
//!
//! # Example
//!
//! ```no_run
//! use oxidraughts_training::genetic::{Trainer, TrainerConfig};
//! use rand::SeedableRng as _;
//!
//! let rng = rand_pcg::Pcg32::seed_from_u64(0);
//! let mut trainer = Trainer::new(TrainerConfig::default(), rng)?;
//! trainer.create_random_population();
//! trainer.run(5)?;
//! let best = trainer.best_genotype()?;
//!
//! let mut out = Vec::new();
//! oxidraughts_training::weights_file::write(&best, &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod genetic;
pub mod genotype;
pub mod tournament;
pub mod weights;
pub mod weights_file;
