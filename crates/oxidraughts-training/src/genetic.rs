//! Evolution of heuristic weights through self-play.
//!
//! # Generation cycle
//!
//! 1. **Scoring** - Fitness is reset and every genotype plays every other one
//!    twice, once per side. A win is worth [`POINTS_FOR_WIN`], a draw
//!    [`POINTS_FOR_DRAW`] to both players.
//! 2. **Selection** - Genotypes are sorted by fitness and only the best
//!    `survivor_count` are kept.
//! 3. **Breeding** - Two distinct survivors are picked at random for each
//!    child until the population is full again. The next generation consists
//!    of children only.
//! 4. **Mutation** - `mutation_count` times, a random genotype gets a random
//!    number of its genes redrawn.
//!
//! Matches are played by a [`TournamentScheduler`], so a scoring round uses
//! `workers` threads.

use std::{num::NonZeroUsize, thread};

use oxidraughts_engine::{MatchError, MatchOutcome};
use oxidraughts_evaluator::heuristic::PhaseThresholds;
use rand::Rng;

use crate::{
    genotype::Genotype,
    tournament::{Battle, SchedulerConfigError, TournamentScheduler},
    weights,
};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    pub population_size: usize,
    /// Genotypes kept as parents after each scoring round.
    pub survivor_count: usize,
    /// Mutations applied to the population per generation.
    pub mutation_count: usize,
    /// Search depth of the heuristics built from genotypes.
    pub depth: u32,
    pub thresholds: PhaseThresholds,
    /// Threads used to play matches.
    pub workers: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            survivor_count: 5,
            mutation_count: 2,
            depth: 2,
            thresholds: PhaseThresholds::default(),
            workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TrainingError {
    #[display("population has {found} genotypes, expected {expected}")]
    #[from(skip)]
    PopulationSizeMismatch { expected: usize, found: usize },
    #[display("invalid tournament configuration")]
    Scheduler(SchedulerConfigError),
    #[display("tournament match failed")]
    Match(MatchError),
}

/// Receives `(units_done, units_total)` after every finished match.
pub type ProgressCallback = Box<dyn FnMut(usize, usize) + Send>;

pub struct Trainer<R> {
    config: TrainerConfig,
    scheduler: TournamentScheduler,
    population: Vec<Genotype>,
    rng: R,
    progress: Option<ProgressCallback>,
}

impl<R> Trainer<R>
where
    R: Rng,
{
    /// Creates a trainer whose population holds `population_size` all-zero
    /// genotypes.
    ///
    /// # Panics
    ///
    /// Panics unless `2 <= survivor_count < population_size` and
    /// `mutation_count < survivor_count`.
    pub fn new(config: TrainerConfig, rng: R) -> Result<Self, TrainingError> {
        assert!(
            config.survivor_count >= 2,
            "breeding needs at least two survivors"
        );
        assert!(
            config.population_size > config.survivor_count,
            "population must be larger than the survivor count"
        );
        assert!(
            config.mutation_count < config.survivor_count,
            "mutation count must be smaller than the survivor count"
        );
        let scheduler = TournamentScheduler::new(config.workers)?;
        Ok(Self {
            population: vec![Genotype::default(); config.population_size],
            config,
            scheduler,
            rng,
            progress: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    #[must_use]
    pub fn population(&self) -> &[Genotype] {
        &self.population
    }

    pub fn set_progress_callback<F>(&mut self, callback: F)
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.progress = Some(Box::new(callback));
    }

    pub fn create_random_population(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| Genotype::from_weights(weights::random(&mut self.rng)))
            .collect();
    }

    /// Replaces the population. Rejected, leaving the population untouched,
    /// when the size differs from `population_size`.
    pub fn load_population(&mut self, population: Vec<Genotype>) -> Result<(), TrainingError> {
        if population.len() != self.config.population_size {
            return Err(TrainingError::PopulationSizeMismatch {
                expected: self.config.population_size,
                found: population.len(),
            });
        }
        self.population = population;
        Ok(())
    }

    /// Runs `generations` full generation cycles.
    ///
    /// Progress is reported across all generations of this call.
    pub fn run(&mut self, generations: usize) -> Result<(), TrainingError> {
        for generation in 0..generations {
            self.score(generation, generations)?;

            let best = self.population.iter().map(Genotype::fitness).max().unwrap_or(0);
            let total = self.population.iter().map(|g| u64::from(g.fitness())).sum::<u64>();
            tracing::info!(
                generation = generation + 1,
                generations,
                best_fitness = best,
                total_fitness = total,
                "generation scored"
            );

            self.select();
            self.breed();
            self.mutate();
        }
        Ok(())
    }

    /// Runs one scoring round and returns the fittest genotype.
    ///
    /// The population stays at full size, sorted by fitness.
    pub fn best_genotype(&mut self) -> Result<Genotype, TrainingError> {
        self.score(0, 1)?;
        self.rank();
        let best = self.population[0].clone();
        tracing::info!(fitness = best.fitness(), "best genotype chosen");
        Ok(best)
    }

    fn score(&mut self, round: usize, rounds: usize) -> Result<(), TrainingError> {
        for genotype in &mut self.population {
            genotype.reset_fitness();
        }
        let battles = round_robin(&self.population, &self.config);
        let total = battles.len();

        let population = &mut self.population;
        let progress = &mut self.progress;
        let mut done = 0;
        self.scheduler.play(battles, |battle| {
            award(population, battle);
            done += 1;
            if let Some(progress) = progress {
                progress(round * total + done, rounds * total);
            }
        })?;
        Ok(())
    }

    /// Sorts the population by fitness, fittest first.
    fn rank(&mut self) {
        self.population.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }

    /// Keeps the `survivor_count` fittest genotypes.
    fn select(&mut self) {
        self.rank();
        self.population.truncate(self.config.survivor_count);
    }

    fn breed(&mut self) {
        let survivors = self.population.len();
        let mut children = Vec::with_capacity(self.config.population_size);
        while children.len() < self.config.population_size {
            let (first, second) = loop {
                let first = self.rng.random_range(0..survivors);
                let second = self.rng.random_range(0..survivors);
                if first != second {
                    break (first, second);
                }
            };
            let child = weights::crossover(
                self.population[first].weights(),
                self.population[second].weights(),
                &mut self.rng,
            );
            children.push(Genotype::from_weights(child));
        }
        self.population = children;
    }

    fn mutate(&mut self) {
        for _ in 0..self.config.mutation_count {
            let index = self.rng.random_range(0..self.population.len());
            weights::mutate(self.population[index].weights_mut(), &mut self.rng);
        }
    }
}

/// Every ordered pair of distinct genotypes, the first playing light.
fn round_robin(population: &[Genotype], config: &TrainerConfig) -> Vec<Battle> {
    let heuristics = population
        .iter()
        .map(|g| g.to_heuristic(config.depth, config.thresholds))
        .collect::<Vec<_>>();
    let mut battles = Vec::with_capacity(population.len() * population.len().saturating_sub(1));
    for (light_id, light) in heuristics.iter().enumerate() {
        for (dark_id, dark) in heuristics.iter().enumerate() {
            if light_id != dark_id {
                battles.push(Battle::new(light.clone(), dark.clone(), light_id, dark_id));
            }
        }
    }
    battles
}

fn award(population: &mut [Genotype], battle: &Battle) {
    match battle.outcome {
        Some(MatchOutcome::LightWins) => population[battle.light_id].add_fitness(POINTS_FOR_WIN),
        Some(MatchOutcome::DarkWins) => population[battle.dark_id].add_fitness(POINTS_FOR_WIN),
        Some(MatchOutcome::Draw) => {
            population[battle.light_id].add_fitness(POINTS_FOR_DRAW);
            population[battle.dark_id].add_fitness(POINTS_FOR_DRAW);
        }
        None => {}
    }
}
