use std::path::PathBuf;

use anyhow::{Context, ensure};
use chrono::Utc;
use oxidraughts_evaluator::heuristic::PhaseThresholds;
use oxidraughts_training::genetic::{Trainer, TrainerConfig};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::{
    schema::checkpoint::Checkpoint,
    util::{self, Output},
};

/// Reports progress every this many finished matches.
const PROGRESS_LOG_INTERVAL: usize = 50;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Number of generations to run
    #[arg(long, default_value_t = 5)]
    generations: usize,
    /// Number of genotypes in the population [default: 10]
    #[arg(long)]
    population: Option<usize>,
    /// Genotypes kept as parents each generation [default: 5]
    #[arg(long)]
    survivors: Option<usize>,
    /// Mutations applied each generation [default: 2]
    #[arg(long)]
    mutations: Option<usize>,
    /// Search depth of the trained heuristics [default: 2]
    #[arg(long)]
    depth: Option<u32>,
    /// Piece total from which the early-game weights apply [default: 8]
    #[arg(long)]
    early_threshold: Option<usize>,
    /// Piece total from which the mid-game weights apply [default: 4]
    #[arg(long)]
    mid_threshold: Option<usize>,
    /// Threads playing matches [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,
    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Output file for the best weights (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Population file, loaded when present and written after training
    #[arg(long)]
    checkpoint: Option<PathBuf>,
}

impl TrainArg {
    fn config(&self) -> anyhow::Result<TrainerConfig> {
        let defaults = TrainerConfig::default();
        let config = TrainerConfig {
            population_size: self.population.unwrap_or(defaults.population_size),
            survivor_count: self.survivors.unwrap_or(defaults.survivor_count),
            mutation_count: self.mutations.unwrap_or(defaults.mutation_count),
            depth: self.depth.unwrap_or(defaults.depth),
            thresholds: PhaseThresholds {
                early: self.early_threshold.unwrap_or(defaults.thresholds.early),
                mid: self.mid_threshold.unwrap_or(defaults.thresholds.mid),
            },
            workers: self.workers.unwrap_or(defaults.workers),
        };
        ensure!(
            config.survivor_count >= 2,
            "--survivors must be at least 2"
        );
        ensure!(
            config.population_size > config.survivor_count,
            "--population must be larger than --survivors"
        );
        ensure!(
            config.mutation_count < config.survivor_count,
            "--mutations must be smaller than --survivors"
        );
        Ok(config)
    }
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let config = arg.config()?;
    let rng = match arg.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };

    tracing::info!(
        population = config.population_size,
        survivors = config.survivor_count,
        mutations = config.mutation_count,
        depth = config.depth,
        early_threshold = config.thresholds.early,
        mid_threshold = config.thresholds.mid,
        workers = config.workers,
        generations = arg.generations,
        "training started"
    );

    let mut trainer = Trainer::new(config, rng).context("Failed to set up trainer")?;
    trainer.set_progress_callback(|done, total| {
        if done % PROGRESS_LOG_INTERVAL == 0 || done == total {
            tracing::info!("{done}/{total} matches played");
        }
    });

    let mut generation = 0;
    match &arg.checkpoint {
        Some(path) if path.exists() => {
            let checkpoint = util::read_checkpoint_file(path)?;
            generation = checkpoint.generation;
            trainer
                .load_population(checkpoint.genotypes)
                .with_context(|| format!("Failed to load checkpoint: {}", path.display()))?;
            tracing::info!(generation, path = %path.display(), "population loaded");
        }
        _ => trainer.create_random_population(),
    }

    trainer.run(arg.generations).context("Training failed")?;
    generation += arg.generations;

    let best = trainer
        .best_genotype()
        .context("Failed to choose the best genotype")?;

    if let Some(path) = &arg.checkpoint {
        let checkpoint = Checkpoint {
            saved_at: Utc::now(),
            generation,
            genotypes: trainer.population().to_vec(),
        };
        Output::open(path.clone())?.write_json(&checkpoint)?;
        tracing::info!(generation, path = %path.display(), "population saved");
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_weights(&best)?;
    tracing::info!(
        fitness = best.fitness(),
        output = %output.display_path(),
        "best weights saved"
    );

    Ok(())
}
