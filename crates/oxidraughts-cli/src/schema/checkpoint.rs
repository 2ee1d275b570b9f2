use chrono::{DateTime, Utc};
use oxidraughts_training::genotype::Genotype;
use serde::{Deserialize, Serialize};

/// Saved training population, used to resume training.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Checkpoint {
    pub saved_at: DateTime<Utc>,
    /// Generations completed across all runs that produced this population.
    pub generation: usize,
    pub genotypes: Vec<Genotype>,
}
