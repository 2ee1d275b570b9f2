use oxidraughts_evaluator::{
    heuristic::{EvaluatedHeuristic, GamePhase, PhaseThresholds},
    metric::{METRIC_COUNT, Metric},
};
use serde::{Deserialize, Serialize};

/// Number of genes: one weight per metric for each game phase.
pub const GENE_COUNT: usize = GamePhase::ALL.len() * METRIC_COUNT;

/// Largest weight produced by random initialization and mutation.
pub const MAX_WEIGHT: u32 = 100;

/// Position of the weight of `metric` during `phase`.
///
/// Genes are laid out phase-major: all early weights first, in metric index
/// order, then the mid and late ones.
#[must_use]
pub const fn gene_index(phase: GamePhase, metric: Metric) -> usize {
    phase.index() * METRIC_COUNT + metric.index()
}

/// A weight vector for [`EvaluatedHeuristic`] plus its tournament score.
///
/// A zero weight leaves the metric out of the heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GenotypeRepr", into = "GenotypeRepr")]
pub struct Genotype {
    weights: [u32; GENE_COUNT],
    fitness: u32,
}

impl Default for Genotype {
    fn default() -> Self {
        Self::from_weights([0; GENE_COUNT])
    }
}

impl Genotype {
    #[must_use]
    pub const fn from_weights(weights: [u32; GENE_COUNT]) -> Self {
        Self {
            weights,
            fitness: 0,
        }
    }

    #[must_use]
    pub fn weights(&self) -> &[u32; GENE_COUNT] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [u32; GENE_COUNT] {
        &mut self.weights
    }

    #[must_use]
    pub fn weight(&self, phase: GamePhase, metric: Metric) -> u32 {
        self.weights[gene_index(phase, metric)]
    }

    pub fn set_weight(&mut self, phase: GamePhase, metric: Metric, weight: u32) {
        self.weights[gene_index(phase, metric)] = weight;
    }

    /// Iterates over `(phase, metric, weight)` in gene order.
    pub fn genes(&self) -> impl Iterator<Item = (GamePhase, Metric, u32)> + '_ {
        GamePhase::ALL
            .into_iter()
            .flat_map(|phase| Metric::ALL.into_iter().map(move |metric| (phase, metric)))
            .zip(self.weights)
            .map(|((phase, metric), weight)| (phase, metric, weight))
    }

    #[must_use]
    pub fn fitness(&self) -> u32 {
        self.fitness
    }

    pub(crate) fn reset_fitness(&mut self) {
        self.fitness = 0;
    }

    pub(crate) fn add_fitness(&mut self, points: u32) {
        self.fitness += points;
    }

    /// Builds the heuristic these weights describe.
    #[must_use]
    pub fn to_heuristic(&self, depth: u32, thresholds: PhaseThresholds) -> EvaluatedHeuristic {
        let mut heuristic = EvaluatedHeuristic::new(depth).with_thresholds(thresholds);
        for (phase, metric, weight) in self.genes().filter(|&(_, _, w)| w != 0) {
            heuristic.insert(phase, metric, i32::try_from(weight).unwrap_or(i32::MAX));
        }
        heuristic
    }
}

#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("expected {} genes, found {found}", GENE_COUNT)]
pub struct GeneCountError {
    found: usize,
}

#[derive(Serialize, Deserialize)]
struct GenotypeRepr {
    weights: Vec<u32>,
    fitness: u32,
}

impl TryFrom<GenotypeRepr> for Genotype {
    type Error = GeneCountError;

    fn try_from(repr: GenotypeRepr) -> Result<Self, Self::Error> {
        let found = repr.weights.len();
        let weights = repr
            .weights
            .try_into()
            .map_err(|_| GeneCountError { found })?;
        Ok(Self {
            weights,
            fitness: repr.fitness,
        })
    }
}

impl From<Genotype> for GenotypeRepr {
    fn from(genotype: Genotype) -> Self {
        Self {
            weights: genotype.weights.to_vec(),
            fitness: genotype.fitness,
        }
    }
}
