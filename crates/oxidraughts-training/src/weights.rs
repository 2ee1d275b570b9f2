//! Genetic operators on gene weight vectors.
//!
//! - [`random`] draws every gene uniformly from `[0, MAX_WEIGHT]`
//! - [`crossover`] draws every child gene between the parents' genes
//! - [`mutate`] redraws a random number of randomly chosen genes
//!
//! All draws are inclusive on both ends, so the weights never leave
//! `[0, MAX_WEIGHT]` when the inputs are in that range.

use rand::Rng;

use crate::genotype::{GENE_COUNT, MAX_WEIGHT};

pub type Weights = [u32; GENE_COUNT];

pub fn random<R>(rng: &mut R) -> Weights
where
    R: Rng + ?Sized,
{
    std::array::from_fn(|_| rng.random_range(0..=MAX_WEIGHT))
}

/// Builds a child whose gene `i` lies between `p1[i]` and `p2[i]`, inclusive.
///
/// # Examples
///
/// ```
/// use oxidraughts_training::{genotype::GENE_COUNT, weights};
/// use rand::SeedableRng as _;
///
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(1);
/// let child = weights::crossover(&[10; GENE_COUNT], &[20; GENE_COUNT], &mut rng);
/// assert!(child.iter().all(|w| (10..=20).contains(w)));
/// ```
pub fn crossover<R>(p1: &Weights, p2: &Weights, rng: &mut R) -> Weights
where
    R: Rng + ?Sized,
{
    std::array::from_fn(|i| {
        let (low, high) = if p1[i] <= p2[i] {
            (p1[i], p2[i])
        } else {
            (p2[i], p1[i])
        };
        rng.random_range(low..=high)
    })
}

/// Redraws between 1 and [`GENE_COUNT`] genes.
///
/// Gene indices are drawn with replacement, so the same gene may be redrawn
/// more than once.
pub fn mutate<R>(weights: &mut Weights, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let count = rng.random_range(1..=GENE_COUNT);
    for _ in 0..count {
        let gene = rng.random_range(0..GENE_COUNT);
        weights[gene] = rng.random_range(0..=MAX_WEIGHT);
    }
}
