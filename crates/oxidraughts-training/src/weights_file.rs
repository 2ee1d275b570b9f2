//! Plain-text weight files.
//!
//! One gene per line, three whitespace-separated fields:
//!
//! ```text
//! <phase> <metric index> <weight>
//! ```
//!
//! `phase` is `e`, `m` or `l` (early, mid, late) and the metric index is
//! [`Metric::index`]. Blank lines are ignored, genes that are not listed keep
//! weight 0 and a gene listed twice takes its last weight.

use std::io;

use oxidraughts_evaluator::{heuristic::GamePhase, metric::Metric};

use crate::genotype::Genotype;

#[must_use]
pub const fn phase_tag(phase: GamePhase) -> char {
    match phase {
        GamePhase::Early => 'e',
        GamePhase::Mid => 'm',
        GamePhase::Late => 'l',
    }
}

fn phase_from_tag(tag: &str) -> Option<GamePhase> {
    match tag {
        "e" => Some(GamePhase::Early),
        "m" => Some(GamePhase::Mid),
        "l" => Some(GamePhase::Late),
        _ => None,
    }
}

/// A malformed line in a weight file.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {kind}")]
pub struct WeightsFormatError {
    line: usize,
    kind: WeightsFormatErrorKind,
}

impl WeightsFormatError {
    /// One-based line number.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn kind(&self) -> &WeightsFormatErrorKind {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WeightsFormatErrorKind {
    #[display("expected 3 fields, found {_0}")]
    FieldCount(#[error(not(source))] usize),
    #[display("unknown game phase `{_0}`")]
    UnknownPhase(#[error(not(source))] String),
    #[display("unknown metric `{_0}`")]
    UnknownMetric(#[error(not(source))] String),
    #[display("invalid weight `{_0}`")]
    InvalidWeight(#[error(not(source))] String),
}

/// Parses a weight file.
///
/// # Examples
///
/// ```
/// use oxidraughts_evaluator::{heuristic::GamePhase, metric::Metric};
/// use oxidraughts_training::weights_file;
///
/// let genotype = weights_file::parse("e 0 12\n\nl 21 3\n").unwrap();
/// assert_eq!(genotype.weight(GamePhase::Early, Metric::PawnsNumber), 12);
/// assert_eq!(genotype.weight(GamePhase::Late, Metric::Dog), 3);
/// assert_eq!(genotype.weight(GamePhase::Mid, Metric::Dog), 0);
///
/// let err = weights_file::parse("e 0 12\nx 1 1\n").unwrap_err();
/// assert_eq!(err.line(), 2);
/// ```
pub fn parse(text: &str) -> Result<Genotype, WeightsFormatError> {
    let mut genotype = Genotype::default();
    for (i, line) in text.lines().enumerate() {
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if fields.is_empty() {
            continue;
        }
        let (phase, metric, weight) =
            parse_gene(&fields).map_err(|kind| WeightsFormatError { line: i + 1, kind })?;
        genotype.set_weight(phase, metric, weight);
    }
    Ok(genotype)
}

fn parse_gene(fields: &[&str]) -> Result<(GamePhase, Metric, u32), WeightsFormatErrorKind> {
    let &[phase, metric, weight] = fields else {
        return Err(WeightsFormatErrorKind::FieldCount(fields.len()));
    };
    let phase =
        phase_from_tag(phase).ok_or_else(|| WeightsFormatErrorKind::UnknownPhase(phase.into()))?;
    let metric = metric
        .parse()
        .ok()
        .and_then(Metric::from_index)
        .ok_or_else(|| WeightsFormatErrorKind::UnknownMetric(metric.into()))?;
    let weight = weight
        .parse()
        .map_err(|_| WeightsFormatErrorKind::InvalidWeight(weight.into()))?;
    Ok((phase, metric, weight))
}

/// Writes all genes of `genotype`, phase-major.
pub fn write<W>(genotype: &Genotype, mut writer: W) -> io::Result<()>
where
    W: io::Write,
{
    for (phase, metric, weight) in genotype.genes() {
        writeln!(writer, "{} {} {weight}", phase_tag(phase), metric.index())?;
    }
    Ok(())
}
