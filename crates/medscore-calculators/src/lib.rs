//! medscore-calculators
//!
//! The calculator catalog. Each clinical score is a self-contained,
//! stateless module implementing the same four-stage pipeline: validate
//! the typed input, compute the score, map it to an interpretation band,
//! assemble the uniform report. No calculator touches another and no
//! state survives a call.

pub mod calculators;
pub mod scoring;

use serde::de::DeserializeOwned;
use serde_json::Value;

use medscore_core::{CalculatorReport, Interpretation, ScoreError, ScoreValue, Specialty};

/// Object-safe registry entry: what the HTTP dispatch layer sees.
pub trait Calculator: Send + Sync {
    /// Unique identifier, also the endpoint path (e.g. "news2").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g. "NEWS2").
    fn name(&self) -> &'static str;

    /// Specialty the calculator is filed under in the catalog.
    fn specialty(&self) -> Specialty;

    /// One-line description for the catalog listing.
    fn description(&self) -> &'static str;

    /// Run the full pipeline against a raw JSON payload.
    fn evaluate(&self, payload: &Value) -> Result<CalculatorReport, ScoreError>;
}

/// The typed four-stage pipeline each calculator implements.
///
/// `Calculator` is blanket-implemented on top of this, so deserialization
/// and report assembly are written exactly once; a calculator module only
/// supplies its input type, its formula, and its bands.
pub trait ScorePipeline {
    type Input: DeserializeOwned;
    type Score;

    const ID: &'static str;
    const NAME: &'static str;
    const SPECIALTY: Specialty;
    const DESCRIPTION: &'static str;
    const UNIT: &'static str = "points";

    /// Reject any field outside its documented clinical domain, and any
    /// violated cross-field relationship. Runs before all computation.
    fn validate(input: &Self::Input) -> Result<(), ScoreError>;

    /// The deterministic formula. Only ever sees validated input.
    fn compute(input: &Self::Input) -> Self::Score;

    /// Map the computed score into exactly one interpretation band.
    fn interpret(input: &Self::Input, score: &Self::Score) -> Result<Interpretation, ScoreError>;

    /// The reportable value of the score.
    fn score_value(score: &Self::Score) -> ScoreValue;

    /// Package score and band into the uniform report. Override only to
    /// attach calculator-specific extra fields.
    fn assemble(
        input: &Self::Input,
        score: &Self::Score,
        interpretation: Interpretation,
    ) -> CalculatorReport {
        let _ = input;
        CalculatorReport::new(Self::score_value(score), Self::UNIT, interpretation)
    }
}

impl<T> Calculator for T
where
    T: ScorePipeline + Send + Sync,
{
    fn id(&self) -> &'static str {
        T::ID
    }

    fn name(&self) -> &'static str {
        T::NAME
    }

    fn specialty(&self) -> Specialty {
        T::SPECIALTY
    }

    fn description(&self) -> &'static str {
        T::DESCRIPTION
    }

    fn evaluate(&self, payload: &Value) -> Result<CalculatorReport, ScoreError> {
        let input: T::Input = serde_json::from_value(payload.clone())
            .map_err(|e| ScoreError::invalid_payload("body", e))?;
        T::validate(&input)?;
        let score = T::compute(&input);
        let interpretation = T::interpret(&input, &score)?;
        Ok(T::assemble(&input, &score, interpretation))
    }
}

/// Return all registered calculators.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::news2::News2),
        Box::new(calculators::injury_severity_score::InjurySeverityScore),
        Box::new(calculators::meld::Meld),
        Box::new(calculators::hemorr2hages::Hemorr2hages),
        Box::new(calculators::heart_pathway::HeartPathway),
        Box::new(calculators::score2::Score2),
        Box::new(calculators::cockcroft_gault::CockcroftGault),
        Box::new(calculators::ukeld::Ukeld),
        Box::new(calculators::licurse_score::LicurseScore),
        Box::new(calculators::winters_formula::WintersFormula),
        Box::new(calculators::hacor_score::HacorScore),
        Box::new(calculators::modified_sofa::ModifiedSofa),
        Box::new(calculators::vte_bleed::VteBleed),
        Box::new(calculators::itas2010::Itas2010),
        Box::new(calculators::mehran_score::MehranScore),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: &str) -> Option<Box<dyn Calculator>> {
    all_calculators().into_iter().find(|c| c.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        let calculators = all_calculators();
        for (i, a) in calculators.iter().enumerate() {
            for b in &calculators[i + 1..] {
                assert_ne!(a.id(), b.id(), "duplicate calculator id");
            }
        }
    }

    #[test]
    fn lookup_by_id_round_trips() {
        for calculator in all_calculators() {
            let found = get_calculator(calculator.id());
            assert!(found.is_some(), "{} not found by id", calculator.id());
            assert_eq!(found.unwrap().name(), calculator.name());
        }
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(get_calculator("no_such_score").is_none());
    }
}
