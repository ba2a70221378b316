use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::FieldRange;

/// UKELD (Neuberger 2008): United Kingdom Model for End-Stage Liver
/// Disease. Log-linear combination of INR, creatinine, bilirubin, and
/// sodium; 49 is the UK elective transplant listing threshold.
pub struct Ukeld;

const INR_RANGE: FieldRange = FieldRange::new(0.8, 10.0, "");
const CREATININE_RANGE: FieldRange = FieldRange::new(20.0, 1000.0, "umol/L");
const BILIRUBIN_RANGE: FieldRange = FieldRange::new(1.0, 1000.0, "umol/L");
const SODIUM_RANGE: FieldRange = FieldRange::new(120.0, 160.0, "mmol/L");

#[derive(Debug, Deserialize)]
pub struct UkeldInput {
    pub inr: f64,
    /// Serum creatinine in umol/L (SI units, as published).
    pub creatinine: f64,
    /// Serum bilirubin in umol/L.
    pub bilirubin: f64,
    pub sodium: f64,
}

impl ScorePipeline for Ukeld {
    type Input = UkeldInput;
    type Score = f64;

    const ID: &'static str = "ukeld";
    const NAME: &'static str = "UKELD";
    const SPECIALTY: Specialty = Specialty::Gastroenterology;
    const DESCRIPTION: &'static str =
        "UK Model for End-Stage Liver Disease for elective transplant listing";

    fn validate(input: &UkeldInput) -> Result<(), ScoreError> {
        INR_RANGE.check("inr", input.inr)?;
        CREATININE_RANGE.check("creatinine", input.creatinine)?;
        BILIRUBIN_RANGE.check("bilirubin", input.bilirubin)?;
        SODIUM_RANGE.check("sodium", input.sodium)?;
        Ok(())
    }

    fn compute(input: &UkeldInput) -> f64 {
        let score = 5.395 * input.inr.ln()
            + 1.485 * input.creatinine.ln()
            + 3.13 * input.bilirubin.ln()
            - 81.565 * input.sodium.ln()
            + 435.0;
        (score * 10.0).round() / 10.0
    }

    fn interpret(_input: &UkeldInput, score: &f64) -> Result<Interpretation, ScoreError> {
        let interpretation = if *score < 49.0 {
            Interpretation::new(
                "Below Listing Threshold",
                "One-year mortality below 9%",
                format!(
                    "UKELD {score:.1} is below the UK elective listing threshold of 49. Predicted \
                     one-year mortality without transplantation is under 9%; continue medical \
                     management and reassess as the disease evolves."
                ),
            )
        } else if *score < 60.0 {
            Interpretation::new(
                "Meets Listing Criteria",
                "One-year mortality 9% or higher",
                format!(
                    "UKELD {score:.1} meets the UK criteria for elective liver transplant \
                     listing (threshold 49, predicted one-year mortality of at least 9%). Refer \
                     for transplant assessment."
                ),
            )
        } else {
            Interpretation::new(
                "High Mortality Risk",
                "One-year mortality around 50%",
                format!(
                    "UKELD {score:.1} indicates advanced decompensation with a predicted \
                     one-year mortality around 50%. Expedite transplant assessment and optimize \
                     supportive management."
                ),
            )
        };
        Ok(interpretation)
    }

    fn score_value(score: &f64) -> ScoreValue {
        ScoreValue::Float(*score)
    }
}
