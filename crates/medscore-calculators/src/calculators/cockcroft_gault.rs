use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::FieldRange;

/// Cockcroft-Gault creatinine clearance (Cockcroft & Gault 1976):
/// CrCl = (140 - age) x weight / (72 x SCr), x0.85 for females.
/// Reported in mL/min to one decimal place.
pub struct CockcroftGault;

const AGE_RANGE: FieldRange = FieldRange::new(18.0, 120.0, "years");
const WEIGHT_RANGE: FieldRange = FieldRange::new(20.0, 300.0, "kg");
const CREATININE_RANGE: FieldRange = FieldRange::new(0.1, 15.0, "mg/dL");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Deserialize)]
pub struct CockcroftGaultInput {
    pub age: i64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub serum_creatinine: f64,
}

impl ScorePipeline for CockcroftGault {
    type Input = CockcroftGaultInput;
    type Score = f64;

    const ID: &'static str = "cockcroft_gault";
    const NAME: &'static str = "Cockcroft-Gault CrCl";
    const SPECIALTY: Specialty = Specialty::Nephrology;
    const DESCRIPTION: &'static str =
        "Estimated creatinine clearance for renal function assessment and drug dosing";
    const UNIT: &'static str = "mL/min";

    fn validate(input: &CockcroftGaultInput) -> Result<(), ScoreError> {
        AGE_RANGE.check("age", input.age as f64)?;
        WEIGHT_RANGE.check("weight_kg", input.weight_kg)?;
        CREATININE_RANGE.check("serum_creatinine", input.serum_creatinine)?;
        Ok(())
    }

    fn compute(input: &CockcroftGaultInput) -> f64 {
        let sex_factor = match input.sex {
            Sex::Male => 1.0,
            Sex::Female => 0.85,
        };
        let clearance = (140.0 - input.age as f64) * input.weight_kg * sex_factor
            / (72.0 * input.serum_creatinine);
        (clearance * 10.0).round() / 10.0
    }

    fn interpret(_input: &CockcroftGaultInput, score: &f64) -> Result<Interpretation, ScoreError> {
        let clearance = *score;
        let interpretation = if clearance < 15.0 {
            Interpretation::new(
                "Kidney Failure",
                "CrCl below 15 mL/min",
                "Clearance in the kidney failure range. Nephrology management, preparation for \
                 renal replacement therapy, and renal dosing for all eliminated drugs.",
            )
        } else if clearance < 30.0 {
            Interpretation::new(
                "Severe Reduction",
                "CrCl 15-29 mL/min",
                "Severely reduced clearance. Most renally cleared drugs need dose reduction or \
                 avoidance; nephrology referral indicated.",
            )
        } else if clearance < 60.0 {
            Interpretation::new(
                "Moderate Reduction",
                "CrCl 30-59 mL/min",
                "Moderately reduced clearance. Review renally cleared medication doses and \
                 monitor kidney function trends.",
            )
        } else if clearance < 90.0 {
            Interpretation::new(
                "Mild Reduction",
                "CrCl 60-89 mL/min",
                "Mildly reduced clearance. Standard dosing is usually appropriate; monitor in \
                 the context of age and comorbidity.",
            )
        } else {
            Interpretation::new(
                "Normal",
                "CrCl 90 mL/min or higher",
                "Clearance in the normal range. No dose adjustment for renal function required.",
            )
        };
        Ok(interpretation)
    }

    fn score_value(score: &f64) -> ScoreValue {
        ScoreValue::Float(*score)
    }
}
