use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, FieldRange, classify};

/// mSOFA (Grissom 2010): ICU mortality prediction with a single
/// laboratory value, designed for resource-constrained triage. Five
/// organ systems, range 0-20.
pub struct ModifiedSofa;

const SF_RATIO_RANGE: FieldRange = FieldRange::new(50.0, 500.0, "");
const MAP_RANGE: FieldRange = FieldRange::new(30.0, 200.0, "mmHg");
const GCS_RANGE: FieldRange = FieldRange::new(3.0, 15.0, "");
const CREATININE_RANGE: FieldRange = FieldRange::new(0.1, 10.0, "mg/dL");

const BANDS: &[Band] = &[
    Band::new(
        7.0,
        "Low Risk",
        "4% 30-day mortality",
        "Minimal to mild organ dysfunction with good prognosis under standard ICU supportive \
         care. Consider step-down when clinically stable.",
    ),
    Band::new(
        11.0,
        "Moderate Risk",
        "31% 30-day mortality",
        "Moderate multi-organ dysfunction. Intensive monitoring and early goals-of-care \
         discussion; likely to need organ support.",
    ),
    Band::new(
        20.0,
        "High Risk",
        "58% 30-day mortality",
        "Severe multi-organ dysfunction with poor prognosis. Maximal intensive care support \
         and explicit discussion of prognosis and goals of care with patient or family.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScleralIcterus {
    Absent,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VasopressorUse {
    None,
    LowDose,
    ModerateDose,
    HighDose,
}

#[derive(Debug, Deserialize)]
pub struct ModifiedSofaInput {
    pub spo2_fio2_ratio: i64,
    pub scleral_icterus: ScleralIcterus,
    pub mean_arterial_pressure: i64,
    pub vasopressor_use: VasopressorUse,
    pub glasgow_coma_scale: i64,
    pub creatinine: f64,
}

impl ScorePipeline for ModifiedSofa {
    type Input = ModifiedSofaInput;
    type Score = i64;

    const ID: &'static str = "modified_sofa";
    const NAME: &'static str = "mSOFA Score";
    const SPECIALTY: Specialty = Specialty::Emergency;
    const DESCRIPTION: &'static str =
        "Modified Sequential Organ Failure Assessment for ICU mortality with minimal labs";

    fn validate(input: &ModifiedSofaInput) -> Result<(), ScoreError> {
        SF_RATIO_RANGE.check("spo2_fio2_ratio", input.spo2_fio2_ratio as f64)?;
        MAP_RANGE.check("mean_arterial_pressure", input.mean_arterial_pressure as f64)?;
        GCS_RANGE.check("glasgow_coma_scale", input.glasgow_coma_scale as f64)?;
        CREATININE_RANGE.check("creatinine", input.creatinine)?;
        Ok(())
    }

    fn compute(input: &ModifiedSofaInput) -> i64 {
        respiratory_points(input.spo2_fio2_ratio)
            + liver_points(input.scleral_icterus)
            + cardiovascular_points(input.vasopressor_use, input.mean_arterial_pressure)
            + neurologic_points(input.glasgow_coma_scale)
            + renal_points(input.creatinine)
    }

    fn interpret(_input: &ModifiedSofaInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

fn respiratory_points(sf_ratio: i64) -> i64 {
    if sf_ratio > 400 {
        0
    } else if sf_ratio >= 315 {
        1
    } else if sf_ratio >= 235 {
        2
    } else if sf_ratio >= 150 {
        3
    } else {
        4
    }
}

fn liver_points(icterus: ScleralIcterus) -> i64 {
    match icterus {
        ScleralIcterus::Absent => 0,
        ScleralIcterus::Present => 3,
    }
}

fn cardiovascular_points(vasopressors: VasopressorUse, map: i64) -> i64 {
    match vasopressors {
        VasopressorUse::None => {
            if map >= 70 {
                0
            } else {
                1
            }
        }
        VasopressorUse::LowDose => 2,
        VasopressorUse::ModerateDose => 3,
        VasopressorUse::HighDose => 4,
    }
}

fn neurologic_points(gcs: i64) -> i64 {
    match gcs {
        15 => 0,
        13..=14 => 1,
        10..=12 => 2,
        6..=9 => 3,
        _ => 4,
    }
}

fn renal_points(creatinine: f64) -> i64 {
    if creatinine < 1.2 {
        0
    } else if creatinine < 2.0 {
        1
    } else if creatinine < 3.5 {
        2
    } else if creatinine < 5.0 {
        3
    } else {
        4
    }
}
