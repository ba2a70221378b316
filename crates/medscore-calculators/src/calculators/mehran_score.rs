use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, FieldRange, YesNo, classify};

/// Mehran score (Mehran 2004): risk of contrast-induced nephropathy
/// after percutaneous coronary intervention. Additive integer weights
/// plus a per-100-mL contrast term and banded eGFR points.
pub struct MehranScore;

const AGE_RANGE: FieldRange = FieldRange::new(18.0, 120.0, "years");
const CONTRAST_RANGE: FieldRange = FieldRange::new(0.0, 1000.0, "mL");
const EGFR_RANGE: FieldRange = FieldRange::new(1.0, 200.0, "mL/min/1.73m2");

const BANDS: &[Band] = &[
    Band::new(
        5.0,
        "Low Risk",
        "7.5% CIN risk, 0.04% dialysis risk",
        "Low risk of contrast-induced nephropathy. Standard periprocedural hydration and \
         contrast minimization.",
    ),
    Band::new(
        10.0,
        "Moderate Risk",
        "14.0% CIN risk, 0.12% dialysis risk",
        "Moderate risk of contrast-induced nephropathy. Pre- and post-procedure hydration, \
         minimize contrast volume, and recheck creatinine at 48 hours.",
    ),
    Band::new(
        15.0,
        "High Risk",
        "26.1% CIN risk, 1.09% dialysis risk",
        "High risk of contrast-induced nephropathy. Aggressive hydration protocol, strict \
         contrast limits, withhold nephrotoxins, and monitor renal function closely.",
    ),
    Band::new(
        41.0,
        "Very High Risk",
        "57.3% CIN risk, 12.6% dialysis risk",
        "Very high risk of contrast-induced nephropathy. Reconsider the indication or staging \
         of the procedure; if it proceeds, maximal preventive measures and nephrology \
         involvement.",
    ),
];

#[derive(Debug, Deserialize)]
pub struct MehranScoreInput {
    /// Systolic BP <80 mmHg for at least one hour requiring inotropes.
    pub hypotension: YesNo,
    pub intra_aortic_balloon_pump: YesNo,
    pub congestive_heart_failure: YesNo,
    pub age: i64,
    pub anemia: YesNo,
    pub diabetes: YesNo,
    pub contrast_volume_ml: f64,
    pub egfr: f64,
}

impl ScorePipeline for MehranScore {
    type Input = MehranScoreInput;
    type Score = i64;

    const ID: &'static str = "mehran_score";
    const NAME: &'static str = "Mehran Score";
    const SPECIALTY: Specialty = Specialty::Cardiology;
    const DESCRIPTION: &'static str =
        "Contrast-induced nephropathy risk after percutaneous coronary intervention";

    fn validate(input: &MehranScoreInput) -> Result<(), ScoreError> {
        AGE_RANGE.check("age", input.age as f64)?;
        CONTRAST_RANGE.check("contrast_volume_ml", input.contrast_volume_ml)?;
        EGFR_RANGE.check("egfr", input.egfr)?;
        Ok(())
    }

    fn compute(input: &MehranScoreInput) -> i64 {
        let age_points = if input.age > 75 { 4 } else { 0 };
        let contrast_points = (input.contrast_volume_ml / 100.0).floor() as i64;

        input.hypotension.points(5)
            + input.intra_aortic_balloon_pump.points(5)
            + input.congestive_heart_failure.points(5)
            + age_points
            + input.anemia.points(3)
            + input.diabetes.points(3)
            + contrast_points
            + egfr_points(input.egfr)
    }

    fn interpret(_input: &MehranScoreInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

fn egfr_points(egfr: f64) -> i64 {
    if egfr < 20.0 {
        6
    } else if egfr < 40.0 {
        4
    } else if egfr < 60.0 {
        2
    } else {
        0
    }
}
