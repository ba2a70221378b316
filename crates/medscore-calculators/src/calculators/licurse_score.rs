use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::YesNo;

/// Licurse score (Licurse 2010): yield of renal ultrasound for
/// hydronephrosis in acute kidney injury. Six one-point factors — three
/// scored when a protective condition is absent — and an overriding
/// rule: any history of hydronephrosis is high risk outright.
pub struct LicurseScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Black,
    NonBlack,
}

#[derive(Debug, Deserialize)]
pub struct LicurseScoreInput {
    pub history_hydronephrosis: YesNo,
    pub race: Race,
    pub recurrent_utis: YesNo,
    /// BPH, abdominopelvic malignancy, neurogenic bladder, or pelvic
    /// surgery history.
    pub obstruction_diagnosis: YesNo,
    pub history_chf: YesNo,
    pub prerenal_aki_sepsis: YesNo,
    pub nephrotoxic_exposure: YesNo,
}

impl ScorePipeline for LicurseScore {
    type Input = LicurseScoreInput;
    type Score = i64;

    const ID: &'static str = "licurse_score";
    const NAME: &'static str = "Licurse Score";
    const SPECIALTY: Specialty = Specialty::Nephrology;
    const DESCRIPTION: &'static str =
        "Risk stratification for renal ultrasound yield in acute kidney injury";

    fn validate(_input: &LicurseScoreInput) -> Result<(), ScoreError> {
        Ok(())
    }

    fn compute(input: &LicurseScoreInput) -> i64 {
        let race_point = match input.race {
            Race::NonBlack => 1,
            Race::Black => 0,
        };

        // CHF, sepsis/prerenal physiology, and nephrotoxic exposure all
        // point away from obstruction, so their absence scores.
        race_point
            + input.recurrent_utis.points(1)
            + input.obstruction_diagnosis.points(1)
            + absent_point(input.history_chf)
            + absent_point(input.prerenal_aki_sepsis)
            + absent_point(input.nephrotoxic_exposure)
    }

    fn interpret(input: &LicurseScoreInput, score: &i64) -> Result<Interpretation, ScoreError> {
        // Prior hydronephrosis short-circuits the banding entirely.
        if input.history_hydronephrosis.is_yes() {
            return Ok(Interpretation::new(
                "High Risk",
                "Automatic high-risk classification",
                "History of hydronephrosis classifies the patient as high risk regardless of \
                 other factors. Renal ultrasound is strongly indicated, with urgent imaging if \
                 renal function is declining rapidly.",
            ));
        }

        let interpretation = match *score {
            ..=2 => Interpretation::new(
                "Low Risk",
                "4.0% hydronephrosis risk, 1.1% intervention risk",
                "Low risk of hydronephrosis. Renal ultrasound may be deferred initially in \
                 favor of volume optimization and nephrotoxin avoidance; image if AKI fails to \
                 improve within 24-48 hours.",
            ),
            3 => Interpretation::new(
                "Medium Risk",
                "6.8% hydronephrosis risk, 0.5% intervention risk",
                "Intermediate risk of hydronephrosis. Individualize the imaging decision using \
                 AKI severity, creatinine trajectory, and clinical suspicion for obstruction.",
            ),
            _ => Interpretation::new(
                "High Risk",
                "20.9% hydronephrosis risk, 4.9% intervention risk",
                "High risk of hydronephrosis. Renal ultrasound is strongly indicated; prepare \
                 for urological consultation if obstruction is confirmed.",
            ),
        };
        Ok(interpretation)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

fn absent_point(finding: YesNo) -> i64 {
    match finding {
        YesNo::No => 1,
        YesNo::Yes => 0,
    }
}
