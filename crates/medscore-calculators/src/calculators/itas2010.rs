use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::YesNo;

/// ITAS2010 (Misra 2013): Indian Takayasu Clinical Activity Score.
/// Nineteen new-or-worsened manifestations from the past three months;
/// seven key vascular items are weighted at 2 points. A score of 2 or
/// more marks active disease.
pub struct Itas2010;

const ACTIVE_THRESHOLD: i64 = 2;

#[derive(Debug, Deserialize)]
pub struct Itas2010Input {
    pub malaise_weight_loss: YesNo,
    pub myalgia_arthralgia: YesNo,
    pub headache: YesNo,
    pub severe_abdominal_pain: YesNo,
    pub recent_spontaneous_abortion: YesNo,
    pub systolic_bp_over_140: YesNo,
    pub diastolic_bp_over_90: YesNo,
    pub stroke: YesNo,
    pub seizures: YesNo,
    pub syncope: YesNo,
    pub vertigo_dizziness: YesNo,
    pub bruits: YesNo,
    pub pulse_inequality: YesNo,
    pub new_loss_of_pulses: YesNo,
    pub claudication: YesNo,
    pub carotidynia: YesNo,
    pub aortic_incompetence: YesNo,
    pub mi_angina: YesNo,
    pub cardiomyopathy_cardiac_failure: YesNo,
}

impl ScorePipeline for Itas2010 {
    type Input = Itas2010Input;
    type Score = i64;

    const ID: &'static str = "itas2010";
    const NAME: &'static str = "ITAS2010";
    const SPECIALTY: Specialty = Specialty::Rheumatology;
    const DESCRIPTION: &'static str =
        "Indian Takayasu Clinical Activity Score for arteritis disease activity";

    fn validate(_input: &Itas2010Input) -> Result<(), ScoreError> {
        Ok(())
    }

    fn compute(input: &Itas2010Input) -> i64 {
        input.malaise_weight_loss.points(1)
            + input.myalgia_arthralgia.points(1)
            + input.headache.points(1)
            + input.severe_abdominal_pain.points(1)
            + input.recent_spontaneous_abortion.points(1)
            + input.systolic_bp_over_140.points(1)
            + input.diastolic_bp_over_90.points(2)
            + input.stroke.points(2)
            + input.seizures.points(1)
            + input.syncope.points(1)
            + input.vertigo_dizziness.points(1)
            + input.bruits.points(2)
            + input.pulse_inequality.points(2)
            + input.new_loss_of_pulses.points(2)
            + input.claudication.points(2)
            + input.carotidynia.points(2)
            + input.aortic_incompetence.points(1)
            + input.mi_angina.points(1)
            + input.cardiomyopathy_cardiac_failure.points(1)
    }

    fn interpret(_input: &Itas2010Input, score: &i64) -> Result<Interpretation, ScoreError> {
        let interpretation = if *score < ACTIVE_THRESHOLD {
            Interpretation::new(
                "Inactive",
                format!("Score {score} points (<2 points)"),
                "No evidence of active Takayasu arteritis. Continue maintenance therapy with \
                 periodic reassessment of disease activity.",
            )
        } else {
            Interpretation::new(
                "Active",
                format!("Score {score} points (>=2 points)"),
                "Active Takayasu arteritis requiring treatment intensification. Consider \
                 escalation of immunosuppressive therapy or initiation of biologic agents.",
            )
        };
        Ok(interpretation)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}
