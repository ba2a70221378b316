use serde::Deserialize;
use serde_json::json;

use medscore_core::{CalculatorReport, Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;

/// HEART Pathway (Mahler 2015): the HEART score plus serial troponins as
/// an accelerated diagnostic protocol for chest pain. A score of 3 or
/// less with two negative troponins identifies patients for early
/// discharge.
pub struct HeartPathway;

const LOW_RISK_SCORE_CEILING: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum History {
    SlightlySuspicious,
    ModeratelySuspicious,
    HighlySuspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ecg {
    Normal,
    NonspecificRepolarization,
    SignificantStDepression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "under_45")]
    Under45,
    #[serde(rename = "45_to_64")]
    FortyFiveToSixtyFour,
    #[serde(rename = "65_or_over")]
    SixtyFiveOrOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactors {
    None,
    OneOrTwo,
    ThreeOrMoreOrAtherosclerosis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Troponin {
    Normal,
    OneToThreeTimesUln,
    OverThreeTimesUln,
}

/// Serial (3-hour) troponin result. `NotDone` keeps a patient out of the
/// early-discharge arm even with a low score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatTroponin {
    Yes,
    No,
    NotDone,
}

#[derive(Debug, Deserialize)]
pub struct HeartPathwayInput {
    pub history: History,
    pub ecg: Ecg,
    pub age: AgeBand,
    pub risk_factors: RiskFactors,
    pub initial_troponin: Troponin,
    pub repeat_troponin_negative: RepeatTroponin,
}

pub struct HeartPathwayScore {
    pub total: i64,
    pub early_discharge: bool,
}

impl ScorePipeline for HeartPathway {
    type Input = HeartPathwayInput;
    type Score = HeartPathwayScore;

    const ID: &'static str = "heart_pathway";
    const NAME: &'static str = "HEART Pathway";
    const SPECIALTY: Specialty = Specialty::Cardiology;
    const DESCRIPTION: &'static str =
        "Accelerated chest-pain disposition from the HEART score plus serial troponins";

    fn validate(_input: &HeartPathwayInput) -> Result<(), ScoreError> {
        Ok(())
    }

    fn compute(input: &HeartPathwayInput) -> HeartPathwayScore {
        let total = history_points(input.history)
            + ecg_points(input.ecg)
            + age_points(input.age)
            + risk_factor_points(input.risk_factors)
            + troponin_points(input.initial_troponin);

        let early_discharge = total <= LOW_RISK_SCORE_CEILING
            && input.initial_troponin == Troponin::Normal
            && input.repeat_troponin_negative == RepeatTroponin::Yes;

        HeartPathwayScore {
            total,
            early_discharge,
        }
    }

    fn interpret(
        _input: &HeartPathwayInput,
        score: &HeartPathwayScore,
    ) -> Result<Interpretation, ScoreError> {
        if score.early_discharge {
            Ok(Interpretation::new(
                "Low Risk",
                "Early discharge candidate",
                format!(
                    "HEART score {} with negative serial troponins. 30-day MACE risk 0.9-1.7% in \
                     the validation cohorts; early discharge without objective cardiac testing is \
                     appropriate, with outpatient follow-up.",
                    score.total
                ),
            ))
        } else {
            Ok(Interpretation::new(
                "High Risk",
                "Further in-hospital evaluation indicated",
                format!(
                    "HEART score {} or incomplete/positive serial troponins. 30-day MACE risk of \
                     12% or more; place in an observation or inpatient unit for serial troponin \
                     and objective cardiac testing.",
                    score.total
                ),
            ))
        }
    }

    fn score_value(score: &HeartPathwayScore) -> ScoreValue {
        ScoreValue::Integer(score.total)
    }

    fn assemble(
        _input: &HeartPathwayInput,
        score: &HeartPathwayScore,
        interpretation: Interpretation,
    ) -> CalculatorReport {
        let disposition = if score.early_discharge {
            "early_discharge"
        } else {
            "further_evaluation"
        };
        CalculatorReport::new(score.total, Self::UNIT, interpretation)
            .with_extra("disposition", json!(disposition))
    }
}

fn history_points(history: History) -> i64 {
    match history {
        History::SlightlySuspicious => 0,
        History::ModeratelySuspicious => 1,
        History::HighlySuspicious => 2,
    }
}

fn ecg_points(ecg: Ecg) -> i64 {
    match ecg {
        Ecg::Normal => 0,
        Ecg::NonspecificRepolarization => 1,
        Ecg::SignificantStDepression => 2,
    }
}

fn age_points(age: AgeBand) -> i64 {
    match age {
        AgeBand::Under45 => 0,
        AgeBand::FortyFiveToSixtyFour => 1,
        AgeBand::SixtyFiveOrOver => 2,
    }
}

fn risk_factor_points(risk_factors: RiskFactors) -> i64 {
    match risk_factors {
        RiskFactors::None => 0,
        RiskFactors::OneOrTwo => 1,
        RiskFactors::ThreeOrMoreOrAtherosclerosis => 2,
    }
}

fn troponin_points(troponin: Troponin) -> i64 {
    match troponin {
        Troponin::Normal => 0,
        Troponin::OneToThreeTimesUln => 1,
        Troponin::OverThreeTimesUln => 2,
    }
}
