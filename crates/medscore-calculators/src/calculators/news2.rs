use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::YesNo;

/// NEWS2: National Early Warning Score 2 (Royal College of Physicians,
/// 2017). Seven banded vital-sign parameters; SpO₂ is scored on a
/// dedicated scale for patients with hypercapnic respiratory failure.
pub struct News2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RespiratoryRate {
    #[serde(rename = "8_or_less")]
    EightOrLess,
    #[serde(rename = "9_to_11")]
    NineToEleven,
    #[serde(rename = "12_to_20")]
    TwelveToTwenty,
    #[serde(rename = "21_to_24")]
    TwentyOneToTwentyFour,
    #[serde(rename = "25_or_more")]
    TwentyFiveOrMore,
}

/// Saturation bands from both the standard (scale 1) and hypercapnic
/// (scale 2) charts. A band from the other chart is re-mapped onto the
/// active scale rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OxygenSaturation {
    #[serde(rename = "83_or_less")]
    EightyThreeOrLess,
    #[serde(rename = "84_to_85")]
    EightyFourToEightyFive,
    #[serde(rename = "86_to_87")]
    EightySixToEightySeven,
    #[serde(rename = "88_to_92")]
    EightyEightToNinetyTwo,
    #[serde(rename = "91_or_less")]
    NinetyOneOrLess,
    #[serde(rename = "92_to_93")]
    NinetyTwoToNinetyThree,
    #[serde(rename = "93_to_94")]
    NinetyThreeToNinetyFour,
    #[serde(rename = "94_to_95")]
    NinetyFourToNinetyFive,
    #[serde(rename = "95_to_96")]
    NinetyFiveToNinetySix,
    #[serde(rename = "96_or_more")]
    NinetySixOrMore,
    #[serde(rename = "97_or_more")]
    NinetySevenOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Temperature {
    #[serde(rename = "35_or_less")]
    ThirtyFiveOrLess,
    #[serde(rename = "35_1_to_36")]
    ThirtyFivePointOneToThirtySix,
    #[serde(rename = "36_1_to_38")]
    ThirtySixPointOneToThirtyEight,
    #[serde(rename = "38_1_to_39")]
    ThirtyEightPointOneToThirtyNine,
    #[serde(rename = "39_1_or_more")]
    ThirtyNinePointOneOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SystolicBp {
    #[serde(rename = "90_or_less")]
    NinetyOrLess,
    #[serde(rename = "91_to_100")]
    NinetyOneToHundred,
    #[serde(rename = "101_to_110")]
    HundredOneToHundredTen,
    #[serde(rename = "111_to_219")]
    HundredElevenToTwoNineteen,
    #[serde(rename = "220_or_more")]
    TwoTwentyOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HeartRate {
    #[serde(rename = "40_or_less")]
    FortyOrLess,
    #[serde(rename = "41_to_50")]
    FortyOneToFifty,
    #[serde(rename = "51_to_90")]
    FiftyOneToNinety,
    #[serde(rename = "91_to_110")]
    NinetyOneToHundredTen,
    #[serde(rename = "111_to_130")]
    HundredElevenToHundredThirty,
    #[serde(rename = "131_or_more")]
    HundredThirtyOneOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consciousness {
    Alert,
    /// New confusion, response to voice or pain only, or unresponsive.
    Altered,
}

#[derive(Debug, Deserialize)]
pub struct News2Input {
    pub respiratory_rate: RespiratoryRate,
    pub hypercapnic_respiratory_failure: YesNo,
    pub oxygen_saturation: OxygenSaturation,
    pub supplemental_oxygen: YesNo,
    pub temperature: Temperature,
    pub systolic_bp: SystolicBp,
    pub heart_rate: HeartRate,
    pub consciousness: Consciousness,
}

pub struct News2Score {
    pub total: i64,
    /// Any single parameter scored 3 — the RED-score trigger.
    pub has_red_score: bool,
}

impl ScorePipeline for News2 {
    type Input = News2Input;
    type Score = News2Score;

    const ID: &'static str = "news2";
    const NAME: &'static str = "NEWS2";
    const SPECIALTY: Specialty = Specialty::Emergency;
    const DESCRIPTION: &'static str =
        "National Early Warning Score 2 for detecting clinical deterioration in adults";

    fn validate(_input: &News2Input) -> Result<(), ScoreError> {
        // All eight fields are closed token sets; deserialization is the
        // membership check.
        Ok(())
    }

    fn compute(input: &News2Input) -> News2Score {
        let parameter_scores = [
            respiratory_rate_points(input.respiratory_rate),
            spo2_points(
                input.oxygen_saturation,
                input.hypercapnic_respiratory_failure.is_yes(),
                input.supplemental_oxygen.is_yes(),
            ),
            temperature_points(input.temperature),
            systolic_bp_points(input.systolic_bp),
            heart_rate_points(input.heart_rate),
            consciousness_points(input.consciousness),
        ];

        let supplemental = input.supplemental_oxygen.points(2);
        let total = parameter_scores.iter().sum::<i64>() + supplemental;
        let has_red_score = parameter_scores.contains(&3);

        News2Score {
            total,
            has_red_score,
        }
    }

    fn interpret(_input: &News2Input, score: &News2Score) -> Result<Interpretation, ScoreError> {
        if score.has_red_score && score.total < 5 {
            return Ok(Interpretation::new(
                "Low-Medium Risk",
                "RED score: a single parameter scored 3",
                "Urgent review by a ward-based doctor to decide whether escalation of care is \
                 needed. Minimum monitoring frequency every hour.",
            ));
        }

        Ok(match score.total {
            0 => Interpretation::new(
                "Low Risk",
                "Very low early warning score",
                "Continue routine monitoring. Minimum monitoring frequency every 12 hours.",
            ),
            1..=4 => Interpretation::new(
                "Low Risk",
                "Low early warning score",
                "Assessment by a competent registered nurse. Minimum monitoring frequency every \
                 4-6 hours.",
            ),
            5..=6 => Interpretation::new(
                "Medium Risk",
                "Medium early warning score",
                "Urgent review by a ward-based doctor or acute team nurse to decide whether \
                 critical care assessment is needed. Minimum monitoring frequency every hour.",
            ),
            _ => Interpretation::new(
                "High Risk",
                "High early warning score",
                "Emergent assessment by the clinical or critical care team with continuous \
                 monitoring of vital signs. Usually requires transfer to a higher level of care.",
            ),
        })
    }

    fn score_value(score: &News2Score) -> ScoreValue {
        ScoreValue::Integer(score.total)
    }
}

fn respiratory_rate_points(band: RespiratoryRate) -> i64 {
    match band {
        RespiratoryRate::EightOrLess => 3,
        RespiratoryRate::NineToEleven => 1,
        RespiratoryRate::TwelveToTwenty => 0,
        RespiratoryRate::TwentyOneToTwentyFour => 2,
        RespiratoryRate::TwentyFiveOrMore => 3,
    }
}

/// SpO₂ scoring. Scale 2 applies to hypercapnic respiratory failure,
/// where 88-92% is the target range and high saturations only score when
/// the patient is on supplemental oxygen. Bands belonging to the other
/// chart are mapped onto the closest band of the active scale.
fn spo2_points(band: OxygenSaturation, hypercapnic: bool, on_oxygen: bool) -> i64 {
    use OxygenSaturation::*;

    if hypercapnic {
        match band {
            EightyThreeOrLess => 3,
            EightyFourToEightyFive => 2,
            EightySixToEightySeven => 1,
            EightyEightToNinetyTwo => 0,
            NinetyThreeToNinetyFour if on_oxygen => 1,
            NinetyFiveToNinetySix if on_oxygen => 2,
            NinetySevenOrMore if on_oxygen => 3,
            // >=93% on room air is not penalized on scale 2.
            NinetyThreeToNinetyFour | NinetyFourToNinetyFive | NinetyFiveToNinetySix
            | NinetySixOrMore | NinetySevenOrMore => 0,
            NinetyOneOrLess => 3,
            // Falls inside the 88-92% target range.
            NinetyTwoToNinetyThree => 0,
        }
    } else {
        match band {
            NinetyOneOrLess => 3,
            NinetyTwoToNinetyThree => 2,
            NinetyFourToNinetyFive => 1,
            NinetySixOrMore | NinetySevenOrMore => 0,
            EightyThreeOrLess | EightyFourToEightyFive | EightySixToEightySeven => 3,
            EightyEightToNinetyTwo => 2,
            NinetyThreeToNinetyFour => 1,
            NinetyFiveToNinetySix => 0,
        }
    }
}

fn temperature_points(band: Temperature) -> i64 {
    match band {
        Temperature::ThirtyFiveOrLess => 3,
        Temperature::ThirtyFivePointOneToThirtySix => 1,
        Temperature::ThirtySixPointOneToThirtyEight => 0,
        Temperature::ThirtyEightPointOneToThirtyNine => 1,
        Temperature::ThirtyNinePointOneOrMore => 2,
    }
}

fn systolic_bp_points(band: SystolicBp) -> i64 {
    match band {
        SystolicBp::NinetyOrLess => 3,
        SystolicBp::NinetyOneToHundred => 2,
        SystolicBp::HundredOneToHundredTen => 1,
        SystolicBp::HundredElevenToTwoNineteen => 0,
        SystolicBp::TwoTwentyOrMore => 3,
    }
}

fn heart_rate_points(band: HeartRate) -> i64 {
    match band {
        HeartRate::FortyOrLess => 3,
        HeartRate::FortyOneToFifty => 1,
        HeartRate::FiftyOneToNinety => 0,
        HeartRate::NinetyOneToHundredTen => 1,
        HeartRate::HundredElevenToHundredThirty => 2,
        HeartRate::HundredThirtyOneOrMore => 3,
    }
}

fn consciousness_points(level: Consciousness) -> i64 {
    match level {
        Consciousness::Alert => 0,
        Consciousness::Altered => 3,
    }
}
