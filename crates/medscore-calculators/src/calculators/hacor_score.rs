use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, FieldRange, classify};

/// HACOR (Duan 2017): risk of non-invasive ventilation failure in
/// hypoxemic respiratory failure, from Heart rate, Acidosis,
/// Consciousness, Oxygenation, and Respiratory rate. Best assessed 60
/// minutes after starting NIV. Range 0-25.
pub struct HacorScore;

const HEART_RATE_RANGE: FieldRange = FieldRange::new(20.0, 220.0, "beats/min");
const PH_RANGE: FieldRange = FieldRange::new(6.5, 7.7, "");
const GCS_RANGE: FieldRange = FieldRange::new(3.0, 15.0, "");
const PF_RATIO_RANGE: FieldRange = FieldRange::new(20.0, 600.0, "mmHg");
const RESPIRATORY_RATE_RANGE: FieldRange = FieldRange::new(5.0, 70.0, "breaths/min");

const BANDS: &[Band] = &[
    Band::new(
        5.0,
        "Low Risk",
        "NIV failure risk below 20%",
        "Low risk of NIV failure. Continue non-invasive ventilation with standard monitoring \
         and reassess the score at 12, 24, and 48 hours.",
    ),
    Band::new(
        25.0,
        "High Risk",
        "NIV failure risk above 50%",
        "High risk of NIV failure. Consider early intubation rather than prolonged NIV trials; \
         delayed intubation in this group is associated with increased mortality.",
    ),
];

#[derive(Debug, Deserialize)]
pub struct HacorScoreInput {
    pub heart_rate: i64,
    pub ph: f64,
    pub glasgow_coma_scale: i64,
    pub pao2_fio2_ratio: f64,
    pub respiratory_rate: i64,
}

impl ScorePipeline for HacorScore {
    type Input = HacorScoreInput;
    type Score = i64;

    const ID: &'static str = "hacor_score";
    const NAME: &'static str = "HACOR Score";
    const SPECIALTY: Specialty = Specialty::Pulmonology;
    const DESCRIPTION: &'static str =
        "Predicts non-invasive ventilation failure in hypoxemic respiratory failure";

    fn validate(input: &HacorScoreInput) -> Result<(), ScoreError> {
        HEART_RATE_RANGE.check("heart_rate", input.heart_rate as f64)?;
        PH_RANGE.check("ph", input.ph)?;
        GCS_RANGE.check("glasgow_coma_scale", input.glasgow_coma_scale as f64)?;
        PF_RATIO_RANGE.check("pao2_fio2_ratio", input.pao2_fio2_ratio)?;
        RESPIRATORY_RATE_RANGE.check("respiratory_rate", input.respiratory_rate as f64)?;
        Ok(())
    }

    fn compute(input: &HacorScoreInput) -> i64 {
        heart_rate_points(input.heart_rate)
            + ph_points(input.ph)
            + gcs_points(input.glasgow_coma_scale)
            + oxygenation_points(input.pao2_fio2_ratio)
            + respiratory_rate_points(input.respiratory_rate)
    }

    fn interpret(_input: &HacorScoreInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

fn heart_rate_points(heart_rate: i64) -> i64 {
    if heart_rate <= 120 { 0 } else { 1 }
}

fn ph_points(ph: f64) -> i64 {
    if ph >= 7.35 {
        0
    } else if ph >= 7.30 {
        2
    } else if ph >= 7.25 {
        3
    } else {
        4
    }
}

fn gcs_points(gcs: i64) -> i64 {
    match gcs {
        15 => 0,
        13..=14 => 2,
        11..=12 => 5,
        _ => 10,
    }
}

fn oxygenation_points(pf_ratio: f64) -> i64 {
    if pf_ratio > 200.0 {
        0
    } else if pf_ratio > 175.0 {
        2
    } else if pf_ratio > 150.0 {
        3
    } else if pf_ratio > 125.0 {
        4
    } else if pf_ratio > 100.0 {
        5
    } else {
        6
    }
}

fn respiratory_rate_points(respiratory_rate: i64) -> i64 {
    match respiratory_rate {
        ..=30 => 0,
        31..=35 => 1,
        36..=40 => 2,
        41..=45 => 3,
        _ => 4,
    }
}
