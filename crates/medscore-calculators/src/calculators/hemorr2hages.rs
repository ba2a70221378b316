use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, YesNo, classify};

/// HEMORR2HAGES (Gage 2006): major bleeding risk on warfarin in atrial
/// fibrillation. Eleven factors; prior rebleeding carries 2 points, the
/// rest 1. Range 0-12.
pub struct Hemorr2hages;

const BANDS: &[Band] = &[
    Band::new(
        1.0,
        "Low Risk",
        "1.9-2.5 bleeds per 100 patient-years",
        "Low bleeding risk. Anticoagulation as indicated by thromboembolic risk, with routine \
         monitoring.",
    ),
    Band::new(
        3.0,
        "Intermediate Risk",
        "5.3-8.4 bleeds per 100 patient-years",
        "Intermediate bleeding risk. Anticoagulate where thromboembolic risk warrants, with \
         closer follow-up and attention to modifiable bleeding factors.",
    ),
    Band::new(
        12.0,
        "High Risk",
        "More than 10 bleeds per 100 patient-years",
        "High bleeding risk. Reassess the risk-benefit balance of anticoagulation; address \
         modifiable factors and consider alternatives to long-term warfarin.",
    ),
];

#[derive(Debug, Deserialize)]
pub struct Hemorr2hagesInput {
    pub hepatic_or_renal_disease: YesNo,
    pub ethanol_abuse: YesNo,
    pub malignancy: YesNo,
    pub age_over_75: YesNo,
    pub reduced_platelet_count_or_function: YesNo,
    pub rebleeding: YesNo,
    pub uncontrolled_hypertension: YesNo,
    pub anemia: YesNo,
    pub genetic_factors: YesNo,
    pub excessive_fall_risk: YesNo,
    pub stroke: YesNo,
}

impl ScorePipeline for Hemorr2hages {
    type Input = Hemorr2hagesInput;
    type Score = i64;

    const ID: &'static str = "hemorr2hages";
    const NAME: &'static str = "HEMORR2HAGES";
    const SPECIALTY: Specialty = Specialty::Cardiology;
    const DESCRIPTION: &'static str =
        "Major bleeding risk on anticoagulation for atrial fibrillation";

    fn validate(_input: &Hemorr2hagesInput) -> Result<(), ScoreError> {
        Ok(())
    }

    fn compute(input: &Hemorr2hagesInput) -> i64 {
        input.hepatic_or_renal_disease.points(1)
            + input.ethanol_abuse.points(1)
            + input.malignancy.points(1)
            + input.age_over_75.points(1)
            + input.reduced_platelet_count_or_function.points(1)
            + input.rebleeding.points(2)
            + input.uncontrolled_hypertension.points(1)
            + input.anemia.points(1)
            + input.genetic_factors.points(1)
            + input.excessive_fall_risk.points(1)
            + input.stroke.points(1)
    }

    fn interpret(_input: &Hemorr2hagesInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_every_point_of_the_score_range() {
        for score in 0..=12 {
            classify(Hemorr2hages::ID, BANDS, score as f64)
                .unwrap_or_else(|_| panic!("no band for HEMORR2HAGES {score}"));
        }
    }
}
