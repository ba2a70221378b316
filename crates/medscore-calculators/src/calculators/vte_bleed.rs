use serde::Deserialize;
use serde_json::json;

use medscore_core::{CalculatorReport, Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::YesNo;

/// VTE-BLEED (Klok 2016): major bleeding risk on stable anticoagulation
/// after venous thromboembolism. Six weighted criteria, range 0-9;
/// scores of 2 or more mark the elevated-risk group.
pub struct VteBleed;

const ELEVATED_RISK_THRESHOLD: f64 = 2.0;

const CRITERIA: &[(&str, f64)] = &[
    ("age_60_or_older", 1.5),
    ("active_cancer", 2.0),
    ("male_uncontrolled_hypertension", 1.0),
    ("anemia", 1.5),
    ("history_of_bleeding", 1.5),
    ("renal_dysfunction", 1.5),
];

#[derive(Debug, Deserialize)]
pub struct VteBleedInput {
    pub age_60_or_older: YesNo,
    pub active_cancer: YesNo,
    /// Male patient with uncontrolled arterial hypertension.
    pub male_uncontrolled_hypertension: YesNo,
    pub anemia: YesNo,
    pub history_of_bleeding: YesNo,
    /// Creatinine clearance 30-60 mL/min.
    pub renal_dysfunction: YesNo,
}

impl VteBleedInput {
    fn flags(&self) -> [YesNo; 6] {
        [
            self.age_60_or_older,
            self.active_cancer,
            self.male_uncontrolled_hypertension,
            self.anemia,
            self.history_of_bleeding,
            self.renal_dysfunction,
        ]
    }
}

impl ScorePipeline for VteBleed {
    type Input = VteBleedInput;
    type Score = f64;

    const ID: &'static str = "vte_bleed";
    const NAME: &'static str = "VTE-BLEED";
    const SPECIALTY: Specialty = Specialty::Hematology;
    const DESCRIPTION: &'static str =
        "Bleeding risk on stable anticoagulation after venous thromboembolism";

    fn validate(_input: &VteBleedInput) -> Result<(), ScoreError> {
        Ok(())
    }

    fn compute(input: &VteBleedInput) -> f64 {
        input
            .flags()
            .iter()
            .zip(CRITERIA)
            .filter(|(flag, _)| flag.is_yes())
            .map(|(_, (_, weight))| weight)
            .sum()
    }

    fn interpret(_input: &VteBleedInput, score: &f64) -> Result<Interpretation, ScoreError> {
        let interpretation = if *score < ELEVATED_RISK_THRESHOLD {
            Interpretation::new(
                "Low Risk",
                "Low bleeding risk on anticoagulation",
                format!(
                    "VTE-BLEED score of {score} indicates low bleeding risk. Continue standard \
                     anticoagulation with routine monitoring; the benefit of anticoagulation \
                     typically outweighs bleeding risk, including for extended treatment."
                ),
            )
        } else {
            Interpretation::new(
                "Elevated Risk",
                "Elevated bleeding risk on anticoagulation",
                format!(
                    "VTE-BLEED score of {score} indicates elevated bleeding risk. Intensify \
                     monitoring, address modifiable bleeding factors, and weigh drug choice, \
                     dose, and treatment duration individually."
                ),
            )
        };
        Ok(interpretation)
    }

    fn score_value(score: &f64) -> ScoreValue {
        ScoreValue::Float(*score)
    }

    fn assemble(
        input: &VteBleedInput,
        score: &f64,
        interpretation: Interpretation,
    ) -> CalculatorReport {
        let positive: Vec<&str> = input
            .flags()
            .iter()
            .zip(CRITERIA)
            .filter(|(flag, _)| flag.is_yes())
            .map(|(_, (name, _))| *name)
            .collect();

        CalculatorReport::new(*score, Self::UNIT, interpretation)
            .with_extra("positive_criteria", json!(positive))
    }
}
