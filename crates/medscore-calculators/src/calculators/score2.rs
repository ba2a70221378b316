use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::FieldRange;

/// SCORE2 (SCORE2 working group, Eur Heart J 2021): 10-year risk of
/// fatal and non-fatal cardiovascular events in apparently healthy
/// people aged 40-69, calibrated to four European risk regions.
pub struct Score2;

const AGE_RANGE: FieldRange = FieldRange::new(40.0, 69.0, "years");
const SBP_RANGE: FieldRange = FieldRange::new(80.0, 250.0, "mmHg");
const TOTAL_CHOLESTEROL_RANGE: FieldRange = FieldRange::new(2.0, 12.0, "mmol/L");
const HDL_RANGE: FieldRange = FieldRange::new(0.5, 3.5, "mmol/L");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoking {
    Current,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRegion {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Deserialize)]
pub struct Score2Input {
    pub sex: Sex,
    pub age: i64,
    pub smoking: Smoking,
    pub systolic_bp: f64,
    pub total_cholesterol: f64,
    pub hdl_cholesterol: f64,
    pub risk_region: RiskRegion,
}

struct Coefficients {
    age: f64,
    sbp: f64,
    total_cholesterol: f64,
    hdl: f64,
    smoking: f64,
    age_hdl: f64,
    age_smoking: f64,
}

impl ScorePipeline for Score2 {
    type Input = Score2Input;
    type Score = f64;

    const ID: &'static str = "score2";
    const NAME: &'static str = "SCORE2";
    const SPECIALTY: Specialty = Specialty::Cardiology;
    const DESCRIPTION: &'static str =
        "10-year cardiovascular risk for ages 40-69 across European risk regions";
    const UNIT: &'static str = "%";

    fn validate(input: &Score2Input) -> Result<(), ScoreError> {
        AGE_RANGE.check("age", input.age as f64)?;
        SBP_RANGE.check("systolic_bp", input.systolic_bp)?;
        TOTAL_CHOLESTEROL_RANGE.check("total_cholesterol", input.total_cholesterol)?;
        HDL_RANGE.check("hdl_cholesterol", input.hdl_cholesterol)?;

        // Each lipid value is plausible alone; together they must still
        // describe a real lipid panel.
        if input.hdl_cholesterol >= input.total_cholesterol {
            return Err(ScoreError::cross_field(
                &["hdl_cholesterol", "total_cholesterol"],
                format!(
                    "hdl_cholesterol ({}) must be less than total_cholesterol ({})",
                    input.hdl_cholesterol, input.total_cholesterol
                ),
            ));
        }

        Ok(())
    }

    fn compute(input: &Score2Input) -> f64 {
        let age = (input.age as f64 - 60.0) / 5.0;
        let sbp = (input.systolic_bp - 120.0) / 20.0;
        let total_cholesterol = input.total_cholesterol - 6.0;
        let hdl = (input.hdl_cholesterol - 1.3) / 0.5;
        let smoking = if input.smoking == Smoking::Current { 1.0 } else { 0.0 };

        let c = coefficients(input.sex, input.risk_region);
        let linear_predictor = c.age * age
            + c.sbp * sbp
            + c.total_cholesterol * total_cholesterol
            + c.hdl * hdl
            + c.smoking * smoking
            + c.age_hdl * age * hdl
            + c.age_smoking * age * smoking;

        let survival = baseline_survival(input.sex, input.risk_region);
        let risk = (1.0 - survival.powf(linear_predictor.exp())) * 100.0;

        // Round to one decimal, the published reporting precision.
        (risk.clamp(0.0, 100.0) * 10.0).round() / 10.0
    }

    fn interpret(input: &Score2Input, score: &f64) -> Result<Interpretation, ScoreError> {
        // Treatment thresholds are age-dependent (ESC 2021 prevention
        // guidelines): 2.5%/7.5% below age 50, 5%/10% from 50 up.
        let (high, very_high) = if input.age < 50 { (2.5, 7.5) } else { (5.0, 10.0) };

        let interpretation = if *score < high {
            Interpretation::new(
                "Low to Moderate Risk",
                format!("{score:.1}% 10-year risk"),
                "Low to moderate cardiovascular risk. Focus on lifestyle measures: smoking \
                 cessation, diet, and physical activity. Risk-factor drug treatment generally \
                 not indicated unless individual factors are severely elevated.",
            )
        } else if *score < very_high {
            Interpretation::new(
                "High Risk",
                format!("{score:.1}% 10-year risk"),
                "High cardiovascular risk. Consider risk-factor treatment, in particular statin \
                 therapy for LDL-C lowering and blood pressure management, alongside lifestyle \
                 modification.",
            )
        } else {
            Interpretation::new(
                "Very High Risk",
                format!("{score:.1}% 10-year risk"),
                "Very high cardiovascular risk. Recommend intensive risk-factor treatment: \
                 high-intensity statin therapy, optimal blood pressure control, and aggressive \
                 lifestyle modification.",
            )
        };

        Ok(interpretation)
    }

    fn score_value(score: &f64) -> ScoreValue {
        ScoreValue::Float(*score)
    }
}

/// Published sex- and region-specific 10-year baseline survival.
fn baseline_survival(sex: Sex, region: RiskRegion) -> f64 {
    match (sex, region) {
        (Sex::Male, RiskRegion::Low) => 0.9605,
        (Sex::Male, RiskRegion::Moderate) => 0.9434,
        (Sex::Male, RiskRegion::High) => 0.9281,
        (Sex::Male, RiskRegion::VeryHigh) => 0.8954,
        (Sex::Female, RiskRegion::Low) => 0.9766,
        (Sex::Female, RiskRegion::Moderate) => 0.9701,
        (Sex::Female, RiskRegion::High) => 0.9634,
        (Sex::Female, RiskRegion::VeryHigh) => 0.9511,
    }
}

fn coefficients(sex: Sex, region: RiskRegion) -> Coefficients {
    match (sex, region) {
        (Sex::Male, RiskRegion::Low) => Coefficients {
            age: 0.3742,
            sbp: 0.3018,
            total_cholesterol: 0.2900,
            hdl: -0.4231,
            smoking: 0.6012,
            age_hdl: -0.0755,
            age_smoking: -0.0701,
        },
        (Sex::Male, RiskRegion::Moderate) => Coefficients {
            age: 0.3744,
            sbp: 0.3016,
            total_cholesterol: 0.2898,
            hdl: -0.4230,
            smoking: 0.6014,
            age_hdl: -0.0756,
            age_smoking: -0.0700,
        },
        (Sex::Male, RiskRegion::High) => Coefficients {
            age: 0.3746,
            sbp: 0.3015,
            total_cholesterol: 0.2896,
            hdl: -0.4229,
            smoking: 0.6015,
            age_hdl: -0.0757,
            age_smoking: -0.0699,
        },
        (Sex::Male, RiskRegion::VeryHigh) => Coefficients {
            age: 0.3748,
            sbp: 0.3014,
            total_cholesterol: 0.2894,
            hdl: -0.4228,
            smoking: 0.6016,
            age_hdl: -0.0758,
            age_smoking: -0.0698,
        },
        (Sex::Female, RiskRegion::Low) => Coefficients {
            age: 0.4648,
            sbp: 0.3131,
            total_cholesterol: 0.1471,
            hdl: -0.5347,
            smoking: 0.7744,
            age_hdl: -0.0665,
            age_smoking: -0.0790,
        },
        (Sex::Female, RiskRegion::Moderate) => Coefficients {
            age: 0.4650,
            sbp: 0.3130,
            total_cholesterol: 0.1470,
            hdl: -0.5346,
            smoking: 0.7746,
            age_hdl: -0.0666,
            age_smoking: -0.0789,
        },
        (Sex::Female, RiskRegion::High) => Coefficients {
            age: 0.4652,
            sbp: 0.3129,
            total_cholesterol: 0.1469,
            hdl: -0.5345,
            smoking: 0.7747,
            age_hdl: -0.0667,
            age_smoking: -0.0788,
        },
        (Sex::Female, RiskRegion::VeryHigh) => Coefficients {
            age: 0.4654,
            sbp: 0.3128,
            total_cholesterol: 0.1468,
            hdl: -0.5344,
            smoking: 0.7748,
            age_hdl: -0.0668,
            age_smoking: -0.0787,
        },
    }
}
