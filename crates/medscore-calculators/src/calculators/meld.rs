use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, FieldRange, YesNo, classify};

/// MELD: Model for End-Stage Liver Disease, in its original (Kamath
/// 2001), sodium-adjusted (Kim 2008), and 3.0 (Kim 2021) versions.
/// All versions clamp to the 6-40 UNOS reporting range.
pub struct Meld;

const BILIRUBIN_RANGE: FieldRange = FieldRange::new(0.1, 50.0, "mg/dL");
const CREATININE_RANGE: FieldRange = FieldRange::new(0.1, 15.0, "mg/dL");
const INR_RANGE: FieldRange = FieldRange::new(0.8, 10.0, "");
const SODIUM_RANGE: FieldRange = FieldRange::new(120.0, 160.0, "mEq/L");
const ALBUMIN_RANGE: FieldRange = FieldRange::new(1.0, 6.0, "g/dL");
const AGE_RANGE: FieldRange = FieldRange::new(12.0, 120.0, "years");

const MIN_SCORE: i64 = 6;
const MAX_SCORE: i64 = 40;
const MAX_CREATININE: f64 = 4.0;
const SODIUM_FLOOR: f64 = 125.0;
const SODIUM_CEILING: f64 = 137.0;

const BANDS: &[Band] = &[
    Band::new(
        9.0,
        "Mild Disease",
        "Lower mortality risk",
        "Mild liver disease with low 90-day mortality (<2%). Generally not considered for \
         transplantation unless specific indications are present.",
    ),
    Band::new(
        14.0,
        "Moderate Disease",
        "Moderate mortality risk",
        "Moderate liver disease with intermediate 90-day mortality (6-20%). Transplant \
         evaluation may be considered depending on clinical circumstances.",
    ),
    Band::new(
        19.0,
        "Severe Disease",
        "High mortality risk",
        "Severe liver disease with high 90-day mortality (>20%). A MELD of 15 or higher is \
         the conventional threshold for transplant consideration.",
    ),
    Band::new(
        29.0,
        "Very Severe Disease",
        "Very high mortality risk",
        "Very severe liver disease with very high 90-day mortality (>50%). High transplant \
         priority; close monitoring and intensive management required.",
    ),
    Band::new(
        40.0,
        "Critical Disease",
        "Extremely high mortality risk",
        "Critical liver disease with extremely high 90-day mortality (>80%). Highest \
         transplant priority; consider intensive care and urgent transplant evaluation.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeldVersion {
    Original,
    MeldNa,
    #[serde(rename = "meld_3_0")]
    Meld3_0,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Deserialize)]
pub struct MeldInput {
    pub meld_version: MeldVersion,
    pub bilirubin: f64,
    pub creatinine: f64,
    pub inr: f64,
    pub sodium: Option<f64>,
    pub albumin: Option<f64>,
    pub age: Option<i64>,
    pub sex: Option<Sex>,
    pub dialysis_twice_in_week: Option<YesNo>,
}

impl ScorePipeline for Meld {
    type Input = MeldInput;
    type Score = i64;

    const ID: &'static str = "meld";
    const NAME: &'static str = "MELD Score";
    const SPECIALTY: Specialty = Specialty::Gastroenterology;
    const DESCRIPTION: &'static str =
        "Model for End-Stage Liver Disease severity (original, MELD-Na, and MELD 3.0 versions)";

    fn validate(input: &MeldInput) -> Result<(), ScoreError> {
        BILIRUBIN_RANGE.check("bilirubin", input.bilirubin)?;
        CREATININE_RANGE.check("creatinine", input.creatinine)?;
        INR_RANGE.check("inr", input.inr)?;

        if matches!(input.meld_version, MeldVersion::MeldNa | MeldVersion::Meld3_0) {
            let sodium = require(input.sodium, "sodium", input.meld_version)?;
            SODIUM_RANGE.check("sodium", sodium)?;
        }

        if input.meld_version == MeldVersion::Meld3_0 {
            let albumin = require(input.albumin, "albumin", input.meld_version)?;
            ALBUMIN_RANGE.check("albumin", albumin)?;
            let age = require(input.age, "age", input.meld_version)?;
            AGE_RANGE.check("age", age as f64)?;
            require(input.sex, "sex", input.meld_version)?;
        }

        Ok(())
    }

    fn compute(input: &MeldInput) -> i64 {
        let score = match input.meld_version {
            MeldVersion::Original => original_meld(input),
            MeldVersion::MeldNa => meld_na(input),
            // Validated above; sodium/albumin/age/sex are present.
            MeldVersion::Meld3_0 => meld_3_0(input),
        };
        (score.round() as i64).clamp(MIN_SCORE, MAX_SCORE)
    }

    fn interpret(_input: &MeldInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}

fn require<T: Copy>(
    value: Option<T>,
    field: &str,
    version: MeldVersion,
) -> Result<T, ScoreError> {
    value.ok_or_else(|| {
        let version = match version {
            MeldVersion::Original => "original",
            MeldVersion::MeldNa => "meld_na",
            MeldVersion::Meld3_0 => "meld_3_0",
        };
        ScoreError::Validation {
            message: format!("{field} is required for {version}"),
            constraint: format!("{field} present when meld_version = {version}"),
            field: field.to_string(),
        }
    })
}

/// Floor-at-1.0 rules plus the creatinine cap and dialysis override
/// shared by every MELD version.
fn adjusted_labs(input: &MeldInput) -> (f64, f64, f64) {
    let bilirubin = input.bilirubin.max(1.0);
    let inr = input.inr.max(1.0);

    let creatinine = if input.dialysis_twice_in_week == Some(YesNo::Yes) {
        MAX_CREATININE
    } else {
        input.creatinine.max(1.0).min(MAX_CREATININE)
    };

    (bilirubin, creatinine, inr)
}

fn original_meld(input: &MeldInput) -> f64 {
    let (bilirubin, creatinine, inr) = adjusted_labs(input);
    9.57 * creatinine.ln() + 3.78 * bilirubin.ln() + 11.2 * inr.ln() + 6.43
}

fn meld_na(input: &MeldInput) -> f64 {
    let meld = original_meld(input).round().clamp(MIN_SCORE as f64, MAX_SCORE as f64);
    let sodium = input.sodium.unwrap_or(SODIUM_CEILING).clamp(SODIUM_FLOOR, SODIUM_CEILING);

    if meld > 11.0 {
        meld + 1.32 * (137.0 - sodium) - 0.033 * meld * (137.0 - sodium)
    } else {
        meld
    }
}

fn meld_3_0(input: &MeldInput) -> f64 {
    let (bilirubin, creatinine, inr) = adjusted_labs(input);
    let sodium = input.sodium.unwrap_or(SODIUM_CEILING).clamp(SODIUM_FLOOR, SODIUM_CEILING);
    let albumin = input.albumin.unwrap_or(3.5).clamp(1.5, 3.5);
    let female_term = if input.sex == Some(Sex::Female) { 1.33 } else { 0.0 };

    female_term
        + 4.56 * bilirubin.ln()
        + 0.82 * (137.0 - sodium)
        - 0.24 * (137.0 - sodium) * bilirubin.ln()
        + 9.09 * inr.ln()
        + 11.14 * creatinine.ln()
        + 1.85 * (3.5 - albumin)
        - 1.83 * (3.5 - albumin) * creatinine.ln()
        + 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_cover_every_point_of_the_score_range() {
        for score in MIN_SCORE..=MAX_SCORE {
            classify(Meld::ID, BANDS, score as f64)
                .unwrap_or_else(|_| panic!("no band for MELD {score}"));
        }
    }
}
