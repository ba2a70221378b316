use serde::Deserialize;

use medscore_core::{Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::{Band, FieldRange, classify};

/// ISS: Injury Severity Score (Baker 1974). Sum of the squares of the
/// three highest Abbreviated Injury Scale grades across six body
/// regions; any AIS of 6 (unsurvivable) forces the maximum of 75.
pub struct InjurySeverityScore;

const AIS_RANGE: FieldRange = FieldRange::new(0.0, 6.0, "AIS grade");
const MAX_SCORE: i64 = 75;

const BANDS: &[Band] = &[
    Band::new(
        0.0,
        "No Injury",
        "No scored anatomical injury",
        "All regions scored 0. No anatomical injury burden by AIS grading; reassess if the \
         clinical picture suggests occult injury.",
    ),
    Band::new(
        8.0,
        "Minor Trauma",
        "Low anatomical injury burden",
        "Minor injury burden with low expected mortality. Routine trauma evaluation and \
         disposition per local protocol.",
    ),
    Band::new(
        15.0,
        "Moderate Trauma",
        "Moderate anatomical injury burden",
        "Moderate injury burden. Trauma team evaluation recommended; admission usually \
         warranted for observation and tertiary survey.",
    ),
    Band::new(
        24.0,
        "Serious Trauma",
        "Serious anatomical injury burden",
        "Serious multi-region injury. Manage at a trauma center; an ISS above 15 is the \
         conventional threshold for major trauma.",
    ),
    Band::new(
        49.0,
        "Severe Trauma",
        "Severe anatomical injury burden",
        "Severe multi-region injury with substantial mortality risk. Trauma center management \
         with early surgical and critical care involvement.",
    ),
    Band::new(
        74.0,
        "Critical Trauma",
        "Critical anatomical injury burden",
        "Critical injury burden with high expected mortality. Immediate damage-control \
         resuscitation and intensive care.",
    ),
    Band::new(
        75.0,
        "Unsurvivable",
        "Maximum score, currently untreatable injury",
        "An AIS grade of 6 in any region, or maximal multi-region injury, defines an injury \
         currently considered unsurvivable. Resuscitative effort per institutional policy and \
         family counselling.",
    ),
];

#[derive(Debug, Deserialize)]
pub struct InjurySeverityScoreInput {
    pub head_neck_ais: i64,
    pub face_ais: i64,
    pub chest_ais: i64,
    pub abdomen_ais: i64,
    pub extremity_ais: i64,
    pub external_ais: i64,
}

impl InjurySeverityScoreInput {
    fn regions(&self) -> [(&'static str, i64); 6] {
        [
            ("head_neck_ais", self.head_neck_ais),
            ("face_ais", self.face_ais),
            ("chest_ais", self.chest_ais),
            ("abdomen_ais", self.abdomen_ais),
            ("extremity_ais", self.extremity_ais),
            ("external_ais", self.external_ais),
        ]
    }
}

impl ScorePipeline for InjurySeverityScore {
    type Input = InjurySeverityScoreInput;
    type Score = i64;

    const ID: &'static str = "injury_severity_score";
    const NAME: &'static str = "Injury Severity Score";
    const SPECIALTY: Specialty = Specialty::Emergency;
    const DESCRIPTION: &'static str =
        "Anatomical trauma severity from per-region Abbreviated Injury Scale grades";

    fn validate(input: &InjurySeverityScoreInput) -> Result<(), ScoreError> {
        for (field, grade) in input.regions() {
            AIS_RANGE.check(field, grade as f64)?;
        }
        Ok(())
    }

    fn compute(input: &InjurySeverityScoreInput) -> i64 {
        let mut grades = input.regions().map(|(_, grade)| grade);

        // AIS 6 in any region is unsurvivable by definition and overrides
        // the sum-of-squares computation.
        if grades.contains(&6) {
            return MAX_SCORE;
        }

        grades.sort_unstable_by(|a, b| b.cmp(a));
        grades[..3].iter().map(|grade| grade * grade).sum()
    }

    fn interpret(_input: &InjurySeverityScoreInput, score: &i64) -> Result<Interpretation, ScoreError> {
        classify(Self::ID, BANDS, *score as f64)
    }

    fn score_value(score: &i64) -> ScoreValue {
        ScoreValue::Integer(*score)
    }
}
