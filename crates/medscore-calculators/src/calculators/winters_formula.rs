use serde::Deserialize;
use serde_json::{Value, json};

use medscore_core::{CalculatorReport, Interpretation, ScoreError, ScoreValue, Specialty};

use crate::ScorePipeline;
use crate::scoring::FieldRange;

/// Winters' formula: expected arterial pCO2 in pure metabolic acidosis,
/// 1.5 x HCO3 + 8 (+/- 2 mmHg). When a measured pCO2 is supplied the
/// deviation from the expected range classifies the respiratory
/// compensation.
pub struct WintersFormula;

const BICARBONATE_RANGE: FieldRange = FieldRange::new(5.0, 35.0, "mEq/L");
const MEASURED_PCO2_RANGE: FieldRange = FieldRange::new(10.0, 80.0, "mmHg");
const TOLERANCE_MMHG: f64 = 2.0;

#[derive(Debug, Deserialize)]
pub struct WintersFormulaInput {
    pub bicarbonate: f64,
    pub measured_pco2: Option<f64>,
}

pub struct WintersFormulaScore {
    pub expected_pco2: f64,
    /// Measured minus expected, when a measurement was provided.
    pub difference: Option<f64>,
}

impl ScorePipeline for WintersFormula {
    type Input = WintersFormulaInput;
    type Score = WintersFormulaScore;

    const ID: &'static str = "winters_formula";
    const NAME: &'static str = "Winters' Formula";
    const SPECIALTY: Specialty = Specialty::Nephrology;
    const DESCRIPTION: &'static str =
        "Expected respiratory compensation for pure metabolic acidosis";
    const UNIT: &'static str = "mmHg";

    fn validate(input: &WintersFormulaInput) -> Result<(), ScoreError> {
        BICARBONATE_RANGE.check("bicarbonate", input.bicarbonate)?;
        if let Some(measured) = input.measured_pco2 {
            MEASURED_PCO2_RANGE.check("measured_pco2", measured)?;
        }
        Ok(())
    }

    fn compute(input: &WintersFormulaInput) -> WintersFormulaScore {
        let expected = 1.5 * input.bicarbonate + 8.0;
        let expected_pco2 = (expected * 10.0).round() / 10.0;
        let difference = input
            .measured_pco2
            .map(|measured| ((measured - expected_pco2) * 10.0).round() / 10.0);

        WintersFormulaScore {
            expected_pco2,
            difference,
        }
    }

    fn interpret(
        input: &WintersFormulaInput,
        score: &WintersFormulaScore,
    ) -> Result<Interpretation, ScoreError> {
        let expected = score.expected_pco2;
        let lower = expected - TOLERANCE_MMHG;
        let upper = expected + TOLERANCE_MMHG;

        let Some(difference) = score.difference else {
            return Ok(Interpretation::new(
                "Expected Compensation",
                "Calculated expected respiratory compensation",
                format!(
                    "For a serum bicarbonate of {} mEq/L the expected arterial pCO2 is \
                     {expected:.1} mmHg ({lower:.1}-{upper:.1} mmHg) if respiratory compensation \
                     is appropriate. Obtain an arterial blood gas to assess the actual \
                     compensation, and confirm this is a pure metabolic acidosis before applying \
                     the formula.",
                    input.bicarbonate
                ),
            ));
        };

        let measured = input.measured_pco2.unwrap_or(expected);
        let interpretation = if difference < -TOLERANCE_MMHG {
            Interpretation::new(
                "Overcompensation",
                "Respiratory overcompensation",
                format!(
                    "Measured pCO2 ({measured} mmHg) is {:.1} mmHg below the expected \
                     {expected:.1} mmHg, suggesting a concurrent primary respiratory alkalosis \
                     or mixed disorder. Review the clinical context and arterial pH.",
                    difference.abs()
                ),
            )
        } else if difference > TOLERANCE_MMHG {
            Interpretation::new(
                "Undercompensation",
                "Inadequate respiratory compensation",
                format!(
                    "Measured pCO2 ({measured} mmHg) is {difference:.1} mmHg above the expected \
                     {expected:.1} mmHg, suggesting respiratory impairment or a concurrent \
                     primary respiratory acidosis. Assess respiratory function and consider \
                     ventilatory support if severe."
                ),
            )
        } else {
            Interpretation::new(
                "Appropriate Compensation",
                "Expected respiratory compensation",
                format!(
                    "Measured pCO2 ({measured} mmHg) falls within the expected \
                     {lower:.1}-{upper:.1} mmHg range, indicating appropriate respiratory \
                     compensation. Focus on identifying and treating the underlying metabolic \
                     acidosis."
                ),
            )
        };
        Ok(interpretation)
    }

    fn score_value(score: &WintersFormulaScore) -> ScoreValue {
        ScoreValue::Float(score.expected_pco2)
    }

    fn assemble(
        input: &WintersFormulaInput,
        score: &WintersFormulaScore,
        interpretation: Interpretation,
    ) -> CalculatorReport {
        let lower = ((score.expected_pco2 - TOLERANCE_MMHG) * 10.0).round() / 10.0;
        let upper = ((score.expected_pco2 + TOLERANCE_MMHG) * 10.0).round() / 10.0;

        let within = score.difference.map(|d| d.abs() <= TOLERANCE_MMHG);
        CalculatorReport::new(score.expected_pco2, Self::UNIT, interpretation)
            .with_extra("expected_range", json!({ "lower": lower, "upper": upper }))
            .with_extra(
                "measured_pco2",
                input.measured_pco2.map_or(Value::Null, |v| json!(v)),
            )
            .with_extra(
                "difference",
                score.difference.map_or(Value::Null, |v| json!(v)),
            )
            .with_extra(
                "within_expected_range",
                within.map_or(Value::Null, |v| json!(v)),
            )
    }
}
