//! Band-boundary assertions: a score at threshold T and the nearest
//! valid score below it must land in two different, adjacent bands.

use serde_json::{Value, json};

use medscore_calculators::get_calculator;
use medscore_core::{CalculatorReport, ScoreValue};

fn run(id: &str, payload: Value) -> CalculatorReport {
    get_calculator(id)
        .unwrap_or_else(|| panic!("{id} not registered"))
        .evaluate(&payload)
        .unwrap_or_else(|e| panic!("{id} failed: {e}"))
}

fn assert_score_and_stage(report: &CalculatorReport, score: i64, stage: &str) {
    assert_eq!(report.result, ScoreValue::Integer(score));
    assert_eq!(report.stage, stage);
}

#[test]
fn news2_zero_and_one_share_stage_but_not_description() {
    let zero = run("news2", news2_with(json!({})));
    let one = run(
        "news2",
        news2_with(json!({ "temperature": "35_1_to_36" })),
    );
    assert_eq!(zero.stage, "Low Risk");
    assert_eq!(one.stage, "Low Risk");
    assert_ne!(zero.stage_description, one.stage_description);
}

#[test]
fn news2_four_to_five_crosses_into_medium() {
    let four = run(
        "news2",
        news2_with(json!({
            "respiratory_rate": "21_to_24",
            "supplemental_oxygen": "yes",
        })),
    );
    assert_score_and_stage(&four, 4, "Low Risk");

    let five = run(
        "news2",
        news2_with(json!({
            "respiratory_rate": "21_to_24",
            "supplemental_oxygen": "yes",
            "temperature": "35_1_to_36",
        })),
    );
    assert_score_and_stage(&five, 5, "Medium Risk");
}

#[test]
fn news2_six_to_seven_crosses_into_high() {
    let six = run(
        "news2",
        news2_with(json!({
            "respiratory_rate": "21_to_24",
            "supplemental_oxygen": "yes",
            "temperature": "35_1_to_36",
            "systolic_bp": "101_to_110",
        })),
    );
    assert_score_and_stage(&six, 6, "Medium Risk");

    let seven = run(
        "news2",
        news2_with(json!({
            "respiratory_rate": "21_to_24",
            "supplemental_oxygen": "yes",
            "temperature": "35_1_to_36",
            "systolic_bp": "101_to_110",
            "heart_rate": "91_to_110",
        })),
    );
    assert_score_and_stage(&seven, 7, "High Risk");
}

fn news2_with(overrides: Value) -> Value {
    let mut body = json!({
        "respiratory_rate": "12_to_20",
        "hypercapnic_respiratory_failure": "no",
        "oxygen_saturation": "96_or_more",
        "supplemental_oxygen": "no",
        "temperature": "36_1_to_38",
        "systolic_bp": "111_to_219",
        "heart_rate": "51_to_90",
        "consciousness": "alert",
    });
    for (key, value) in overrides.as_object().unwrap() {
        body[key] = value.clone();
    }
    body
}

#[test]
fn iss_band_edges() {
    // 8 = 2,2,0 vs 9 = 2,2,1
    assert_score_and_stage(&run_iss([2, 2, 0, 0, 0, 0]), 8, "Minor Trauma");
    assert_score_and_stage(&run_iss([2, 2, 1, 0, 0, 0]), 9, "Moderate Trauma");
    // 14 = 3,2,1 vs 16 = 4,0,0 (15 is not a sum of three AIS squares)
    assert_score_and_stage(&run_iss([3, 2, 1, 0, 0, 0]), 14, "Moderate Trauma");
    assert_score_and_stage(&run_iss([4, 0, 0, 0, 0, 0]), 16, "Serious Trauma");
    // 24 = 4,2,2 vs 25 = 4,3,0
    assert_score_and_stage(&run_iss([4, 2, 2, 0, 0, 0]), 24, "Serious Trauma");
    assert_score_and_stage(&run_iss([4, 3, 0, 0, 0, 0]), 25, "Severe Trauma");
    // 48 = 4,4,4 vs 50 = 5,4,3 (49 is unreachable without an AIS 6)
    assert_score_and_stage(&run_iss([4, 4, 4, 0, 0, 0]), 48, "Severe Trauma");
    assert_score_and_stage(&run_iss([5, 4, 3, 0, 0, 0]), 50, "Critical Trauma");
    // Maximal non-override injury still reaches 75.
    assert_score_and_stage(&run_iss([5, 5, 5, 0, 0, 0]), 75, "Unsurvivable");
}

fn run_iss(ais: [i64; 6]) -> CalculatorReport {
    run(
        "injury_severity_score",
        json!({
            "head_neck_ais": ais[0],
            "face_ais": ais[1],
            "chest_ais": ais[2],
            "abdomen_ais": ais[3],
            "extremity_ais": ais[4],
            "external_ais": ais[5],
        }),
    )
}

#[test]
fn meld_band_edges() {
    // Labs picked so the rounded score lands exactly on each edge.
    assert_score_and_stage(&run_meld(2.0, 1.0, 1.0), 9, "Mild Disease");
    assert_score_and_stage(&run_meld(2.6, 1.0, 1.0), 10, "Moderate Disease");
    assert_score_and_stage(&run_meld(8.4, 1.0, 1.0), 14, "Moderate Disease");
    assert_score_and_stage(&run_meld(9.0, 1.0, 1.0), 15, "Severe Disease");
    assert_score_and_stage(&run_meld(4.0, 2.0, 1.1), 19, "Severe Disease");
    assert_score_and_stage(&run_meld(4.0, 2.0, 1.2), 20, "Very Severe Disease");
    assert_score_and_stage(&run_meld(6.0, 4.0, 1.3), 29, "Very Severe Disease");
    assert_score_and_stage(&run_meld(6.0, 4.0, 1.4), 30, "Critical Disease");
    // Extreme labs clamp to the 40-point ceiling.
    assert_score_and_stage(&run_meld(50.0, 15.0, 10.0), 40, "Critical Disease");
}

fn run_meld(bilirubin: f64, creatinine: f64, inr: f64) -> CalculatorReport {
    run(
        "meld",
        json!({
            "meld_version": "original",
            "bilirubin": bilirubin,
            "creatinine": creatinine,
            "inr": inr,
        }),
    )
}

#[test]
fn hemorr2hages_band_edges() {
    assert_score_and_stage(
        &run("hemorr2hages", hemorr2hages_with(&["anemia"])),
        1,
        "Low Risk",
    );
    assert_score_and_stage(
        &run("hemorr2hages", hemorr2hages_with(&["anemia", "stroke"])),
        2,
        "Intermediate Risk",
    );
    assert_score_and_stage(
        &run("hemorr2hages", hemorr2hages_with(&["rebleeding", "anemia"])),
        3,
        "Intermediate Risk",
    );
    assert_score_and_stage(
        &run(
            "hemorr2hages",
            hemorr2hages_with(&["rebleeding", "anemia", "stroke"]),
        ),
        4,
        "High Risk",
    );
}

fn hemorr2hages_with(positive: &[&str]) -> Value {
    let mut body = json!({
        "hepatic_or_renal_disease": "no",
        "ethanol_abuse": "no",
        "malignancy": "no",
        "age_over_75": "no",
        "reduced_platelet_count_or_function": "no",
        "rebleeding": "no",
        "uncontrolled_hypertension": "no",
        "anemia": "no",
        "genetic_factors": "no",
        "excessive_fall_risk": "no",
        "stroke": "no",
    });
    for field in positive {
        body[*field] = json!("yes");
    }
    body
}

#[test]
fn heart_pathway_score_three_to_four_flips_disposition() {
    let three = run(
        "heart_pathway",
        json!({
            "history": "slightly_suspicious",
            "ecg": "nonspecific_repolarization",
            "age": "45_to_64",
            "risk_factors": "one_or_two",
            "initial_troponin": "normal",
            "repeat_troponin_negative": "yes",
        }),
    );
    assert_score_and_stage(&three, 3, "Low Risk");

    let four = run(
        "heart_pathway",
        json!({
            "history": "moderately_suspicious",
            "ecg": "nonspecific_repolarization",
            "age": "45_to_64",
            "risk_factors": "one_or_two",
            "initial_troponin": "normal",
            "repeat_troponin_negative": "yes",
        }),
    );
    assert_score_and_stage(&four, 4, "High Risk");
}

#[test]
fn hacor_five_to_six_crosses_into_high() {
    let five = run(
        "hacor_score",
        json!({
            "heart_rate": 100,
            "ph": 7.32,
            "glasgow_coma_scale": 13,
            "pao2_fio2_ratio": 250.0,
            "respiratory_rate": 31,
        }),
    );
    assert_score_and_stage(&five, 5, "Low Risk");

    let six = run(
        "hacor_score",
        json!({
            "heart_rate": 100,
            "ph": 7.32,
            "glasgow_coma_scale": 13,
            "pao2_fio2_ratio": 250.0,
            "respiratory_rate": 36,
        }),
    );
    assert_score_and_stage(&six, 6, "High Risk");
}

#[test]
fn modified_sofa_band_edges() {
    let seven = run("modified_sofa", msofa(140, "present", 75, "none", 15, 1.0));
    assert_score_and_stage(&seven, 7, "Low Risk");

    let eight = run("modified_sofa", msofa(140, "present", 75, "none", 14, 1.0));
    assert_score_and_stage(&eight, 8, "Moderate Risk");

    let eleven = run("modified_sofa", msofa(140, "present", 60, "none", 10, 1.5));
    assert_score_and_stage(&eleven, 11, "Moderate Risk");

    let twelve = run("modified_sofa", msofa(140, "present", 60, "none", 10, 2.5));
    assert_score_and_stage(&twelve, 12, "High Risk");
}

fn msofa(
    sf_ratio: i64,
    icterus: &str,
    map: i64,
    vasopressors: &str,
    gcs: i64,
    creatinine: f64,
) -> Value {
    json!({
        "spo2_fio2_ratio": sf_ratio,
        "scleral_icterus": icterus,
        "mean_arterial_pressure": map,
        "vasopressor_use": vasopressors,
        "glasgow_coma_scale": gcs,
        "creatinine": creatinine,
    })
}

#[test]
fn vte_bleed_threshold_is_two_points() {
    let below = run(
        "vte_bleed",
        vte_bleed_with(&["age_60_or_older"]),
    );
    assert_eq!(below.result, ScoreValue::Float(1.5));
    assert_eq!(below.stage, "Low Risk");

    let at = run(
        "vte_bleed",
        vte_bleed_with(&["age_60_or_older", "male_uncontrolled_hypertension"]),
    );
    assert_eq!(at.result, ScoreValue::Float(2.5));
    assert_eq!(at.stage, "Elevated Risk");
}

fn vte_bleed_with(positive: &[&str]) -> Value {
    let mut body = json!({
        "age_60_or_older": "no",
        "active_cancer": "no",
        "male_uncontrolled_hypertension": "no",
        "anemia": "no",
        "history_of_bleeding": "no",
        "renal_dysfunction": "no",
    });
    for field in positive {
        body[*field] = json!("yes");
    }
    body
}

#[test]
fn itas2010_one_to_two_activates_disease() {
    let one = run("itas2010", itas_with(&["headache"]));
    assert_score_and_stage(&one, 1, "Inactive");

    let two = run("itas2010", itas_with(&["headache", "syncope"]));
    assert_score_and_stage(&two, 2, "Active");
}

fn itas_with(positive: &[&str]) -> Value {
    let mut body = json!({
        "malaise_weight_loss": "no",
        "myalgia_arthralgia": "no",
        "headache": "no",
        "severe_abdominal_pain": "no",
        "recent_spontaneous_abortion": "no",
        "systolic_bp_over_140": "no",
        "diastolic_bp_over_90": "no",
        "stroke": "no",
        "seizures": "no",
        "syncope": "no",
        "vertigo_dizziness": "no",
        "bruits": "no",
        "pulse_inequality": "no",
        "new_loss_of_pulses": "no",
        "claudication": "no",
        "carotidynia": "no",
        "aortic_incompetence": "no",
        "mi_angina": "no",
        "cardiomyopathy_cardiac_failure": "no",
    });
    for field in positive {
        body[*field] = json!("yes");
    }
    body
}

#[test]
fn licurse_band_edges() {
    let two = run(
        "licurse_score",
        licurse(
            "no", "black", "yes", "yes", "yes", "yes", "yes",
        ),
    );
    assert_score_and_stage(&two, 2, "Low Risk");

    let three = run(
        "licurse_score",
        licurse("no", "non_black", "yes", "yes", "yes", "yes", "yes"),
    );
    assert_score_and_stage(&three, 3, "Medium Risk");

    let four = run(
        "licurse_score",
        licurse("no", "non_black", "yes", "yes", "no", "yes", "yes"),
    );
    assert_score_and_stage(&four, 4, "High Risk");
}

fn licurse(
    hydronephrosis: &str,
    race: &str,
    utis: &str,
    obstruction: &str,
    chf: &str,
    prerenal: &str,
    nephrotoxic: &str,
) -> Value {
    json!({
        "history_hydronephrosis": hydronephrosis,
        "race": race,
        "recurrent_utis": utis,
        "obstruction_diagnosis": obstruction,
        "history_chf": chf,
        "prerenal_aki_sepsis": prerenal,
        "nephrotoxic_exposure": nephrotoxic,
    })
}

#[test]
fn winters_tolerance_edge_is_inclusive() {
    let at_upper = run(
        "winters_formula",
        json!({ "bicarbonate": 10.0, "measured_pco2": 25.0 }),
    );
    assert_eq!(at_upper.stage, "Appropriate Compensation");
    assert_eq!(at_upper.extra["within_expected_range"], json!(true));

    let past_upper = run(
        "winters_formula",
        json!({ "bicarbonate": 10.0, "measured_pco2": 25.1 }),
    );
    assert_eq!(past_upper.stage, "Undercompensation");

    let at_lower = run(
        "winters_formula",
        json!({ "bicarbonate": 10.0, "measured_pco2": 21.0 }),
    );
    assert_eq!(at_lower.stage, "Appropriate Compensation");

    let past_lower = run(
        "winters_formula",
        json!({ "bicarbonate": 10.0, "measured_pco2": 20.9 }),
    );
    assert_eq!(past_lower.stage, "Overcompensation");
}

#[test]
fn mehran_band_edges() {
    let five = run("mehran_score", mehran(&["hypotension"], 50, 50.0, 90.0));
    assert_score_and_stage(&five, 5, "Low Risk");

    let six = run("mehran_score", mehran(&["hypotension"], 50, 100.0, 90.0));
    assert_score_and_stage(&six, 6, "Moderate Risk");

    let ten = run(
        "mehran_score",
        mehran(&["hypotension", "intra_aortic_balloon_pump"], 50, 50.0, 90.0),
    );
    assert_score_and_stage(&ten, 10, "Moderate Risk");

    let eleven = run(
        "mehran_score",
        mehran(
            &["hypotension", "intra_aortic_balloon_pump"],
            50,
            100.0,
            90.0,
        ),
    );
    assert_score_and_stage(&eleven, 11, "High Risk");

    let fifteen = run(
        "mehran_score",
        mehran(
            &["hypotension", "intra_aortic_balloon_pump"],
            80,
            100.0,
            90.0,
        ),
    );
    assert_score_and_stage(&fifteen, 15, "High Risk");

    let sixteen = run(
        "mehran_score",
        mehran(
            &[
                "hypotension",
                "intra_aortic_balloon_pump",
                "anemia",
                "diabetes",
            ],
            50,
            50.0,
            90.0,
        ),
    );
    assert_score_and_stage(&sixteen, 16, "Very High Risk");
}

#[test]
fn mehran_egfr_bands() {
    assert_eq!(
        run("mehran_score", mehran(&[], 50, 50.0, 19.9)).result,
        ScoreValue::Integer(6)
    );
    assert_eq!(
        run("mehran_score", mehran(&[], 50, 50.0, 20.0)).result,
        ScoreValue::Integer(4)
    );
    assert_eq!(
        run("mehran_score", mehran(&[], 50, 50.0, 40.0)).result,
        ScoreValue::Integer(2)
    );
    assert_eq!(
        run("mehran_score", mehran(&[], 50, 50.0, 60.0)).result,
        ScoreValue::Integer(0)
    );
}

fn mehran(positive: &[&str], age: i64, contrast_ml: f64, egfr: f64) -> Value {
    let mut body = json!({
        "hypotension": "no",
        "intra_aortic_balloon_pump": "no",
        "congestive_heart_failure": "no",
        "age": age,
        "anemia": "no",
        "diabetes": "no",
        "contrast_volume_ml": contrast_ml,
        "egfr": egfr,
    });
    for field in positive {
        body[*field] = json!("yes");
    }
    body
}

#[test]
fn cockcroft_gault_ninety_edge() {
    let at_ninety = run(
        "cockcroft_gault",
        json!({ "age": 40, "weight_kg": 64.8, "sex": "male", "serum_creatinine": 1.0 }),
    );
    assert_eq!(at_ninety.result, ScoreValue::Float(90.0));
    assert_eq!(at_ninety.stage, "Normal");

    let below_ninety = run(
        "cockcroft_gault",
        json!({ "age": 40, "weight_kg": 64.5, "sex": "male", "serum_creatinine": 1.0 }),
    );
    assert_eq!(below_ninety.result, ScoreValue::Float(89.6));
    assert_eq!(below_ninety.stage, "Mild Reduction");
}

#[test]
fn ukeld_listing_threshold() {
    let below = run(
        "ukeld",
        json!({ "inr": 1.0, "creatinine": 60.0, "bilirubin": 15.0, "sodium": 140.0 }),
    );
    assert_eq!(below.result, ScoreValue::Float(46.5));
    assert_eq!(below.stage, "Below Listing Threshold");

    let listed = run(
        "ukeld",
        json!({ "inr": 1.2, "creatinine": 120.0, "bilirubin": 60.0, "sodium": 136.0 }),
    );
    assert_eq!(listed.result, ScoreValue::Float(55.2));
    assert_eq!(listed.stage, "Meets Listing Criteria");
}
