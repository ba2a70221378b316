pub mod cockcroft_gault;
pub mod hacor_score;
pub mod heart_pathway;
pub mod hemorr2hages;
pub mod injury_severity_score;
pub mod itas2010;
pub mod licurse_score;
pub mod mehran_score;
pub mod meld;
pub mod modified_sofa;
pub mod news2;
pub mod score2;
pub mod ukeld;
pub mod vte_bleed;
pub mod winters_formula;
