//! medscore-core
//!
//! Pure domain types for the calculator service: the uniform report shape,
//! interpretation bands, specialties, and the error taxonomy. No HTTP and
//! no calculator logic — this is the shared vocabulary of the medscore
//! system.

pub mod error;
pub mod models;

pub use error::ScoreError;
pub use models::interpretation::Interpretation;
pub use models::report::{CalculatorReport, ScoreValue};
pub use models::specialty::Specialty;
