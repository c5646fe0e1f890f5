//! arogya-core
//!
//! Pure domain types for NCD screening: the patient profile, the disease
//! vocabulary, recommendation keys, and the analysis result. No engine
//! logic lives here; this is the shared vocabulary of the Arogya system.

pub mod error;
pub mod models;
pub mod stored;
