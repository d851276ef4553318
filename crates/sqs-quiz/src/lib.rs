//! Core of the SQS orientation awareness quiz: the fixed questionnaire, the
//! scorer, localized results content and the language preference.

pub mod config;
pub mod content;
pub mod error;
pub mod locale;
pub mod navigation;
pub mod profile;
pub mod questionnaire;
pub mod results;
pub mod safety;
pub mod scoring;
pub mod telemetry;
