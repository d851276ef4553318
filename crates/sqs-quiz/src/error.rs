use crate::config::ConfigError;
use crate::locale::PreferenceError;
use crate::questionnaire::{AnswerSheetError, CollectorError, InvalidAnswer, UnknownOrientation};
use crate::scoring::ScoringError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Preference(PreferenceError),
    Scoring(ScoringError),
    Answers(InvalidAnswer),
    AnswerSheet(AnswerSheetError),
    Collector(CollectorError),
    UnknownType(UnknownOrientation),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Preference(err) => write!(f, "preference error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Answers(err) => write!(f, "invalid answers: {}", err),
            AppError::AnswerSheet(err) => write!(f, "answer sheet error: {}", err),
            AppError::Collector(err) => write!(f, "questionnaire error: {}", err),
            AppError::UnknownType(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Preference(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::AnswerSheet(err) => Some(err),
            AppError::Collector(err) => Some(err),
            AppError::UnknownType(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Answers(_) | AppError::AnswerSheet(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownType(_) => StatusCode::NOT_FOUND,
            AppError::Preference(PreferenceError::UnsupportedLanguage(_)) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Preference(_)
            | AppError::Collector(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<PreferenceError> for AppError {
    fn from(value: PreferenceError) -> Self {
        Self::Preference(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<InvalidAnswer> for AppError {
    fn from(value: InvalidAnswer) -> Self {
        Self::Answers(value)
    }
}

impl From<AnswerSheetError> for AppError {
    fn from(value: AnswerSheetError) -> Self {
        Self::AnswerSheet(value)
    }
}

impl From<CollectorError> for AppError {
    fn from(value: CollectorError) -> Self {
        Self::Collector(value)
    }
}

impl From<UnknownOrientation> for AppError {
    fn from(value: UnknownOrientation) -> Self {
        Self::UnknownType(value)
    }
}
