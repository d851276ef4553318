mod bank;
pub mod collector;
pub mod domain;
mod import;

pub use bank::QuestionBank;
pub use collector::{AdvanceOutcome, AnswerCollector, CollectorError};
pub use domain::{
    AgreementLevel, AnswerVector, Dimension, InvalidAnswer, OrientationType, Question,
    UnknownOrientation, MAX_AGREEMENT, QUESTION_COUNT, SECTION_SIZE,
};
pub use import::{AnswerSheetError, AnswerSheetImporter};
