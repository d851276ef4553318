use super::domain::{AgreementLevel, AnswerVector, QUESTION_COUNT};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerSheetError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {0} does not exist (expected 1..={QUESTION_COUNT})")]
    UnknownQuestion(i64),
    #[error("question {question} answered twice")]
    Duplicate { question: u8 },
    #[error("question {question} has answer {value}, expected -1..=4 or blank")]
    InvalidAnswer { question: u8, value: i64 },
}

/// Reads a `question,answer` CSV into an answer vector.
///
/// Rows may appear in any order; omitted questions, blank answers and `-1`
/// stay unanswered so the scorer can report them.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerVector, AnswerSheetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerVector, AnswerSheetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut answers = AnswerVector::unanswered();
        let mut seen: HashSet<u8> = HashSet::new();

        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            let question = match u8::try_from(row.question) {
                Ok(id) if (1..=QUESTION_COUNT as u8).contains(&id) => id,
                _ => return Err(AnswerSheetError::UnknownQuestion(row.question)),
            };
            if !seen.insert(question) {
                return Err(AnswerSheetError::Duplicate { question });
            }

            match row.answer {
                None | Some(-1) => {}
                Some(value) => {
                    let level = u8::try_from(value)
                        .ok()
                        .and_then(AgreementLevel::from_value)
                        .ok_or(AnswerSheetError::InvalidAnswer { question, value })?;
                    answers.set(usize::from(question) - 1, level);
                }
            }
        }

        Ok(answers)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question: i64,
    #[serde(default, deserialize_with = "blank_as_none")]
    answer: Option<i64>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sheet(rows: &str) -> Cursor<Vec<u8>> {
        Cursor::new(format!("question,answer\n{rows}").into_bytes())
    }

    #[test]
    fn imports_rows_in_any_order() {
        let answers =
            AnswerSheetImporter::from_reader(sheet("3,4\n1,0\n2,\n4,-1\n")).expect("valid sheet");

        assert_eq!(answers.get(0), Some(AgreementLevel::StronglyDisagree));
        assert_eq!(answers.get(1), None);
        assert_eq!(answers.get(2), Some(AgreementLevel::StronglyAgree));
        assert_eq!(answers.get(3), None);
        assert!(!answers.is_complete());
    }

    #[test]
    fn rejects_unknown_questions() {
        let err = AnswerSheetImporter::from_reader(sheet("31,2\n")).expect_err("no q31");
        assert!(matches!(err, AnswerSheetError::UnknownQuestion(31)));
    }

    #[test]
    fn rejects_duplicates_and_out_of_scale_answers() {
        let err = AnswerSheetImporter::from_reader(sheet("5,2\n5,3\n")).expect_err("duplicate");
        assert!(matches!(err, AnswerSheetError::Duplicate { question: 5 }));

        let err = AnswerSheetImporter::from_reader(sheet("6,9\n")).expect_err("bad value");
        assert!(matches!(
            err,
            AnswerSheetError::InvalidAnswer {
                question: 6,
                value: 9
            }
        ));
    }

    #[test]
    fn complete_sheet_reads_every_answer() {
        let rows: String = (1..=30).map(|id| format!("{id},{}\n", id % 5)).collect();
        let answers = AnswerSheetImporter::from_reader(sheet(&rows)).expect("valid");
        assert!(answers.is_complete());
        assert_eq!(answers.to_raw()[4], 0);
        assert_eq!(answers.to_raw()[3], 4);
    }
}
