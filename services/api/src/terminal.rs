use sqs_quiz::content;
use sqs_quiz::error::AppError;
use sqs_quiz::locale::{Language, LanguageContext};
use sqs_quiz::navigation::ResultsHandoff;
use sqs_quiz::questionnaire::{AdvanceOutcome, AgreementLevel, AnswerCollector};
use std::io::{BufRead, Write};
use tracing::debug;

/// What the respondent typed at a question prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Answer(AgreementLevel),
    ToggleLanguage,
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "l" | "lang" => Input::ToggleLanguage,
        "q" | "quit" => Input::Quit,
        other => other
            .parse::<u8>()
            .ok()
            .and_then(AgreementLevel::from_value)
            .map_or(Input::Invalid, Input::Answer),
    }
}

/// Line-oriented questionnaire over any reader/writer pair.
pub(crate) struct TerminalQuiz<'a, R, W> {
    input: R,
    output: W,
    language: &'a mut LanguageContext,
    collector: AnswerCollector,
}

impl<'a, R: BufRead, W: Write> TerminalQuiz<'a, R, W> {
    pub(crate) fn new(input: R, output: W, language: &'a mut LanguageContext) -> Self {
        let collector = AnswerCollector::new(language.language());
        Self {
            input,
            output,
            language,
            collector,
        }
    }

    pub(crate) fn language(&self) -> Language {
        self.collector.language()
    }

    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints the landing copy once per session.
    pub(crate) fn greet(&mut self) -> Result<(), AppError> {
        let text = content::ui_text(self.collector.language());
        writeln!(self.output, "{}", text.logo_title)?;
        writeln!(self.output, "{}", text.home.title)?;
        writeln!(self.output, "{}", text.home.desc)?;
        writeln!(
            self.output,
            "(0-4 = answer, l = {}, q = quit)",
            self.collector.language().toggle_caption()
        )?;
        Ok(())
    }

    /// Runs one pass through all three sections. `None` means the respondent
    /// quit or input ended before submission.
    pub(crate) fn run(&mut self) -> Result<Option<ResultsHandoff>, AppError> {
        self.collector.reset();
        loop {
            self.print_section_header()?;
            let indices: Vec<usize> = self
                .collector
                .current_questions()
                .map(|(index, _)| index)
                .collect();

            for index in indices {
                if self.collector.answer(index).is_some() {
                    continue;
                }
                match self.ask(index)? {
                    Some(level) => self.collector.record_answer(index, level)?,
                    None => return Ok(None),
                }
            }

            match self.collector.advance()? {
                AdvanceOutcome::Blocked { missing, .. } => {
                    let text = content::ui_text(self.collector.language());
                    writeln!(self.output, "{} {:?}", text.test.required, missing)?;
                }
                AdvanceOutcome::NextSection(section) => {
                    debug!(section = ?section, "section complete");
                }
                AdvanceOutcome::Completed(handoff) => return Ok(Some(handoff)),
            }
        }
    }

    /// Asks whether to retake after results.
    pub(crate) fn wants_retake(&mut self) -> Result<bool, AppError> {
        let text = content::ui_text(self.collector.language());
        writeln!(self.output, "\n[r] {} / [q]", text.results.retest)?;
        self.output.flush()?;
        Ok(matches!(self.read_line()?.as_deref().map(str::trim), Some("r" | "R")))
    }

    fn print_section_header(&mut self) -> Result<(), AppError> {
        let language = self.collector.language();
        let section = self.collector.current_section();
        let text = content::ui_text(language);
        writeln!(
            self.output,
            "\n== {} ({}/3) ==",
            section.label(language),
            section.index() + 1
        )?;
        let options: Vec<String> = AgreementLevel::display_order()
            .into_iter()
            .map(|level| format!("{}={}", level.value(), level.label(language)))
            .collect();
        writeln!(self.output, "{}", options.join("  "))?;
        let caption = if self.collector.is_last_section() {
            text.test.submit
        } else {
            text.test.next
        };
        writeln!(self.output, "-> {caption}")?;
        Ok(())
    }

    fn ask(&mut self, index: usize) -> Result<Option<AgreementLevel>, AppError> {
        loop {
            let (id, prompt) = match self.collector.current_questions().find(|(i, _)| *i == index) {
                Some((_, question)) => (question.id, question.text),
                None => return Ok(None),
            };
            write!(self.output, "{id}. {prompt}\n> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_input(&line) {
                Input::Answer(level) => return Ok(Some(level)),
                Input::Quit => return Ok(None),
                Input::ToggleLanguage => {
                    let language = self.language.toggle_for_session();
                    self.collector.switch_language(language);
                    self.print_section_header()?;
                }
                Input::Invalid => {
                    writeln!(self.output, "0-4 / l / q")?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
