use crate::infra::{build_locator, open_language_context, parse_language};
use crate::render::{render_profile, render_results, render_type_detail, render_types_overview};
use crate::terminal::TerminalQuiz;
use chrono::Utc;
use clap::{Args, Subcommand};
use serde_json::json;
use sqs_quiz::config::AppConfig;
use sqs_quiz::content;
use sqs_quiz::error::AppError;
use sqs_quiz::locale::{Language, LanguageContext};
use sqs_quiz::navigation::{ResultsHandoff, Route};
use sqs_quiz::profile::ProfileHistory;
use sqs_quiz::questionnaire::{AnswerSheetImporter, OrientationType, QuestionBank};
use sqs_quiz::results::ResultsView;
use sqs_quiz::safety::{self, GeoLocator};
use sqs_quiz::scoring;
use sqs_quiz::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Skip the location lookup behind the safety line.
    #[arg(long)]
    pub(crate) skip_safety: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV with `question,answer` rows (1-based question ids, answers 0-4).
    #[arg(long)]
    pub(crate) answers_csv: PathBuf,
    /// Print the hand-off state and results view as JSON.
    #[arg(long)]
    pub(crate) json: bool,
    /// Skip the location lookup behind the safety line.
    #[arg(long)]
    pub(crate) skip_safety: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TypesArgs {
    /// Orientation key to open in detail, e.g. `asexual`.
    #[arg(value_name = "TYPE")]
    pub(crate) orientation: Option<String>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum LangCommand {
    /// Print the saved display language
    Show,
    /// Switch between Chinese and English
    Toggle,
    /// Save a specific display language
    Set {
        #[arg(value_parser = parse_language)]
        language: Language,
    },
}

fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) async fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let mut language = open_language_context(&config.preferences);
    let locator = build_locator(&config.geolocation);
    let mut history = ProfileHistory::new();

    let stdin = io::stdin();
    let mut quiz = TerminalQuiz::new(stdin.lock(), io::stdout(), &mut language);
    quiz.greet()?;

    loop {
        let Some(handoff) = quiz.run()? else {
            break;
        };
        let results_language = quiz.language();
        history.record(primary_or_band(&handoff), Utc::now());
        info!(route = %Route::Results, primary_type = ?handoff.primary_type, "quiz submitted");

        present_results(
            quiz.output(),
            &handoff,
            results_language,
            (!args.skip_safety).then(|| locator.clone()),
        )
        .await?;

        if !quiz.wants_retake()? {
            break;
        }
    }

    drop(quiz);
    let views = history.views(language.language());
    render_profile(&mut io::stdout(), &views, language.language())?;
    Ok(())
}

fn primary_or_band(handoff: &ResultsHandoff) -> OrientationType {
    handoff
        .primary_type
        .unwrap_or_else(|| content::classify_score(handoff.scores.attraction_percent()))
}

/// Renders the results body, then the safety line once the background
/// lookup resolves.
async fn present_results<W: Write>(
    out: &mut W,
    handoff: &ResultsHandoff,
    language: Language,
    locator: Option<Arc<dyn GeoLocator>>,
) -> Result<(), AppError> {
    let pending = locator.map(|locator| safety::spawn_lookup(locator, language));
    let view = ResultsView::build(handoff, language, None);
    render_results(out, &view)?;

    if let Some(handle) = pending {
        writeln!(out, "\n{}", content::ui_text(language).results.dashboard)?;
        writeln!(out, "  {}", view.safety_line)?;
        out.flush()?;
        let reading = match handle.await {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!(error = %err, "safety lookup task failed");
                safety::SafetyReading::placeholder(language)
            }
        };
        writeln!(out, "  {}", reading.line(language))?;
        writeln!(out, "  {}", content::ui_text(language).results.dashboard_note)?;
    }
    Ok(())
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let language = open_language_context(&config.preferences).language();

    let answers = AnswerSheetImporter::from_path(&args.answers_csv)?;
    let bank = QuestionBank::for_language(language);
    let report = scoring::score(&answers, bank.questions())?;
    let handoff = ResultsHandoff::from_report(&answers, report);
    info!(path = %args.answers_csv.display(), primary_type = ?handoff.primary_type, "answer sheet scored");

    let mut out = io::stdout();
    if args.json {
        let reading = if args.skip_safety {
            None
        } else {
            Some(safety::lookup(build_locator(&config.geolocation).as_ref(), language).await)
        };
        let view = ResultsView::build(&handoff, language, reading.as_ref());
        let payload = json!({ "handoff": handoff, "view": view });
        serde_json::to_writer_pretty(&mut out, &payload).map_err(io::Error::from)?;
        writeln!(out)?;
        return Ok(());
    }

    let locator = (!args.skip_safety).then(|| build_locator(&config.geolocation));
    present_results(&mut out, &handoff, language, locator).await
}

pub(crate) fn run_types(args: TypesArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let language = open_language_context(&config.preferences).language();
    let mut out = io::stdout();

    match args.orientation {
        Some(key) => {
            let orientation: OrientationType = key.parse()?;
            let profile = content::type_profile(orientation, language);
            render_type_detail(&mut out, &profile, language)?;
        }
        None => {
            render_types_overview(&mut out, &content::types_overview(language), language)?;
        }
    }
    Ok(())
}

pub(crate) fn run_lang(command: LangCommand) -> Result<(), AppError> {
    let config = bootstrap()?;
    let mut context: LanguageContext = open_language_context(&config.preferences);

    let language = match command {
        LangCommand::Show => context.language(),
        LangCommand::Toggle => context.toggle()?,
        LangCommand::Set { language } => context.set(language)?,
    };

    println!("{} (toggle: {})", language, language.toggle_caption());
    Ok(())
}
