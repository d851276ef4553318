use crate::commands::{run_lang, run_quiz, run_score, run_types, LangCommand, QuizArgs, ScoreArgs, TypesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sqs_quiz::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SQS Orientation Awareness Quiz",
    about = "Take the SQS orientation awareness quiz in the terminal or serve it over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Answer the 30-question quiz interactively and view the results
    Quiz(QuizArgs),
    /// Score a completed answer sheet without the interactive quiz
    Score(ScoreArgs),
    /// Browse orientation types, or open one in detail
    Types(TypesArgs),
    /// Show or change the saved display language
    Lang {
        #[command(subcommand)]
        command: LangCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quiz(args) => run_quiz(args).await,
        Command::Score(args) => run_score(args).await,
        Command::Types(args) => run_types(args),
        Command::Lang { command } => run_lang(command),
    }
}
