use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use interviewer::cli::{Cli, Command};
use interviewer::config::{InterviewConfig, read_questions_file};
use interviewer::interview::ConversationHistory;
use interviewer::ui::SessionUi;
use interviewer::{Interviewer, OpenAiClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = InterviewConfig::load_from(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    cli.apply_overrides(&mut config);

    match cli.command {
        Command::Run {
            questions_file,
            transcript,
        } => run_session(config, questions_file.as_deref(), transcript).await,
        Command::Questions { questions_file } => {
            let questions = load_questions(questions_file.as_deref())?;
            let settings = config.interview_settings(questions);
            SessionUi::new().print_questions(&settings.questions);
            Ok(())
        }
    }
}

// Logs go to stderr so they never interleave with the conversation on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "interviewer=debug"
    } else {
        "interviewer=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_questions(path: Option<&Path>) -> Result<Option<Vec<String>>> {
    path.map(|p| {
        read_questions_file(p).with_context(|| format!("failed to read {}", p.display()))
    })
    .transpose()
}

async fn run_session(
    config: InterviewConfig,
    questions_file: Option<&Path>,
    transcript: Option<PathBuf>,
) -> Result<()> {
    if config.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; follow-up questions will use fallbacks");
    }

    let questions = load_questions(questions_file)?;
    let settings = config.interview_settings(questions);
    let client = OpenAiClient::with_base_url(
        config.api_key.clone(),
        config.base_url.clone(),
        config.request_timeout(),
    )?;
    let mut interviewer = Interviewer::new(settings, client)?;

    let ui = SessionUi::new();
    let mut history = ConversationHistory::new();

    let turn = interviewer.advance_turn(None, &history).await;
    ui.interviewer(&turn);
    history.push_interviewer(turn.into_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !interviewer.is_closed() {
        ui.prompt()?;
        let Some(line) = lines.next_line().await? else {
            tracing::info!("input closed before the interview finished");
            break;
        };
        let reply = line.trim();
        if reply.is_empty() {
            continue;
        }
        history.push_candidate(reply);

        let spinner = ui.thinking();
        let turn = interviewer.advance_turn(Some(reply), &history).await;
        spinner.finish_and_clear();

        ui.interviewer(&turn);
        history.push_interviewer(turn.into_text());
    }

    let summary = interviewer.summary(&history);
    ui.print_summary(&summary);
    if let Some(path) = transcript {
        summary
            .write_json(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Transcript written to {}", path.display());
    }

    Ok(())
}
