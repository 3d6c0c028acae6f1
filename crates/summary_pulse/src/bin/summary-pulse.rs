use std::time::Duration;

use clap::{Parser, Subcommand};
use summary_datastore::{DataStore, NullStore, PgDataStore};
use tokio_util::sync::CancellationToken;

use summary_pulse::{
    openai::OpenAIClient,
    tracing::init_tracing_subscriber,
    yt::{fetcher::HttpFetcher, locator::WatchPageLocator},
    LlmSettings, SummaryProcessorBuilder, SummaryResult,
};

#[derive(Parser)]
#[command(name = "summary-pulse", about = "YouTube video summarizer")]
struct Cli {
    /// OpenAI-compatible completion endpoint, e.g. http://localhost:11434/v1
    #[arg(long, env = "LLM_ENDPOINT")]
    llm_endpoint: Option<String>,

    /// Bearer token for the completion endpoint
    #[arg(long, env = "LLM_API_KEY")]
    llm_api_key: Option<String>,

    /// Model used for summaries
    #[arg(long, env = "LLM_MODEL", default_value = LlmSettings::DEFAULT_MODEL)]
    llm_model: String,

    /// Database holding summaries of tracked videos
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Seconds to wait for the completion service
    #[arg(long, env = "COMPLETION_TIMEOUT_SECS", default_value = "120")]
    completion_timeout: u64,

    /// Transcript size budget in characters
    #[arg(long, env = "TRANSCRIPT_CHAR_BUDGET", default_value = "12000")]
    char_budget: usize,

    /// Retries for transient caption fetch failures
    #[arg(long, env = "FETCH_RETRIES", default_value = "0")]
    fetch_retries: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a single video and print the result as JSON
    Summarize {
        video_id: String,

        /// Persist the summary as a tracked video
        #[arg(long)]
        track: bool,
    },
}

async fn summarize<D>(cli: &Cli, store: D, video_id: &str, track: bool) -> anyhow::Result<bool>
where
    D: DataStore + Send + Sync + 'static,
{
    let settings = LlmSettings {
        endpoint: cli.llm_endpoint.clone(),
        api_key: cli.llm_api_key.clone(),
        model: cli.llm_model.clone(),
    };

    let processor = SummaryProcessorBuilder::new(settings)
        .store(store)
        .locator(WatchPageLocator::new()?)
        .fetcher(HttpFetcher::with_retries(cli.fetch_retries)?)
        .completer(OpenAIClient::default())
        .char_budget(cli.char_budget)
        .completion_timeout(Duration::from_secs(cli.completion_timeout))
        .build();

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling summary");
            ctrl_c.cancel();
        }
    });

    let result = match processor.summarize(video_id, &cancel).await {
        Ok(result) if track && !result.tracked => processor.track(result).await,
        other => other,
    };

    let (record, ok) = match result {
        Ok(record) => (record, true),
        Err(e) => (SummaryResult::failed(video_id, &e), false),
    };
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(ok)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let Command::Summarize { video_id, track } = &cli.command;

    let ok = match &cli.database_url {
        Some(db_url) => {
            let store = PgDataStore::init(db_url).await?;
            summarize(&cli, store, video_id, *track).await?
        }
        None => {
            if *track {
                tracing::warn!("--track given without DATABASE_URL, the summary will not be kept");
            }
            summarize(&cli, NullStore, video_id, *track).await?
        }
    };

    if !ok {
        anyhow::bail!("Failed to summarize video {video_id}");
    }

    Ok(())
}
