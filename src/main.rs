use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use docsum::{
    AppConfig, Chunk, EntityChunker, GazetteerExtractor, NerClient, SummarizerClient,
    split_sentences, summarize_chunks,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Parser)]
#[command(name = "docsum", version, about = "Entity-aware document chunking and summarization")]
struct Cli {
    /// Config file (defaults to ./docsum.toml when present)
    #[arg(long, global = true, env = "DOCSUM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a document into entity-coherent chunks and print them as JSON
    Chunk {
        #[command(flatten)]
        args: ChunkArgs,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Chunk a document, summarize every chunk, and merge the summaries
    Summarize {
        #[command(flatten)]
        args: ChunkArgs,

        /// Base URL of the summarization server
        #[arg(long, env = "DOCSUM_SUMMARIZER_ENDPOINT")]
        summarizer_endpoint: Option<String>,

        /// Model name passed to the summarization server
        #[arg(long)]
        model: Option<String>,

        /// Directory for summary_output.txt and chunk_summaries.txt
        #[arg(long, default_value = "data/processed")]
        out_dir: PathBuf,
    },
}

#[derive(Args, Clone)]
struct ChunkArgs {
    /// Plain-text document to process
    file: PathBuf,

    /// Soft token budget per chunk
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Hard token ceiling per chunk
    #[arg(long)]
    hard_cap: Option<usize>,

    /// TOML lexicon for offline tagging; takes precedence over --ner-endpoint
    #[arg(long)]
    gazetteer: Option<PathBuf>,

    /// Base URL of the NER model server
    #[arg(long, env = "DOCSUM_NER_ENDPOINT")]
    ner_endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Chunk { args, pretty } => {
            let chunks = chunk_file(args, config).await?;
            let json = if pretty {
                serde_json::to_string_pretty(&chunks)?
            } else {
                serde_json::to_string(&chunks)?
            };
            println!("{json}");
        }
        Command::Summarize {
            args,
            summarizer_endpoint,
            model,
            out_dir,
        } => {
            let endpoint = summarizer_endpoint
                .or_else(|| config.summarizer.endpoint.clone())
                .context("no summarizer configured: pass --summarizer-endpoint or set [summarizer] endpoint")?;
            let settings = config.summarizer.clone();

            let chunks = chunk_file(args, config).await?;

            let mut client = SummarizerClient::with_timeout(
                endpoint,
                Duration::from_secs(settings.timeout_secs),
            )?;
            if let Some(model) = model.or(settings.model) {
                client = client.model(model);
            }
            if let Some(temperature) = settings.temperature {
                client = client.temperature(temperature);
            }

            let start = Instant::now();
            let summary = summarize_chunks(&chunks, &client)
                .await
                .context("summarization failed")?;
            info!(
                chunks = chunks.len(),
                secs = start.elapsed().as_secs_f64(),
                "summarization complete"
            );

            fs::create_dir_all(&out_dir)
                .with_context(|| format!("creating output dir: {}", out_dir.display()))?;
            write_output(&out_dir.join("summary_output.txt"), &summary.final_summary)?;
            write_output(
                &out_dir.join("chunk_summaries.txt"),
                &summary.chunk_summaries_text(),
            )?;

            println!("{}", summary.final_summary);
        }
    }

    Ok(())
}

/// Read and chunk a document off the async runtime; NER calls are blocking
async fn chunk_file(args: ChunkArgs, config: AppConfig) -> Result<Vec<Chunk>> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading document: {}", args.file.display()))?;

    tokio::task::spawn_blocking(move || chunk_text(&text, &args, &config))
        .await
        .context("chunking task panicked")?
}

fn chunk_text(text: &str, args: &ChunkArgs, config: &AppConfig) -> Result<Vec<Chunk>> {
    let mut limits = config.chunking;
    if let Some(max_tokens) = args.max_tokens {
        limits.max_tokens_per_chunk = max_tokens;
    }
    if let Some(hard_cap) = args.hard_cap {
        limits.hard_cap = hard_cap;
    }
    let chunker = EntityChunker::new(limits).context("invalid chunking limits")?;

    let start = Instant::now();
    let chunks = if let Some(path) = args.gazetteer.as_ref().or(config.ner.gazetteer.as_ref()) {
        let gazetteer = GazetteerExtractor::from_path(path)?;
        info!(entries = gazetteer.len(), path = %path.display(), "loaded gazetteer");

        match chunker.chunk(text, &gazetteer) {
            Ok(chunks) => chunks,
            Err(never) => match never {},
        }
    } else if let Some(endpoint) = args.ner_endpoint.as_ref().or(config.ner.endpoint.as_ref()) {
        let client =
            NerClient::with_timeout(endpoint.as_str(), Duration::from_secs(config.ner.timeout_secs))?
                .batch_size(config.ner.batch_size);

        let sentences = split_sentences(text);
        info!(sentences = sentences.len(), endpoint = %client.endpoint(), "prefetching entity tags");
        let tags = client
            .prefetch(&sentences)
            .context("entity extraction failed")?;

        chunker
            .chunk(text, &tags)
            .context("entity extraction failed")?
    } else {
        bail!("no entity extractor configured: pass --gazetteer or --ner-endpoint");
    };

    info!(
        chunks = chunks.len(),
        tokens = chunks.iter().map(|c| c.token_count).sum::<usize>(),
        secs = start.elapsed().as_secs_f64(),
        "chunking complete"
    );
    Ok(chunks)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}
