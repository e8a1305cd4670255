use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use minutia::{
    read_audio_file, read_transcript_file, run_pipeline, run_tagging, HfClient, HfConfig,
    HumanReport, MachineReport, PipelineReport,
};

#[derive(Parser)]
#[command(name = "minutia")]
#[command(author, version, about = "Meeting audio transcription and entity extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio recording and extract the entities it mentions
    Process {
        /// Input audio file (single-channel WAV expected)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the machine-readable report (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the human-readable report (text)
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Speech-recognition model id
        #[arg(long, default_value = minutia::hf::DEFAULT_ASR_MODEL)]
        asr_model: String,

        /// Entity-tagging model id
        #[arg(long, default_value = minutia::hf::DEFAULT_NER_MODEL)]
        ner_model: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Extract entities from an existing transcript (skips transcription)
    Entities {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the machine-readable report (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entity-tagging model id
        #[arg(long, default_value = minutia::hf::DEFAULT_NER_MODEL)]
        ner_model: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            human_readable,
            asr_model,
            ner_model,
            verbose,
        } => {
            setup_logging(verbose);
            process_audio(input, output, human_readable, asr_model, ner_model).await
        }
        Commands::Entities {
            input,
            output,
            ner_model,
            verbose,
        } => {
            setup_logging(verbose);
            extract_from_transcript(input, output, ner_model).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_client(asr_model: String, ner_model: String) -> Result<HfClient> {
    let mut config = HfConfig::from_env()?;
    config.asr_model = asr_model;
    config.ner_model = ner_model;
    HfClient::new(config)
}

async fn process_audio(
    input: PathBuf,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
    asr_model: String,
    ner_model: String,
) -> Result<()> {
    info!("Loading audio from {:?}", input);
    let audio = read_audio_file(&input).context("Failed to load input audio")?;

    // Construct the model client once; both adapters share it
    let client = build_client(asr_model, ner_model)?;

    let report = run_pipeline(&client, &client, &audio.data).await?;

    info!(
        "Complete: {} unique mentions from {} tagged spans",
        report.metadata.mentions_grouped, report.metadata.spans_tagged
    );

    write_outputs(&report, output.as_deref(), human_readable.as_deref())
}

async fn extract_from_transcript(
    input: PathBuf,
    output: Option<PathBuf>,
    ner_model: String,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_transcript_file(&input)?;

    let client = build_client(minutia::hf::DEFAULT_ASR_MODEL.to_string(), ner_model)?;

    let report = run_tagging(&client, &transcript).await?;

    info!(
        "Complete: {} unique mentions from {} tagged spans",
        report.metadata.mentions_grouped, report.metadata.spans_tagged
    );

    write_outputs(&report, output.as_deref(), None)
}

fn write_outputs(
    report: &PipelineReport,
    output: Option<&std::path::Path>,
    human_readable: Option<&std::path::Path>,
) -> Result<()> {
    let machine = MachineReport::new(report);
    match output {
        Some(path) => {
            machine.write_json(path)?;
            info!("Report written to {:?}", path);
        }
        None => println!("{}", machine.to_json_string()?),
    }

    if let Some(path) = human_readable {
        HumanReport::new(report).write_file(path)?;
        info!("Human-readable report written to {:?}", path);
    }

    Ok(())
}
