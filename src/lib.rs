pub mod aggregate;
pub mod hf;
pub mod io;
pub mod models;
pub mod pipeline;

pub use aggregate::aggregate;
pub use hf::{HfClient, HfConfig, Tagger, Transcriber};
pub use io::{read_audio_file, read_transcript_file, AudioInput, HumanReport, MachineReport};
pub use models::{EntityCategory, GroupedEntities, Span};
pub use pipeline::{run_pipeline, run_tagging, PipelineReport, RunMetadata};
