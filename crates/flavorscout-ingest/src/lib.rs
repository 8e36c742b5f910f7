//! Upstream data preparation for Flavor Scout.
//!
//! Cleans scraped comments, annotates them through the [`Annotator`]
//! interface, and turns analysis records into the
//! [`Mention`](flavorscout_core::Mention)s the scoring engine consumes.
//! Network-backed scrapers and LLM annotators live outside this crate and
//! plug in through the same types.

pub mod annotate;
pub mod clean;
pub mod error;
pub mod lexicon;
pub mod mentions;
pub mod types;

pub use annotate::{annotate_in_batches, AnnotationOutcome, Annotator, LexiconAnnotator};
pub use clean::{clean_records, extract_flavors, summarize_flavors};
pub use error::IngestError;
pub use lexicon::lexicon_score;
pub use mentions::{parse_timestamp, records_to_mentions};
pub use types::{AnalysisRecord, CleanedComment, RawComment};
