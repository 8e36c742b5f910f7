use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("annotator {annotator} failed: {reason}")]
    Annotation { annotator: String, reason: String },

    #[error("batch size must be at least 1")]
    InvalidBatchSize,
}
