use thiserror::Error;

/// Failure of a training run, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum RunError<E: std::error::Error + Send + Sync + 'static> {
    #[error("failed to load dataset {dataset}")]
    Dataset {
        dataset: String,
        #[source]
        source: E,
    },
    #[error("failed to seed with {seed}")]
    Seeding {
        seed: i64,
        #[source]
        source: E,
    },
    #[error("failed to create the algorithm")]
    Create(#[source] E),
    #[error("training failed")]
    Fit(#[source] E),
}
