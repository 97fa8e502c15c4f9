// Hyperparameter resolution and run assembly for ReBRAC offline reproductions. The training
// itself is delegated to a framework behind the traits in `backend`.
pub mod backend;
pub mod betas;
pub mod config;
pub mod error;
pub mod experiment;
#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use backend::{Backend, DatasetProvider, EpochMetrics, Fit, RandomSeeder, Trainer};
pub use betas::{BETA_TABLE, BetaPair, DEFAULT_BETAS, lookup_betas, resolve_betas};
pub use config::{EncoderFactory, EvaluatorKind, FitOptions, ObservationScaler, ReBRACConfig};
pub use error::RunError;
pub use experiment::{Experiment, RunPlan, TrainingReport, run};
