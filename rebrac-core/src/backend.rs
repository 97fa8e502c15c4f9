use crate::config::{FitOptions, ReBRACConfig};
use std::collections::BTreeMap;

/// Handles shared by every capability of an offline RL framework.
pub trait Backend {
    type Dataset;
    type Env;
    type Error: std::error::Error + Send + Sync + 'static;
}

pub trait DatasetProvider: Backend {
    /// Loads a benchmark dataset together with the environment it was collected in.
    fn get_dataset(&mut self, name: &str) -> Result<(Self::Dataset, Self::Env), Self::Error>;
}

pub trait RandomSeeder: Backend {
    /// Seeds the framework's global random state.
    fn seed(&mut self, seed: i64) -> Result<(), Self::Error>;

    fn seed_env(&mut self, env: &Self::Env, seed: i64) -> Result<(), Self::Error>;
}

pub trait Trainer: Backend {
    type Algo: Fit<Self>;

    /// Instantiates the algorithm. `None` leaves device selection to the framework.
    fn create(&mut self, config: &ReBRACConfig, gpu: Option<i32>)
    -> Result<Self::Algo, Self::Error>;
}

pub trait Fit<B: Backend + ?Sized> {
    /// Trains on `dataset`, evaluating against `env`, and returns the metrics of every epoch.
    fn fit(
        &mut self,
        dataset: &B::Dataset,
        env: &B::Env,
        options: &FitOptions,
    ) -> Result<Vec<EpochMetrics>, B::Error>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochMetrics {
    pub epoch: usize,
    pub metrics: BTreeMap<String, f64>,
}

impl EpochMetrics {
    pub fn new(epoch: usize, metrics: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            epoch,
            metrics: metrics.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}
