use crate::{
    backend::{Backend, DatasetProvider, EpochMetrics, Fit, RandomSeeder, Trainer},
    config::{FitOptions, ReBRACConfig},
};
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetDataset(String),
    Seed(i64),
    SeedEnv { env: String, seed: i64 },
    Create { config: ReBRACConfig, gpu: Option<i32> },
    Fit {
        dataset: String,
        env: String,
        options: FitOptions,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    GetDataset,
    Seed,
    SeedEnv,
    Create,
    Fit,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("injected failure at {0:?}")]
pub struct InjectedError(pub Stage);

/// In-memory backend that records every call. Datasets and envs are plain names.
#[derive(Debug, Default, Clone)]
pub struct RecordingBackend {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail_at: Option<Stage>,
    pub epoch_metrics: Vec<EpochMetrics>,
}

impl RecordingBackend {
    pub fn failing_at(stage: Stage) -> Self {
        Self {
            fail_at: Some(stage),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, stage: Stage, call: Call) -> Result<(), InjectedError> {
        self.calls.borrow_mut().push(call);
        match self.fail_at {
            Some(fail_at) if fail_at == stage => Err(InjectedError(stage)),
            _ => Ok(()),
        }
    }
}

pub struct RecordingAlgo {
    backend: RecordingBackend,
}

impl Backend for RecordingBackend {
    type Dataset = String;
    type Env = String;
    type Error = InjectedError;
}

impl DatasetProvider for RecordingBackend {
    fn get_dataset(&mut self, name: &str) -> Result<(String, String), InjectedError> {
        self.record(Stage::GetDataset, Call::GetDataset(name.to_owned()))?;
        Ok((format!("{name}/dataset"), format!("{name}/env")))
    }
}

impl RandomSeeder for RecordingBackend {
    fn seed(&mut self, seed: i64) -> Result<(), InjectedError> {
        self.record(Stage::Seed, Call::Seed(seed))
    }

    fn seed_env(&mut self, env: &String, seed: i64) -> Result<(), InjectedError> {
        self.record(
            Stage::SeedEnv,
            Call::SeedEnv {
                env: env.clone(),
                seed,
            },
        )
    }
}

impl Trainer for RecordingBackend {
    type Algo = RecordingAlgo;

    fn create(
        &mut self,
        config: &ReBRACConfig,
        gpu: Option<i32>,
    ) -> Result<RecordingAlgo, InjectedError> {
        self.record(
            Stage::Create,
            Call::Create {
                config: config.clone(),
                gpu,
            },
        )?;
        Ok(RecordingAlgo {
            backend: self.clone(),
        })
    }
}

impl Fit<RecordingBackend> for RecordingAlgo {
    fn fit(
        &mut self,
        dataset: &String,
        env: &String,
        options: &FitOptions,
    ) -> Result<Vec<EpochMetrics>, InjectedError> {
        self.backend.record(
            Stage::Fit,
            Call::Fit {
                dataset: dataset.clone(),
                env: env.clone(),
                options: options.clone(),
            },
        )?;
        Ok(self.backend.epoch_metrics.clone())
    }
}
