use crate::{
    backend::{DatasetProvider, EpochMetrics, Fit, RandomSeeder, Trainer},
    betas::{BetaPair, lookup_betas, resolve_betas},
    config::{FitOptions, ReBRACConfig},
    error::RunError,
};
use std::collections::BTreeMap;

pub const DEFAULT_DATASET: &str = "hopper-medium-v0";
pub const DEFAULT_SEED: i64 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub dataset: String,
    pub seed: i64,
    pub gpu: Option<i32>,
}

impl Default for Experiment {
    fn default() -> Self {
        Experiment {
            dataset: DEFAULT_DATASET.to_owned(),
            seed: DEFAULT_SEED,
            gpu: None,
        }
    }
}

/// Everything the run needs that does not come from the framework.
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub matched_key: Option<&'static str>,
    pub betas: BetaPair,
    pub config: ReBRACConfig,
    pub fit_options: FitOptions,
}

impl Experiment {
    pub fn plan(&self) -> RunPlan {
        let matched_key = lookup_betas(&self.dataset).map(|(key, _)| key);
        let betas = resolve_betas(&self.dataset);
        RunPlan {
            matched_key,
            betas,
            config: ReBRACConfig::reproduction(betas),
            fit_options: FitOptions::reproduction(&self.dataset, self.seed),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub experiment_name: String,
    pub betas: BetaPair,
    pub epochs: Vec<EpochMetrics>,
}

impl TrainingReport {
    pub fn final_metrics(&self) -> Option<&BTreeMap<String, f64>> {
        self.epochs.last().map(|epoch| &epoch.metrics)
    }
}

pub fn run<B>(experiment: &Experiment, backend: &mut B) -> Result<TrainingReport, RunError<B::Error>>
where
    B: DatasetProvider + RandomSeeder + Trainer,
{
    let Experiment { dataset, seed, gpu } = experiment;
    let (data, env) = backend
        .get_dataset(dataset)
        .map_err(|source| RunError::Dataset {
            dataset: dataset.clone(),
            source,
        })?;
    tracing::info!(dataset = %dataset, "dataset loaded");

    backend
        .seed(*seed)
        .and_then(|_| backend.seed_env(&env, *seed))
        .map_err(|source| RunError::Seeding {
            seed: *seed,
            source,
        })?;

    let plan = experiment.plan();
    match plan.matched_key {
        Some(key) => tracing::info!(
            key,
            actor_beta = plan.betas.actor_beta,
            critic_beta = plan.betas.critic_beta,
            "betas resolved"
        ),
        None => tracing::info!(
            actor_beta = plan.betas.actor_beta,
            critic_beta = plan.betas.critic_beta,
            "no beta table entry for dataset, using defaults"
        ),
    }
    tracing::debug!(config = ?plan.config, "algorithm config");

    let mut algo = backend.create(&plan.config, *gpu).map_err(RunError::Create)?;
    tracing::info!(
        experiment = %plan.fit_options.experiment_name,
        n_steps = plan.fit_options.n_steps,
        n_epochs = plan.fit_options.n_epochs(),
        "starting training"
    );
    let epochs = algo
        .fit(&data, &env, &plan.fit_options)
        .map_err(RunError::Fit)?;
    tracing::info!(epochs = epochs.len(), "training finished");

    Ok(TrainingReport {
        experiment_name: plan.fit_options.experiment_name,
        betas: plan.betas,
        epochs,
    })
}
