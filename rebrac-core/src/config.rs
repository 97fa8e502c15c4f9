use crate::betas::BetaPair;

pub const REPRODUCTION_HIDDEN_UNITS: [usize; 3] = [256, 256, 256];
pub const REPRODUCTION_N_STEPS: usize = 500_000;
pub const REPRODUCTION_N_STEPS_PER_EPOCH: usize = 1000;
pub const REPRODUCTION_SAVE_INTERVAL: usize = 10;
pub const ENVIRONMENT_EVALUATOR: &str = "environment";

#[derive(Debug, Clone, PartialEq)]
pub enum EncoderFactory {
    // library picks the architecture
    Default,
    Vector { hidden_units: Vec<usize> },
}

impl EncoderFactory {
    pub fn vector(hidden_units: impl Into<Vec<usize>>) -> Self {
        Self::Vector {
            hidden_units: hidden_units.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationScaler {
    /// Standardizes observations with the dataset mean and std
    Standard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReBRACConfig {
    pub actor_learning_rate: f64,
    pub critic_learning_rate: f64,
    pub batch_size: usize,
    pub gamma: f64,
    pub tau: f64,
    pub n_critics: usize,
    pub actor_encoder_factory: EncoderFactory,
    pub critic_encoder_factory: EncoderFactory,
    pub target_smoothing_sigma: f64,
    pub target_smoothing_clip: f64,
    pub update_actor_interval: usize,
    pub actor_beta: f64,
    pub critic_beta: f64,
    pub observation_scaler: Option<ObservationScaler>,
}

impl Default for ReBRACConfig {
    fn default() -> Self {
        ReBRACConfig {
            actor_learning_rate: 1e-3,
            critic_learning_rate: 1e-3,
            batch_size: 256,
            gamma: 0.99,
            tau: 0.005,
            n_critics: 2,
            actor_encoder_factory: EncoderFactory::Default,
            critic_encoder_factory: EncoderFactory::Default,
            target_smoothing_sigma: 0.2,
            target_smoothing_clip: 0.5,
            update_actor_interval: 2,
            actor_beta: 0.001,
            critic_beta: 0.01,
            observation_scaler: None,
        }
    }
}

impl ReBRACConfig {
    /// Hyperparameters of the D4RL reproduction run. Only the betas vary per dataset.
    pub fn reproduction(betas: BetaPair) -> Self {
        let encoder = EncoderFactory::vector(REPRODUCTION_HIDDEN_UNITS);
        ReBRACConfig {
            actor_learning_rate: 1e-3,
            // NOTE: 1e-1, not the library default of 1e-3. Kept so runs stay comparable.
            critic_learning_rate: 1e-1,
            batch_size: 1024,
            gamma: 0.99,
            actor_encoder_factory: encoder.clone(),
            critic_encoder_factory: encoder,
            target_smoothing_sigma: 0.2,
            target_smoothing_clip: 0.5,
            update_actor_interval: 2,
            actor_beta: betas.actor_beta,
            critic_beta: betas.critic_beta,
            observation_scaler: Some(ObservationScaler::Standard),
            ..Default::default()
        }
    }

    pub fn betas(&self) -> BetaPair {
        BetaPair::new(self.actor_beta, self.critic_beta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    /// Rolls out the policy in the environment that came with the dataset
    Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub n_steps: usize,
    pub n_steps_per_epoch: usize,
    // in epochs
    pub save_interval: usize,
    pub evaluators: Vec<(String, EvaluatorKind)>,
    pub experiment_name: String,
}

impl FitOptions {
    pub fn reproduction(dataset: &str, seed: i64) -> Self {
        FitOptions {
            n_steps: REPRODUCTION_N_STEPS,
            n_steps_per_epoch: REPRODUCTION_N_STEPS_PER_EPOCH,
            save_interval: REPRODUCTION_SAVE_INTERVAL,
            evaluators: vec![(ENVIRONMENT_EVALUATOR.to_owned(), EvaluatorKind::Environment)],
            experiment_name: experiment_name(dataset, seed),
        }
    }

    pub fn n_epochs(&self) -> usize {
        self.n_steps / self.n_steps_per_epoch
    }
}

pub fn experiment_name(dataset: &str, seed: i64) -> String {
    format!("ReBRAC_{dataset}_{seed}")
}
