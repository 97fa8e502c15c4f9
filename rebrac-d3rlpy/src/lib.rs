use pyo3::{
    Bound, PyAny, PyErr, PyObject, PyResult, Python,
    types::{PyAnyMethods, PyDict, PyModule},
};
use rebrac_core::{
    Backend, DatasetProvider, EncoderFactory, EpochMetrics, EvaluatorKind, Fit, FitOptions,
    ObservationScaler, RandomSeeder, ReBRACConfig, Trainer,
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum D3rlpyError {
    #[error(transparent)]
    Python(#[from] PyErr),
    #[error("unexpected value returned by fit ({reason}): {raw}")]
    Metrics { reason: String, raw: String },
}

/// Backend that forwards every call to the `d3rlpy` python package.
#[derive(Debug, Default, Clone, Copy)]
pub struct D3rlpy;

impl D3rlpy {
    pub fn new() -> Self {
        Self
    }
}

fn d3rlpy(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    py.import("d3rlpy")
}

fn encoder_factory<'py>(
    d3rlpy: &Bound<'py, PyModule>,
    factory: &EncoderFactory,
) -> PyResult<Bound<'py, PyAny>> {
    let models = d3rlpy.getattr("models")?;
    match factory {
        EncoderFactory::Default => models.getattr("DefaultEncoderFactory")?.call0(),
        EncoderFactory::Vector { hidden_units } => models
            .getattr("VectorEncoderFactory")?
            .call1((hidden_units.clone(),)),
    }
}

fn observation_scaler<'py>(
    d3rlpy: &Bound<'py, PyModule>,
    scaler: ObservationScaler,
) -> PyResult<Bound<'py, PyAny>> {
    let preprocessing = d3rlpy.getattr("preprocessing")?;
    match scaler {
        ObservationScaler::Standard => preprocessing.getattr("StandardObservationScaler")?.call0(),
    }
}

fn config_kwargs<'py>(
    py: Python<'py>,
    d3rlpy: &Bound<'py, PyModule>,
    config: &ReBRACConfig,
) -> PyResult<Bound<'py, PyDict>> {
    let kwargs = PyDict::new(py);
    kwargs.set_item("actor_learning_rate", config.actor_learning_rate)?;
    kwargs.set_item("critic_learning_rate", config.critic_learning_rate)?;
    kwargs.set_item("batch_size", config.batch_size)?;
    kwargs.set_item("gamma", config.gamma)?;
    kwargs.set_item("tau", config.tau)?;
    kwargs.set_item("n_critics", config.n_critics)?;
    kwargs.set_item(
        "actor_encoder_factory",
        encoder_factory(d3rlpy, &config.actor_encoder_factory)?,
    )?;
    kwargs.set_item(
        "critic_encoder_factory",
        encoder_factory(d3rlpy, &config.critic_encoder_factory)?,
    )?;
    kwargs.set_item("target_smoothing_sigma", config.target_smoothing_sigma)?;
    kwargs.set_item("target_smoothing_clip", config.target_smoothing_clip)?;
    kwargs.set_item("update_actor_interval", config.update_actor_interval)?;
    kwargs.set_item("actor_beta", config.actor_beta)?;
    kwargs.set_item("critic_beta", config.critic_beta)?;
    if let Some(scaler) = config.observation_scaler {
        kwargs.set_item("observation_scaler", observation_scaler(d3rlpy, scaler)?)?;
    }
    Ok(kwargs)
}

impl Backend for D3rlpy {
    type Dataset = PyObject;
    type Env = PyObject;
    type Error = D3rlpyError;
}

impl DatasetProvider for D3rlpy {
    fn get_dataset(&mut self, name: &str) -> Result<(PyObject, PyObject), D3rlpyError> {
        tracing::debug!(name, "d3rlpy.datasets.get_dataset");
        Python::with_gil(|py| {
            let d3rlpy = d3rlpy(py)?;
            let version = d3rlpy.getattr("__version__").and_then(|v| v.extract::<String>());
            if let Ok(version) = version {
                tracing::info!(d3rlpy = %version, "using d3rlpy");
            }
            let get_dataset = d3rlpy.getattr("datasets")?.getattr("get_dataset")?;
            let (dataset, env): (PyObject, PyObject) = get_dataset.call1((name,))?.extract()?;
            Ok((dataset, env))
        })
    }
}

impl RandomSeeder for D3rlpy {
    fn seed(&mut self, seed: i64) -> Result<(), D3rlpyError> {
        tracing::debug!(seed, "d3rlpy.seed");
        Python::with_gil(|py| {
            d3rlpy(py)?.getattr("seed")?.call1((seed,))?;
            Ok(())
        })
    }

    fn seed_env(&mut self, env: &PyObject, seed: i64) -> Result<(), D3rlpyError> {
        tracing::debug!(seed, "d3rlpy.envs.seed_env");
        Python::with_gil(|py| {
            d3rlpy(py)?
                .getattr("envs")?
                .getattr("seed_env")?
                .call1((env.bind(py), seed))?;
            Ok(())
        })
    }
}

pub struct D3rlpyAlgo {
    algo: PyObject,
}

impl Trainer for D3rlpy {
    type Algo = D3rlpyAlgo;

    fn create(
        &mut self,
        config: &ReBRACConfig,
        gpu: Option<i32>,
    ) -> Result<D3rlpyAlgo, D3rlpyError> {
        tracing::debug!(?gpu, "d3rlpy.algos.ReBRACConfig.create");
        Python::with_gil(|py| {
            let d3rlpy = d3rlpy(py)?;
            let kwargs = config_kwargs(py, &d3rlpy, config)?;
            let rebrac_config = d3rlpy
                .getattr("algos")?
                .getattr("ReBRACConfig")?
                .call((), Some(&kwargs))?;
            // None lets d3rlpy fall back to its default device
            let create_kwargs = PyDict::new(py);
            create_kwargs.set_item("device", gpu)?;
            let algo = rebrac_config.call_method("create", (), Some(&create_kwargs))?;
            Ok(D3rlpyAlgo { algo: algo.into() })
        })
    }
}

impl Fit<D3rlpy> for D3rlpyAlgo {
    fn fit(
        &mut self,
        dataset: &PyObject,
        env: &PyObject,
        options: &FitOptions,
    ) -> Result<Vec<EpochMetrics>, D3rlpyError> {
        Python::with_gil(|py| {
            let d3rlpy = d3rlpy(py)?;
            let evaluators = PyDict::new(py);
            for (name, kind) in options.evaluators.iter() {
                let evaluator = match kind {
                    EvaluatorKind::Environment => d3rlpy
                        .getattr("metrics")?
                        .getattr("EnvironmentEvaluator")?
                        .call1((env.bind(py),))?,
                };
                evaluators.set_item(name, evaluator)?;
            }
            let kwargs = PyDict::new(py);
            kwargs.set_item("n_steps", options.n_steps)?;
            kwargs.set_item("n_steps_per_epoch", options.n_steps_per_epoch)?;
            kwargs.set_item("save_interval", options.save_interval)?;
            kwargs.set_item("evaluators", evaluators)?;
            kwargs.set_item("experiment_name", &options.experiment_name)?;
            let results = self
                .algo
                .bind(py)
                .call_method("fit", (dataset.bind(py),), Some(&kwargs))?;
            // fit returns [(epoch, {metric: value})]
            let epochs: Vec<(usize, HashMap<String, f64>)> = match results.extract() {
                Ok(epochs) => epochs,
                Err(err) => {
                    let raw = results.repr().map(|r| r.to_string()).unwrap_or_default();
                    // training and checkpointing already happened at this point
                    tracing::warn!(
                        experiment = %options.experiment_name,
                        %raw,
                        "fit finished but its result could not be read"
                    );
                    return Err(D3rlpyError::Metrics {
                        reason: err.to_string(),
                        raw,
                    });
                }
            };
            Ok(epochs
                .into_iter()
                .map(|(epoch, metrics)| EpochMetrics::new(epoch, metrics))
                .collect())
        })
    }
}
