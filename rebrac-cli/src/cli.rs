use clap::Parser;
use rebrac_core::{
    Experiment,
    experiment::{DEFAULT_DATASET, DEFAULT_SEED},
};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Train ReBRAC on a D4RL dataset with d3rlpy")]
pub struct Args {
    /// Dataset name, e.g. hopper-medium-v0
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: String,

    /// Random seed for d3rlpy and the evaluation environment
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// GPU index. Omit to use d3rlpy's default device
    #[arg(long, allow_negative_numbers = true)]
    pub gpu: Option<i32>,
}

impl From<Args> for Experiment {
    fn from(args: Args) -> Self {
        Experiment {
            dataset: args.dataset,
            seed: args.seed,
            gpu: args.gpu,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;
    use rebrac_core::Experiment;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rebrac"]).unwrap();
        assert_eq!(args.dataset, "hopper-medium-v0");
        assert_eq!(args.seed, 1);
        assert_eq!(args.gpu, None);
        assert_eq!(Experiment::from(args), Experiment::default());
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "rebrac",
            "--dataset",
            "walker2d-medium-replay-v2",
            "--seed",
            "10",
            "--gpu",
            "0",
        ])
        .unwrap();
        let experiment = Experiment::from(args);
        assert_eq!(experiment.dataset, "walker2d-medium-replay-v2");
        assert_eq!(experiment.seed, 10);
        assert_eq!(experiment.gpu, Some(0));
    }

    #[test]
    fn non_integer_seed_is_rejected() {
        assert!(Args::try_parse_from(["rebrac", "--seed", "one"]).is_err());
        assert!(Args::try_parse_from(["rebrac", "--gpu", "cuda:0"]).is_err());
    }

    #[test]
    fn negative_seed_is_accepted() {
        let args = Args::try_parse_from(["rebrac", "--seed", "-5"]).unwrap();
        assert_eq!(args.seed, -5);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["rebrac", "--env", "hopper"]).is_err());
    }
}
