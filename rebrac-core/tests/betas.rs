use rebrac_core::{BETA_TABLE, BetaPair, DEFAULT_BETAS, ReBRACConfig, resolve_betas};
use rstest::rstest;

// keys that contain an earlier key and therefore never win on their own
const SHADOWED: [&str; 5] = [
    "halfcheetah-medium-replay",
    "hopper-medium-expert",
    "hopper-medium-replay",
    "walker2d-medium-expert",
    "walker2d-medium-replay",
];

#[test]
fn exact_keys_resolve_to_their_pair() {
    for (key, betas) in BETA_TABLE.iter().filter(|(key, _)| !SHADOWED.contains(key)) {
        assert_eq!(resolve_betas(key), *betas, "key {key}");
    }
}

#[test]
fn shadowed_keys_resolve_to_the_earlier_entry() {
    for key in SHADOWED {
        let first = BETA_TABLE
            .iter()
            .find(|(candidate, _)| key.contains(candidate))
            .unwrap();
        assert_ne!(first.0, key);
        assert_eq!(resolve_betas(key), first.1);
    }
}

#[rstest]
#[case("hopper-medium-v0", BetaPair::new(0.01, 0.001))]
#[case("hopper-medium-replay-v0", BetaPair::new(0.01, 0.001))]
#[case("hopper-medium-expert-v2", BetaPair::new(0.01, 0.001))]
#[case("hopper-expert-v0", BetaPair::new(0.1, 0.001))]
#[case("hopper-full-replay-v2", BetaPair::new(0.01, 0.01))]
#[case("halfcheetah-random-v2", BetaPair::new(0.001, 0.1))]
#[case("halfcheetah-medium-replay-v2", BetaPair::new(0.001, 0.01))]
#[case("walker2d-random-v2", BetaPair::new(0.01, 0.0))]
#[case("walker2d-medium-replay-v2", BetaPair::new(0.05, 0.1))]
#[case("walker2d-expert-v2", BetaPair::new(0.01, 0.5))]
#[case("unknown-env-v0", DEFAULT_BETAS)]
#[case("antmaze-large-diverse-v2", DEFAULT_BETAS)]
fn dataset_versions_resolve(#[case] dataset: &str, #[case] expected: BetaPair) {
    assert_eq!(resolve_betas(dataset), expected);
}

#[test]
fn default_pair_is_one_hundredth() {
    assert_eq!(DEFAULT_BETAS, BetaPair::new(0.01, 0.01));
}

#[rstest]
#[case(BetaPair::new(0.001, 0.1))]
#[case(BetaPair::new(0.1, 0.001))]
#[case(DEFAULT_BETAS)]
fn fixed_fields_do_not_depend_on_betas(#[case] betas: BetaPair) {
    let config = ReBRACConfig::reproduction(betas);
    assert_eq!(config.batch_size, 1024);
    assert_eq!(config.gamma, 0.99);
    assert_eq!(config.target_smoothing_sigma, 0.2);
    assert_eq!(config.target_smoothing_clip, 0.5);
    assert_eq!(config.update_actor_interval, 2);
    assert_eq!(config.actor_learning_rate, 1e-3);
    assert_eq!(config.critic_learning_rate, 1e-1);
    assert_eq!(config.betas(), betas);
}
