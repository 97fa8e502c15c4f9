#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPair {
    pub actor_beta: f64,
    pub critic_beta: f64,
}

impl BetaPair {
    pub const fn new(actor_beta: f64, critic_beta: f64) -> Self {
        Self {
            actor_beta,
            critic_beta,
        }
    }
}

pub const DEFAULT_BETAS: BetaPair = BetaPair::new(0.01, 0.01);

// Regularization coefficients reported in the ReBRAC paper. Keys are matched by substring in this
// order, so a shorter key shadows every longer key that contains it (hopper-medium wins for
// hopper-medium-replay-v0). Do not reorder.
pub const BETA_TABLE: &[(&str, BetaPair)] = &[
    ("halfcheetah-random", BetaPair::new(0.001, 0.1)),
    ("halfcheetah-medium", BetaPair::new(0.001, 0.01)),
    ("halfcheetah-expert", BetaPair::new(0.01, 0.01)),
    ("halfcheetah-medium-replay", BetaPair::new(0.01, 0.001)),
    ("halfcheetah-full-replay", BetaPair::new(0.001, 0.1)),
    ("hopper-random", BetaPair::new(0.001, 0.01)),
    ("hopper-medium", BetaPair::new(0.01, 0.001)),
    ("hopper-expert", BetaPair::new(0.1, 0.001)),
    ("hopper-medium-expert", BetaPair::new(0.1, 0.01)),
    ("hopper-medium-replay", BetaPair::new(0.05, 0.5)),
    ("hopper-full-replay", BetaPair::new(0.01, 0.01)),
    ("walker2d-random", BetaPair::new(0.01, 0.0)),
    ("walker2d-medium", BetaPair::new(0.05, 0.1)),
    ("walker2d-expert", BetaPair::new(0.01, 0.5)),
    ("walker2d-medium-expert", BetaPair::new(0.01, 0.01)),
    ("walker2d-medium-replay", BetaPair::new(0.05, 0.01)),
    ("walker2d-full-replay", BetaPair::new(0.01, 0.01)),
];

/// First table entry whose key is contained in `dataset`, with the key that matched.
pub fn lookup_betas(dataset: &str) -> Option<(&'static str, BetaPair)> {
    BETA_TABLE
        .iter()
        .find(|(key, _)| dataset.contains(key))
        .copied()
}

pub fn resolve_betas(dataset: &str) -> BetaPair {
    lookup_betas(dataset).map_or(DEFAULT_BETAS, |(_, betas)| betas)
}

#[cfg(test)]
mod test {
    use super::{BETA_TABLE, DEFAULT_BETAS, lookup_betas, resolve_betas};

    #[test]
    fn table_keys_are_unique() {
        for (idx, (key, _)) in BETA_TABLE.iter().enumerate() {
            assert!(
                BETA_TABLE[idx + 1..].iter().all(|(other, _)| other != key),
                "duplicate key {key}"
            );
        }
    }

    #[test]
    fn lookup_reports_matched_key() {
        let (key, _) = lookup_betas("walker2d-random-v2").unwrap();
        assert_eq!(key, "walker2d-random");
        assert!(lookup_betas("antmaze-umaze-v0").is_none());
    }

    #[test]
    fn empty_dataset_falls_back() {
        assert_eq!(resolve_betas(""), DEFAULT_BETAS);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(resolve_betas("Hopper-Expert-v0"), DEFAULT_BETAS);
    }
}
