//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

// Strategy for generating absolute roots
fn root_strategy() -> impl Strategy<Value = String> {
    "/[a-zA-Z0-9_]{0,12}"
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(prop::collection::vec(root_strategy(), 1..4)),
        prop::option::of(prop::sample::select(vec!["quiet", "normal", "verbose"])),
    )
        .prop_map(|(case_sensitive, roots, log_mode)| Config {
            case_sensitive,
            roots,
            log_mode: log_mode.map(str::to_string),
        })
}

proptest! {
    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn merge_set_fields_win(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.case_sensitive, high.case_sensitive.or(low.case_sensitive));
        prop_assert_eq!(merged.roots, high.roots.or(low.roots));
        prop_assert_eq!(merged.log_mode, high.log_mode.or(low.log_mode));
    }

    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn yaml_serialization_preserves_config(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
