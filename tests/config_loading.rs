use rostergen::config::{AppConfig, ConfigManager};
use rostergen::RosterError;
use std::fs;
use std::path::PathBuf;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rostergen-{}-{}.toml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_file_overrides_only_what_it_names() {
    let path = temp_config(
        "partial",
        r#"
[evolution]
population_size = 60
hall_of_fame_size = 30
seed = 7

[constraints]
period_ceiling = 8

[constraints.soft]
weekend_limit_enabled = true
"#,
    );

    let manager = ConfigManager::new();
    manager.load_from_file(&path).unwrap();
    let config = manager.get();

    assert_eq!(config.evolution.population_size, 60);
    assert_eq!(config.evolution.hall_of_fame_size, 30);
    assert_eq!(config.evolution.seed, Some(7));
    assert_eq!(config.evolution.crossover_rate, 0.9);
    assert_eq!(config.constraints.period_ceiling, 8);
    assert_eq!(config.constraints.period_floor, 5);
    assert!(config.constraints.soft.weekend_limit_enabled);
    assert!(!config.constraints.soft.rest_distance);

    fs::remove_file(path).ok();
}

#[test]
fn test_invalid_file_is_rejected_and_previous_config_kept() {
    let path = temp_config(
        "invalid",
        r#"
[evolution]
population_size = 10
hall_of_fame_size = 20
"#,
    );

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);

    assert!(matches!(result, Err(RosterError::Configuration(_))));
    assert_eq!(manager.get().evolution.population_size, 900);

    fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_an_error() {
    let manager = ConfigManager::new();
    let result = manager.load_from_file(std::env::temp_dir().join("rostergen-does-not-exist.toml"));
    assert!(matches!(result, Err(RosterError::Config(_))));
}

#[test]
fn test_saved_config_loads_back() {
    let path = std::env::temp_dir().join(format!("rostergen-saved-{}.toml", std::process::id()));

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.evolution.generations = 12;
            config.evolution.mutation_rate = 0.25;
            config.constraints.hard_penalty_weight = 500;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let loaded = AppConfig::from_toml_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.evolution.generations, 12);
    assert_eq!(loaded.evolution.mutation_rate, 0.25);
    assert_eq!(loaded.constraints.hard_penalty_weight, 500);

    fs::remove_file(path).ok();
}

#[test]
fn test_failed_update_rolls_back() {
    let manager = ConfigManager::new();
    let result = manager.update(|config| {
        config.constraints.period_floor = 9;
        config.constraints.period_ceiling = 3;
    });

    assert!(result.is_err());
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_environment_overrides_file() {
    let path = temp_config(
        "env",
        r#"
[evolution]
fitness_cache_capacity = 10
"#,
    );
    std::env::set_var("ROSTERGEN__EVOLUTION__FITNESS_CACHE_CAPACITY", "5000");

    let manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    std::env::remove_var("ROSTERGEN__EVOLUTION__FITNESS_CACHE_CAPACITY");

    result.unwrap();
    assert_eq!(manager.get().evolution.fitness_cache_capacity, 5000);

    fs::remove_file(path).ok();
}

#[test]
fn test_toml_string_errors_are_typed() {
    let result = AppConfig::from_toml_str("[evolution]\ncrossover_rate = 2.0\n");
    assert!(matches!(result, Err(RosterError::Configuration(_))));

    let result = AppConfig::from_toml_str("[evolution]\npopulation_size = \"many\"\n");
    assert!(matches!(result, Err(RosterError::Toml(_))));
}
