use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use rostergen::config::{AppConfig, ConfigManager};
use rostergen::data::{JsonConnector, ScheduleRequest};
use rostergen::engines::evaluation::{ConstraintModel, ScheduleReport};
use rostergen::engines::generation::{GeneticSearch, LogProgressCallback, SearchOutcome};
use rostergen::export::{ExportedSchedule, SolutionExporter};
use serde::Serialize;
use std::{fs, path::PathBuf, sync::Arc};

fn cli() -> Command {
    Command::new("rostergen")
        .about("Builds monthly doctor shift rosters by genetic search")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Searches for the cheapest roster for a clinic request")
                .arg(
                    arg!(<REQUEST> "Path to the clinic request json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--config [CONFIG] "Path to a toml configuration file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--seed [SEED] "Overrides the configured random seed")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--generations [GENERATIONS] "Overrides the configured generation budget")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--parallel [PARALLEL] "Evaluate fitness on all cores")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--"log-every" [LOG_EVERY] "Log a progress line every N generations")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the result json is written to this path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("score")
                .about("Scores a roster genome against a clinic request")
                .arg(
                    arg!(<REQUEST> "Path to the clinic request json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<GENOME> "Genome as a string of 0/1 characters, doctor-major")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Path to a toml configuration file")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

#[derive(Serialize)]
struct SolveOutput {
    outcome: SearchOutcome,
    schedule: ExportedSchedule,
}

/// `RUST_LOG` when set, `info` otherwise
fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
}

fn main() {
    logger_builder().init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(sub_m),
        Some(("score", sub_m)) => score(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(matches: &'a ArgMatches, name: &str) -> Result<&'a T> {
    matches
        .get_one::<T>(name)
        .ok_or_else(|| anyhow!("Missing argument {}", name))
}

fn load_config(config_path: Option<&PathBuf>) -> Result<ConfigManager> {
    let manager = ConfigManager::new();
    match config_path {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => manager
            .load_from_env()
            .context("Failed to read configuration from the environment")?,
    }
    Ok(manager)
}

fn load_request(path: &PathBuf) -> Result<Arc<ScheduleRequest>> {
    let request = JsonConnector::load_request(path)
        .with_context(|| format!("Failed to load request {}", path.display()))?;
    Ok(Arc::new(request))
}

fn solve(matches: &ArgMatches) -> Result<()> {
    let request = load_request(required::<PathBuf>(matches, "REQUEST")?)?;
    let manager = load_config(matches.get_one::<PathBuf>("config"))?;

    let seed = matches.get_one::<u64>("seed").copied();
    let generations = matches.get_one::<usize>("generations").copied();
    let parallel = matches.get_flag("parallel");
    manager.update(|config: &mut AppConfig| {
        if seed.is_some() {
            config.evolution.seed = seed;
        }
        if let Some(generations) = generations {
            config.evolution.generations = generations;
        }
        if parallel {
            config.evolution.parallel_evaluation = true;
        }
    })?;

    let config = manager.get();
    let mut search = GeneticSearch::from_app_config(request.clone(), &config)?;
    let progress = LogProgressCallback::new(*required::<usize>(matches, "log-every")?);
    let outcome = search.run(progress)?;
    let schedule = SolutionExporter::export(&request, &outcome.best_genome)?;

    write_json(&SolveOutput { outcome, schedule }, matches.get_one::<PathBuf>("output"))
}

fn score(matches: &ArgMatches) -> Result<()> {
    let request = load_request(required::<PathBuf>(matches, "REQUEST")?)?;
    let manager = load_config(matches.get_one::<PathBuf>("config"))?;

    let genome = required::<String>(matches, "GENOME")?
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(0u8),
            '1' => Ok(1u8),
            other => Err(anyhow!("Genome may only contain 0 and 1, found '{}'", other)),
        })
        .collect::<Result<Vec<u8>>>()?;

    let model = ConstraintModel::new(request, manager.get().constraints);
    model.validate()?;
    let report: ScheduleReport = model.report(&genome)?;
    write_json(&report, None)
}

fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Result written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_logs_at_info_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(logger_builder().build().filter(), log::LevelFilter::Info);
    }
}
