use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use greenify::{
    engine::{Engine, EngineSettings},
    news::{self, Category, Filter},
    readout::readouts,
    scenario::ScenarioLoader,
    simulator::{ElementKind, ImpactSimulator},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Greenify impact simulator and news tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Replay a scenario against the impact simulator
    Simulate {
        /// Path to the scenario YAML file
        #[arg(long, default_value = "scenarios/coastal_restoration.yaml")]
        scenario: PathBuf,

        /// Override snapshot interval in events
        #[arg(long)]
        snapshot_every: Option<u64>,

        /// Directory for snapshots
        #[arg(long)]
        snapshot_dir: Option<PathBuf>,
    },
    /// Classify a saved news search response
    News {
        /// Path to a JSON response from the news search endpoint
        #[arg(long)]
        input: PathBuf,

        /// Only show one category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Upcycling,
    Recycling,
    Community,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Upcycling => Category::Upcycling,
            CategoryArg::Recycling => Category::Recycling,
            CategoryArg::Community => Category::Community,
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn simulate(
    scenario_path: PathBuf,
    snapshot_every: Option<u64>,
    snapshot_dir: Option<PathBuf>,
) -> Result<()> {
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&scenario_path)?;
    init_logging(&scenario.logging.level);

    let events = scenario.events();
    info!(
        "scenario '{}': replaying {} events",
        scenario.name,
        events.len()
    );

    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        snapshot_interval_events: snapshot_every.unwrap_or(scenario.snapshot.every_events),
        snapshot_dir: snapshot_dir.unwrap_or_else(|| scenario.snapshot.output_dir.clone()),
    };
    let mut simulator = ImpactSimulator::new();
    let summary = Engine::new(settings).run(&mut simulator, &events)?;

    let counts = summary.final_state.counts;
    println!(
        "Scenario '{}' completed: {} events ({} applied, {} ignored).",
        scenario.name, summary.steps, summary.applied, summary.ignored
    );
    for kind in ElementKind::ALL {
        println!(
            "{:<10} {:>4}  {}",
            kind.name(),
            counts.get(kind),
            kind.description()
        );
    }
    for readout in readouts(&summary.final_state.gauges) {
        println!(
            "{:<12} {:>8}  ({:.0}% of scale)",
            readout.label, readout.value, readout.fill_percent
        );
    }
    Ok(())
}

fn show_news(input: PathBuf, category: Option<CategoryArg>) -> Result<()> {
    init_logging("info");
    let body = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read news response {}", input.display()))?;
    let articles = news::load_or_fallback(news::process_response(&body));
    let filter = category.map_or(Filter::All, |c| Filter::Only(c.into()));

    for article in news::filter(&articles, filter) {
        let published = article
            .published_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "[{:?}] {} ({}, {})",
            article.category, article.title, article.source, published
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            scenario,
            snapshot_every,
            snapshot_dir,
        } => simulate(scenario, snapshot_every, snapshot_dir),
        Command::News { input, category } => show_news(input, category),
    }
}
