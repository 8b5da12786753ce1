pub mod engine;
pub mod news;
pub mod readout;
pub mod rng;
pub mod scenario;
pub mod simulator;
pub mod snapshot;
pub mod sorting;

pub use engine::{Engine, EngineSettings, RunSummary, StepReport};
pub use simulator::{ElementCounts, ElementKind, Event, GaugeState, ImpactSimulator};
