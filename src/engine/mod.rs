use std::path::PathBuf;

use anyhow::Result;
use log::{debug, info};

use crate::{
    simulator::{Event, ImpactSimulator, Outcome, SimulatorState},
    snapshot::SnapshotWriter,
};

pub struct EngineSettings {
    pub scenario_name: String,
    pub snapshot_interval_events: u64,
    pub snapshot_dir: PathBuf,
}

/// What happened on one replayed event.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: u64,
    pub event: Event,
    pub outcome: Outcome,
    pub state: SimulatorState,
    pub snapshot_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub applied: u64,
    pub ignored: u64,
    pub final_state: SimulatorState,
}

pub struct Engine {
    settings: EngineSettings,
    snapshot_writer: SnapshotWriter,
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            snapshot_writer: SnapshotWriter::new(
                &settings.snapshot_dir,
                settings.snapshot_interval_events,
            ),
            settings,
        }
    }

    pub fn run(&mut self, simulator: &mut ImpactSimulator, events: &[Event]) -> Result<RunSummary> {
        self.run_with_hook(simulator, events, |_| {})
    }

    pub fn run_with_hook<F>(
        &mut self,
        simulator: &mut ImpactSimulator,
        events: &[Event],
        mut hook: F,
    ) -> Result<RunSummary>
    where
        F: FnMut(&StepReport),
    {
        let scenario = self.settings.scenario_name.as_str();
        let mut applied = 0;
        let mut ignored = 0;
        for (index, &event) in events.iter().enumerate() {
            let step = index as u64 + 1;
            let outcome = simulator.apply(event);
            match outcome {
                Outcome::Applied => applied += 1,
                Outcome::Ignored => {
                    ignored += 1;
                    debug!("step {step}: no {} to remove, ignoring", event.kind());
                }
            }
            let state = simulator.state();
            let snapshot_path = self.snapshot_writer.maybe_write(step, scenario, &state)?;
            if let Some(path) = &snapshot_path {
                info!("wrote snapshot {}", path.display());
            }
            hook(&StepReport {
                step,
                event,
                outcome,
                state,
                snapshot_path,
            });
        }

        Ok(RunSummary {
            steps: events.len() as u64,
            applied,
            ignored,
            final_state: simulator.state(),
        })
    }
}
