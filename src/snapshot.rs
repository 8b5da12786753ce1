use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::readout::{readouts, GaugeReadout};
use crate::simulator::SimulatorState;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct SnapshotDocument<'a> {
    pub scenario: &'a str,
    pub step: u64,
    pub written_at: DateTime<Utc>,
    pub state: SimulatorState,
    pub readouts: [GaugeReadout; 3],
}

/// Writes `<dir>/<scenario>/step_NNNNNN.json` every `interval` steps.
pub struct SnapshotWriter {
    output_dir: PathBuf,
    interval: u64,
}

impl SnapshotWriter {
    pub fn new(output_dir: impl AsRef<Path>, interval: u64) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            interval,
        }
    }

    pub fn maybe_write(
        &self,
        step: u64,
        scenario_name: &str,
        state: &SimulatorState,
    ) -> Result<Option<PathBuf>, SnapshotError> {
        if self.interval == 0 || step == 0 || step % self.interval != 0 {
            return Ok(None);
        }
        self.write(step, scenario_name, state).map(Some)
    }

    pub fn write(
        &self,
        step: u64,
        scenario_name: &str,
        state: &SimulatorState,
    ) -> Result<PathBuf, SnapshotError> {
        let dir = self.output_dir.join(scenario_name);
        fs::create_dir_all(&dir)?;
        let file_path = dir.join(format!("step_{step:06}.json"));
        let document = SnapshotDocument {
            scenario: scenario_name,
            step,
            written_at: Utc::now(),
            state: *state,
            readouts: readouts(&state.gauges),
        };
        fs::write(&file_path, serde_json::to_string_pretty(&document)?)?;
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::ElementKind;

    #[test]
    fn writes_only_on_interval() {
        let temp = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(temp.path(), 3);
        let state = SimulatorState::default().add(ElementKind::Tree);

        assert!(writer.maybe_write(0, "coast", &state).unwrap().is_none());
        assert!(writer.maybe_write(2, "coast", &state).unwrap().is_none());
        let path = writer.maybe_write(3, "coast", &state).unwrap().unwrap();
        assert_eq!(path, temp.path().join("coast").join("step_000003.json"));

        let data = fs::read_to_string(path).unwrap();
        assert!(data.contains("\"scenario\": \"coast\""));
        assert!(data.contains("\"trees\": 1"));
    }

    #[test]
    fn zero_interval_disables_writes() {
        let temp = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(temp.path(), 0);
        let state = SimulatorState::default();
        assert!(writer.maybe_write(10, "coast", &state).unwrap().is_none());
    }
}
