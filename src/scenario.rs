use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    rng::RngManager,
    simulator::{ElementKind, Event},
};

fn default_count() -> u32 {
    1
}

fn default_remove_ratio() -> f64 {
    0.5
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A scripted simulator session read from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub snapshot: SnapshotSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotSettings {
    /// Write a snapshot every N events; 0 disables snapshots.
    #[serde(default)]
    pub every_events: u64,
    #[serde(default = "default_snapshot_dir")]
    pub output_dir: PathBuf,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            every_events: 0,
            output_dir: default_snapshot_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Add {
        kind: ElementKind,
        #[serde(default = "default_count")]
        count: u32,
    },
    Remove {
        kind: ElementKind,
        #[serde(default = "default_count")]
        count: u32,
    },
    /// A burst of seeded random add/remove events.
    Random {
        count: u32,
        #[serde(default = "default_remove_ratio")]
        remove_ratio: f64,
    },
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario = Scenario::from_yaml(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("scenario validation error: {0}")]
    Validation(String),
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioError::Validation(
                "scenario must define a name".to_string(),
            ));
        }
        for (index, step) in self.steps.iter().enumerate() {
            if let Step::Random { remove_ratio, .. } = step {
                if !(0.0..=1.0).contains(remove_ratio) {
                    return Err(ScenarioError::Validation(format!(
                        "step {index}: remove_ratio {remove_ratio} outside [0, 1]"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Flattens the steps into the concrete event sequence. Random bursts
    /// draw from a stream named after their position, so the result depends
    /// only on the seed and the step list.
    pub fn events(&self) -> Vec<Event> {
        let mut rng = RngManager::new(self.seed);
        let mut events = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            match *step {
                Step::Add { kind, count } => {
                    events.extend((0..count).map(|_| Event::Add(kind)));
                }
                Step::Remove { kind, count } => {
                    events.extend((0..count).map(|_| Event::Remove(kind)));
                }
                Step::Random {
                    count,
                    remove_ratio,
                } => {
                    let mut stream = rng.stream(&format!("step_{index}"));
                    events.extend((0..count).map(|_| stream.event(remove_ratio)));
                }
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name: sample
seed: 9
steps:
  - action: add
    kind: tree
    count: 2
  - action: remove
    kind: wetland
  - action: random
    count: 5
"#;

    #[test]
    fn defaults_apply() {
        let scenario = Scenario::from_yaml(SAMPLE).unwrap();
        assert_eq!(scenario.snapshot.every_events, 0);
        assert_eq!(scenario.snapshot.output_dir, PathBuf::from("snapshots"));
        assert_eq!(scenario.logging.level, "info");
        assert_eq!(
            scenario.steps[1],
            Step::Remove {
                kind: ElementKind::Wetland,
                count: 1
            }
        );
    }

    #[test]
    fn expands_counts_and_bursts() {
        let scenario = Scenario::from_yaml(SAMPLE).unwrap();
        let events = scenario.events();
        assert_eq!(events.len(), 8);
        assert_eq!(&events[..3], &[
            Event::Add(ElementKind::Tree),
            Event::Add(ElementKind::Tree),
            Event::Remove(ElementKind::Wetland),
        ]);
        assert_eq!(events, scenario.events());
    }

    #[test]
    fn rejects_bad_remove_ratio() {
        let text = "name: bad\nsteps:\n  - action: random\n    count: 3\n    remove_ratio: 1.5\n";
        let err = Scenario::from_yaml(text).unwrap_err();
        assert!(matches!(err, ScenarioError::Validation(_)));
    }

    #[test]
    fn rejects_unknown_element() {
        let text = "name: bad\nsteps:\n  - action: add\n    kind: cactus\n";
        assert!(matches!(
            Scenario::from_yaml(text),
            Err(ScenarioError::Parse(_))
        ));
    }
}
