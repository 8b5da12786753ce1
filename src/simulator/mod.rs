//! Environmental impact simulator.
//!
//! Element counts and gauges move together through two transitions,
//! add and remove. Removing an element that is not present is a no-op.

mod element;
mod gauge;

use serde::{Deserialize, Serialize};

pub use element::{ElementCounts, ElementEffect, ElementKind, UnknownElement};
pub use gauge::{GaugeState, PERCENT_MAX, PERCENT_MIN, TEMPERATURE_MAX, TEMPERATURE_MIN};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulatorState {
    pub counts: ElementCounts,
    pub gauges: GaugeState,
}

impl SimulatorState {
    pub fn add(mut self, kind: ElementKind) -> Self {
        self.counts.increment(kind);
        self.gauges = self.gauges.with_added(kind.effect());
        self
    }

    pub fn remove(mut self, kind: ElementKind) -> Self {
        if self.counts.decrement(kind) {
            self.gauges = self.gauges.with_removed(kind.effect());
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "kind", rename_all = "snake_case")]
pub enum Event {
    Add(ElementKind),
    Remove(ElementKind),
}

impl Event {
    pub fn kind(self) -> ElementKind {
        match self {
            Event::Add(kind) | Event::Remove(kind) => kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Removal requested while the element count was zero.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ImpactSimulator {
    state: SimulatorState,
}

impl ImpactSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, kind: ElementKind) -> (ElementCounts, GaugeState) {
        self.state = self.state.add(kind);
        (self.state.counts, self.state.gauges)
    }

    pub fn remove_element(&mut self, kind: ElementKind) -> (ElementCounts, GaugeState) {
        self.state = self.state.remove(kind);
        (self.state.counts, self.state.gauges)
    }

    pub fn apply(&mut self, event: Event) -> Outcome {
        match event {
            Event::Add(kind) => {
                self.add_element(kind);
                Outcome::Applied
            }
            Event::Remove(kind) => {
                if self.state.counts.get(kind) == 0 {
                    return Outcome::Ignored;
                }
                self.remove_element(kind);
                Outcome::Applied
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = SimulatorState::default();
    }

    pub fn state(&self) -> SimulatorState {
        self.state
    }

    pub fn counts(&self) -> ElementCounts {
        self.state.counts
    }

    pub fn gauges(&self) -> GaugeState {
        self.state.gauges
    }
}
