use std::collections::HashMap;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::simulator::{ElementKind, Event};

/// Hands out one reproducible ChaCha8 stream per name, all derived from a
/// single master seed.
pub struct RngManager {
    master: ChaCha8Rng,
    streams: HashMap<String, ChaCha8Rng>,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self {
            master: ChaCha8Rng::seed_from_u64(seed),
            streams: HashMap::new(),
        }
    }

    pub fn stream(&mut self, name: &str) -> EventRng<'_> {
        let entry = self.streams.entry(name.to_string()).or_insert_with(|| {
            let derived = self.master.next_u64();
            ChaCha8Rng::seed_from_u64(derived)
        });
        EventRng { inner: entry }
    }
}

pub struct EventRng<'a> {
    inner: &'a mut ChaCha8Rng,
}

impl EventRng<'_> {
    pub fn element(&mut self) -> ElementKind {
        ElementKind::ALL[self.inner.gen_range(0..ElementKind::ALL.len())]
    }

    /// Draws a removal with probability `remove_ratio`, otherwise an addition.
    pub fn event(&mut self, remove_ratio: f64) -> Event {
        let kind = self.element();
        if self.inner.gen_bool(remove_ratio.clamp(0.0, 1.0)) {
            Event::Remove(kind)
        } else {
            Event::Add(kind)
        }
    }
}
