//! Waste-sorting mini game: pick an item, drop it into a bin, score on a match.

use serde::Serialize;

pub const ROUND_SECONDS: u32 = 60;
pub const POINTS_PER_MATCH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bin {
    Recycle,
    Reuse,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: &'static str,
    pub bin: Bin,
}

pub const ITEMS: [Item; 8] = [
    Item { id: 1, name: "Plastic Bottle", bin: Bin::Recycle },
    Item { id: 2, name: "Aluminum Can", bin: Bin::Recycle },
    Item { id: 3, name: "Newspaper", bin: Bin::Recycle },
    Item { id: 4, name: "Banana Peel", bin: Bin::Trash },
    Item { id: 5, name: "Glass Jar", bin: Bin::Recycle },
    Item { id: 6, name: "Old Shirt", bin: Bin::Reuse },
    Item { id: 7, name: "Battery", bin: Bin::Recycle },
    Item { id: 8, name: "Food Scraps", bin: Bin::Trash },
];

pub fn item(id: u32) -> Option<Item> {
    ITEMS.iter().copied().find(|item| item.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub item: &'static str,
}

#[derive(Debug, Clone)]
pub struct SortingGame {
    score: u32,
    remaining_seconds: u32,
    active: bool,
    selected: Option<Item>,
}

impl Default for SortingGame {
    fn default() -> Self {
        Self {
            score: 0,
            remaining_seconds: ROUND_SECONDS,
            active: false,
            selected: None,
        }
    }
}

impl SortingGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an idle game; an active game is reset to a fresh idle one.
    /// Starting after the clock ran out begins a fresh round.
    pub fn toggle(&mut self) {
        if self.active {
            *self = Self::default();
        } else {
            if self.remaining_seconds == 0 {
                *self = Self::default();
            }
            self.active = true;
        }
    }

    /// Returns false for an unknown item id.
    pub fn select(&mut self, item_id: u32) -> bool {
        match item(item_id) {
            Some(found) => {
                self.selected = Some(found);
                true
            }
            None => false,
        }
    }

    /// Sorts the selected item into `bin`. Without a selection, or outside a
    /// running round, nothing happens and the selection is kept.
    pub fn drop_into(&mut self, bin: Bin) -> Option<Feedback> {
        if !self.active {
            return None;
        }
        let selected = self.selected.take()?;
        let correct = selected.bin == bin;
        if correct {
            self.score += POINTS_PER_MATCH;
        }
        Some(Feedback {
            correct,
            item: selected.name,
        })
    }

    pub fn tick(&mut self, seconds: u32) {
        if !self.active {
            return;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(seconds);
        if self.remaining_seconds == 0 {
            self.active = false;
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected(&self) -> Option<Item> {
        self.selected
    }
}
