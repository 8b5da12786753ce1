use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Natural-infrastructure unit that can be placed on the simulation canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Tree,
    Wetland,
    Mangrove,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [ElementKind::Tree, ElementKind::Wetland, ElementKind::Mangrove];

    pub fn effect(self) -> ElementEffect {
        match self {
            ElementKind::Tree => ElementEffect {
                temperature: -2.0,
                flood_risk: -3.0,
                air_quality: 5.0,
            },
            ElementKind::Wetland => ElementEffect {
                temperature: -1.0,
                flood_risk: -8.0,
                air_quality: 3.0,
            },
            ElementKind::Mangrove => ElementEffect {
                temperature: -1.5,
                flood_risk: -10.0,
                air_quality: 4.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Tree => "Trees",
            ElementKind::Wetland => "Wetlands",
            ElementKind::Mangrove => "Mangroves",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ElementKind::Tree => "Trees reduce temperature through shade and evapotranspiration",
            ElementKind::Wetland => "Wetlands absorb floodwaters and filter pollutants",
            ElementKind::Mangrove => "Mangroves protect coastlines and sequester carbon",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ElementKind::Tree => "tree",
            ElementKind::Wetland => "wetland",
            ElementKind::Mangrove => "mangrove",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element kind '{0}' (expected tree, wetland or mangrove)")]
pub struct UnknownElement(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElement;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" | "trees" => Ok(ElementKind::Tree),
            "wetland" | "wetlands" => Ok(ElementKind::Wetland),
            "mangrove" | "mangroves" => Ok(ElementKind::Mangrove),
            _ => Err(UnknownElement(value.to_string())),
        }
    }
}

/// Gauge deltas applied when one element is added. Removal applies the negation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementEffect {
    pub temperature: f64,
    pub flood_risk: f64,
    pub air_quality: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub trees: u32,
    pub wetlands: u32,
    pub mangroves: u32,
}

impl ElementCounts {
    pub fn get(&self, kind: ElementKind) -> u32 {
        match kind {
            ElementKind::Tree => self.trees,
            ElementKind::Wetland => self.wetlands,
            ElementKind::Mangrove => self.mangroves,
        }
    }

    fn slot_mut(&mut self, kind: ElementKind) -> &mut u32 {
        match kind {
            ElementKind::Tree => &mut self.trees,
            ElementKind::Wetland => &mut self.wetlands,
            ElementKind::Mangrove => &mut self.mangroves,
        }
    }

    pub(crate) fn increment(&mut self, kind: ElementKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    /// Returns false and leaves the count untouched when it is already zero.
    pub(crate) fn decrement(&mut self, kind: ElementKind) -> bool {
        let slot = self.slot_mut(kind);
        match slot.checked_sub(1) {
            Some(next) => {
                *slot = next;
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> u64 {
        ElementKind::ALL
            .iter()
            .map(|kind| self.get(*kind) as u64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singular_and_plural_names() {
        assert_eq!("tree".parse::<ElementKind>().unwrap(), ElementKind::Tree);
        assert_eq!("Wetlands".parse::<ElementKind>().unwrap(), ElementKind::Wetland);
        assert_eq!(" mangroves ".parse::<ElementKind>().unwrap(), ElementKind::Mangrove);
        assert!("cactus".parse::<ElementKind>().is_err());
    }

    #[test]
    fn every_kind_has_a_label_and_blurb() {
        let names: Vec<_> = ElementKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names, ["Trees", "Wetlands", "Mangroves"]);
        assert!(ElementKind::Wetland.description().contains("floodwaters"));
        assert!(ElementKind::ALL.iter().all(|kind| !kind.description().is_empty()));
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut counts = ElementCounts::default();
        assert!(!counts.decrement(ElementKind::Wetland));
        counts.increment(ElementKind::Wetland);
        assert!(counts.decrement(ElementKind::Wetland));
        assert_eq!(counts.wetlands, 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn total_sums_every_kind() {
        let counts = ElementCounts {
            trees: 2,
            wetlands: 1,
            mangroves: 4,
        };
        assert_eq!(counts.total(), 7);
        assert!(!counts.is_empty());
    }
}
