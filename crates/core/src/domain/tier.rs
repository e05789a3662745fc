use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed fortune outcomes. Both generators reduce their
/// inputs to an index in `0..4` and map it through [`Tier::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Excellent, Tier::Good, Tier::Average, Tier::Poor];

    pub fn from_index(index: u64) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub fn index(&self) -> usize {
        match self {
            Tier::Excellent => 0,
            Tier::Good => 1,
            Tier::Average => 2,
            Tier::Poor => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Average => "average",
            Tier::Poor => "poor",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Tier::Excellent => "大吉",
            Tier::Good => "吉",
            Tier::Average => "中吉",
            Tier::Poor => "小吉",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned text for one tier across the four reading categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Narrative {
    pub overall: &'static str,
    pub love: &'static str,
    pub work: &'static str,
    pub health: &'static str,
}
