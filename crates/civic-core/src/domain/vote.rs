use serde::{Deserialize, Serialize};

pub const WARM_HOTNESS: u64 = 5_000;
pub const HOT_HOTNESS: u64 = 10_000;
pub const VERY_HOT_HOTNESS: u64 = 15_000;

/// Counters and per-user flags shown by the voting widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteData {
    pub votes: u64,
    pub supports_count: u64,
    pub hotness: u64,
    pub has_voted: bool,
    pub has_supported: bool,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hotness {
    Cool,
    Warm,
    Hot,
    VeryHot,
}

impl Hotness {
    pub fn of(hotness: u64) -> Self {
        if hotness >= VERY_HOT_HOTNESS {
            Hotness::VeryHot
        } else if hotness >= HOT_HOTNESS {
            Hotness::Hot
        } else if hotness >= WARM_HOTNESS {
            Hotness::Warm
        } else {
            Hotness::Cool
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hotness::Cool => "cool",
            Hotness::Warm => "warm",
            Hotness::Hot => "hot",
            Hotness::VeryHot => "very-hot",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Hotness::Cool => "Activa",
            Hotness::Warm => "Popular",
            Hotness::Hot => "Candente",
            Hotness::VeryHot => "Muy Candente",
        }
    }
}
