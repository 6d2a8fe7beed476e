use rosu_map::section::general::GameMode;

use crate::any::{
    BonusResult, HitObject, LazerBonusValues, LegacyObjectKind, LegacyScoreSimulator, ScoreEntry,
};

/// Score v1 simulator for osu!catch.
///
/// osu!standard maps are accepted as converts.
pub type CatchLegacyScoreSimulator<B = LazerBonusValues> = LegacyScoreSimulator<CatchObjectKind, B>;

/// An osu!catch object of a playable beatmap.
pub type CatchHitObject = HitObject<CatchObjectKind>;

/// Kinds of osu!catch objects.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CatchObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
    Banana,
    JuiceStream,
    /// Duration in milliseconds.
    BananaShower {
        duration: f64,
    },
}

impl LegacyObjectKind for CatchObjectKind {
    const MODE: GameMode = GameMode::Catch;

    fn accepts_mode(mode: GameMode) -> bool {
        matches!(mode, GameMode::Osu | GameMode::Catch)
    }

    fn score_entry(self) -> Option<ScoreEntry> {
        match self {
            Self::Fruit => Some(ScoreEntry::new(300, true, true, None)),
            Self::Droplet => Some(ScoreEntry::new(100, true, false, None)),
            Self::TinyDroplet => Some(ScoreEntry::new(10, false, false, None)),
            Self::Banana => Some(ScoreEntry::new(1100, false, false, Some(BonusResult::Large))),
            // Only scored through their nested objects
            Self::JuiceStream | Self::BananaShower { .. } => None,
        }
    }

    fn has_path(self) -> bool {
        matches!(self, Self::JuiceStream)
    }

    fn duration(self) -> Option<f64> {
        match self {
            Self::BananaShower { duration } => Some(duration),
            _ => None,
        }
    }
}

impl CatchHitObject {
    pub const fn fruit() -> Self {
        Self::new(CatchObjectKind::Fruit)
    }

    pub const fn droplet() -> Self {
        Self::new(CatchObjectKind::Droplet)
    }

    pub const fn tiny_droplet() -> Self {
        Self::new(CatchObjectKind::TinyDroplet)
    }

    pub const fn banana() -> Self {
        Self::new(CatchObjectKind::Banana)
    }

    /// A juice stream whose nested objects are its fruits, droplets, and tiny
    /// droplets.
    pub const fn juice_stream(nested: Vec<Self>) -> Self {
        Self::with_nested(CatchObjectKind::JuiceStream, nested)
    }

    /// A banana shower with the given duration in milliseconds.
    pub const fn banana_shower(duration: f64, bananas: Vec<Self>) -> Self {
        Self::with_nested(CatchObjectKind::BananaShower { duration }, bananas)
    }
}
