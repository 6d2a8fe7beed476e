pub use self::{
    attributes::LegacyScoreAttributes,
    bonus::{BonusScoreValues, LazerBonusValues},
    object::{BonusResult, HitObject, LegacyObjectKind, ObjectShape, ScoreEntry},
    rating::{
        legacy_score_multiplier, peppy_stars, BeatmapDifficulty, ObjectCounts, ScoreMultiplier,
    },
    simulation::ScoreSimulation,
    simulator::LegacyScoreSimulator,
};

mod attributes;
mod bonus;
mod object;
mod rating;
mod simulation;
mod simulator;
