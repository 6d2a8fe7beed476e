//! Simulation of osu!stable's legacy scoring (score v1).
//!
//! Given the objects of a beatmap, its difficulty values, and the active mods,
//! the simulators replay a full-combo play through the frozen score v1
//! judgement model and return the amount of score that stable would have
//! awarded, split into an accuracy and a combo portion, as well as the ratio
//! between lazer's and stable's bonus score.
//!
//! Quirks of stable are reproduced, notably the truncating combo
//! multiplier and the spinner rotation requirements which differ from lazer's
//! spinner model.
//!
//! ## Usage
//!
//! ```
//! use rosu_legacy_score::{
//!     osu::{OsuHitObject, OsuLegacyScoreSimulator},
//!     BeatmapDifficulty,
//! };
//!
//! let playable = vec![
//!     OsuHitObject::circle(),
//!     OsuHitObject::slider(vec![
//!         OsuHitObject::slider_head(),
//!         OsuHitObject::slider_tick(),
//!         OsuHitObject::slider_tail(),
//!     ]),
//!     OsuHitObject::spinner(2000.0),
//! ];
//!
//! let difficulty = BeatmapDifficulty::new(5.0, 5.0, 4.0);
//!
//! let attrs = OsuLegacyScoreSimulator::new()
//!     .mods(8_u32 + 16) // HDHR
//!     .simulate(&playable, difficulty, &playable);
//!
//! println!(
//!     "Accuracy: {} | Combo: {} | Bonus ratio: {}",
//!     attrs.accuracy_score, attrs.combo_score, attrs.bonus_score_ratio
//! );
//! ```
//!
//! Base objects are only classified by their shape so any type implementing
//! [`ObjectShape`] can be passed, e.g. the hit objects of a parsed
//! [`rosu_pp::Beatmap`]. [`LegacyScoreSimulator::simulate_map`] reads them
//! directly from the map.

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

#[doc(inline)]
pub use self::{
    any::{
        legacy_score_multiplier, peppy_stars, BeatmapDifficulty, BonusResult, BonusScoreValues,
        HitObject, LazerBonusValues, LegacyObjectKind, LegacyScoreAttributes,
        LegacyScoreSimulator, ObjectCounts, ObjectShape, ScoreEntry, ScoreMultiplier,
        ScoreSimulation,
    },
    error::LegacyScoreError,
    util::mods::Mods,
};

/// Types shared by all modes.
pub mod any;

/// Legacy score simulation for osu!standard.
pub mod osu;

/// Legacy score simulation for osu!catch.
pub mod catch;

mod error;
mod util;
