use std::fmt::Debug;

use rosu_map::section::general::GameMode;

use super::{bonus::BonusScoreValues, simulation::ScoreSimulation};

/// A hit object of a playable beatmap.
///
/// Nested objects such as slider ticks or droplets are owned by their parent.
/// Their order is the order in which they are judged.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject<K> {
    pub kind: K,
    pub nested: Vec<HitObject<K>>,
}

impl<K> HitObject<K> {
    /// Create a hit object without nested objects.
    pub const fn new(kind: K) -> Self {
        Self {
            kind,
            nested: Vec::new(),
        }
    }

    /// Create a hit object with the given nested objects.
    pub const fn with_nested(kind: K, nested: Vec<Self>) -> Self {
        Self { kind, nested }
    }
}

/// The judgement of a single object under score v1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Score v1 value of the judgement.
    pub score: i32,
    /// Whether the judgement increases the combo.
    pub increase_combo: bool,
    /// Whether the judgement is awarded additional combo score.
    pub combo_multiplier: bool,
    /// The bonus result if the judgement counts towards bonus score instead
    /// of accuracy score.
    pub bonus: Option<BonusResult>,
}

impl ScoreEntry {
    pub const fn new(
        score: i32,
        increase_combo: bool,
        combo_multiplier: bool,
        bonus: Option<BonusResult>,
    ) -> Self {
        Self {
            score,
            increase_combo,
            combo_multiplier,
            bonus,
        }
    }
}

/// Bonus judgements of lazer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BonusResult {
    Small,
    Large,
}

/// The object kinds of a mode.
///
/// Implementors act as the score v1 table of their mode.
pub trait LegacyObjectKind: Copy + Debug {
    /// The mode whose osu!stable mod multipliers apply.
    const MODE: GameMode;

    /// Whether a beatmap of the given mode can be simulated with this kind.
    fn accepts_mode(mode: GameMode) -> bool;

    /// The judgement of this kind or `None` if the kind is not judged by
    /// itself.
    fn score_entry(self) -> Option<ScoreEntry>;

    /// Whether the kind follows a path like a slider does.
    fn has_path(self) -> bool;

    /// Duration in milliseconds of kinds that are held instead of hit.
    fn duration(self) -> Option<f64>;

    /// Simulate everything that is judged before the object itself.
    ///
    /// Defaults to simulating the nested objects in order.
    fn simulate_nested<B>(h: &HitObject<Self>, sim: &mut ScoreSimulation<'_, B>)
    where
        B: BonusScoreValues + ?Sized,
    {
        for nested in h.nested.iter() {
            sim.simulate_hit(nested);
        }
    }
}

/// Structural category of a base object.
pub trait ObjectShape {
    /// Whether the object has a path.
    fn has_path(&self) -> bool;

    /// Whether the object has a duration.
    fn has_duration(&self) -> bool;
}

impl<K: LegacyObjectKind> ObjectShape for HitObject<K> {
    fn has_path(&self) -> bool {
        self.kind.has_path()
    }

    fn has_duration(&self) -> bool {
        self.kind.duration().is_some()
    }
}

impl ObjectShape for rosu_pp::model::hit_object::HitObject {
    fn has_path(&self) -> bool {
        self.is_slider()
    }

    fn has_duration(&self) -> bool {
        self.is_spinner() || self.is_hold_note()
    }
}
