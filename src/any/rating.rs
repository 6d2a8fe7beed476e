use rosu_pp::Beatmap;

use super::object::ObjectShape;

/// Difficulty values of a beatmap as relevant for score v1.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BeatmapDifficulty {
    /// Drain rate
    pub hp: f32,
    /// Overall difficulty
    pub od: f32,
    /// Circle size
    pub cs: f32,
}

impl BeatmapDifficulty {
    pub const fn new(hp: f32, od: f32, cs: f32) -> Self {
        Self { hp, od, cs }
    }
}

impl From<&Beatmap> for BeatmapDifficulty {
    fn from(map: &Beatmap) -> Self {
        Self::new(map.hp, map.od, map.cs)
    }
}

/// Object counts of a beatmap's base objects.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCounts {
    pub normal: u32,
    pub sliders: u32,
    pub spinners: u32,
}

impl ObjectCounts {
    /// Count the given base objects by their shape.
    pub fn new<O: ObjectShape>(objects: &[O]) -> Self {
        let mut counts = Self::default();

        for h in objects {
            if h.has_path() {
                counts.sliders += 1;
            } else if h.has_duration() {
                counts.spinners += 1;
            } else {
                counts.normal += 1;
            }
        }

        counts
    }

    pub const fn total(&self) -> u32 {
        self.normal + self.sliders + self.spinners
    }
}

/// Something that scales score.
///
/// Multiple multipliers compose multiplicatively so slices and `Vec`s are
/// their product.
pub trait ScoreMultiplier {
    fn score_multiplier(&self) -> f64;
}

impl ScoreMultiplier for f64 {
    fn score_multiplier(&self) -> f64 {
        *self
    }
}

impl ScoreMultiplier for f32 {
    fn score_multiplier(&self) -> f64 {
        f64::from(*self)
    }
}

impl<T: ScoreMultiplier + ?Sized> ScoreMultiplier for &T {
    fn score_multiplier(&self) -> f64 {
        (**self).score_multiplier()
    }
}

impl<T: ScoreMultiplier> ScoreMultiplier for [T] {
    fn score_multiplier(&self) -> f64 {
        self.iter()
            .fold(1.0, |multiplier, m| multiplier * m.score_multiplier())
    }
}

impl<T: ScoreMultiplier> ScoreMultiplier for Vec<T> {
    fn score_multiplier(&self) -> f64 {
        self.as_slice().score_multiplier()
    }
}

/// osu!stable's coarse star rating that scales combo score.
///
/// The drain rate is expected to be positive. A drain rate of zero is not
/// handled. It makes the density bonus infinite, which is clamped to its
/// maximum, or NaN for zero objects, which propagates into the star value and
/// truncates to zero stars.
pub fn peppy_stars(difficulty: &BeatmapDifficulty, counts: &ObjectCounts) -> i32 {
    let density_bonus = (counts.total() as f32 / difficulty.hp * 8.0).clamp(0.0, 16.0);

    let stars = (difficulty.hp + difficulty.od + difficulty.cs + density_bonus) / 38.0 * 5.0;

    f64::from(stars).round() as i32
}

/// The multiplier for combo score i.e. the peppy stars times the product of
/// all mod multipliers.
pub fn legacy_score_multiplier(
    difficulty: &BeatmapDifficulty,
    counts: &ObjectCounts,
    mod_multiplier: f64,
) -> f64 {
    f64::from(peppy_stars(difficulty, counts)) * mod_multiplier
}
