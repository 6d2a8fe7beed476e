use super::object::BonusResult;

/// Numeric value of lazer's bonus judgements.
///
/// Bonus judgements are valued differently in lazer than in osu!stable. The
/// ratio between both is part of the simulation's result so the values are
/// provided from the outside.
///
/// Implemented for [`LazerBonusValues`] and any `Fn(BonusResult) -> i32`.
pub trait BonusScoreValues {
    fn numeric_value(&self, result: BonusResult) -> i32;
}

/// Bonus values of lazer's score processor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LazerBonusValues;

impl LazerBonusValues {
    pub const SMALL_BONUS: i32 = 10;
    pub const LARGE_BONUS: i32 = 50;
}

impl BonusScoreValues for LazerBonusValues {
    fn numeric_value(&self, result: BonusResult) -> i32 {
        match result {
            BonusResult::Small => Self::SMALL_BONUS,
            BonusResult::Large => Self::LARGE_BONUS,
        }
    }
}

impl<F: Fn(BonusResult) -> i32> BonusScoreValues for F {
    fn numeric_value(&self, result: BonusResult) -> i32 {
        self(result)
    }
}
