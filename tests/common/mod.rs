#![allow(unused)]

use rosu_legacy_score::{catch::CatchHitObject, osu::OsuHitObject};

/// Path to a small osu!standard map with two circles, a slider, and a spinner
pub const OSU: &str = "./resources/legacy.osu";

/// Bit values for mods
pub mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
    pub const FL: u32 = 1 << 10;
}

pub fn circles(n: usize) -> Vec<OsuHitObject> {
    vec![OsuHitObject::circle(); n]
}

/// A slider with a head, `ticks` ticks per span, and a tail.
pub fn slider(ticks: usize, repeats: usize) -> OsuHitObject {
    let mut nested = vec![OsuHitObject::slider_head()];

    for _ in 0..repeats {
        nested.extend(std::iter::repeat(OsuHitObject::slider_tick()).take(ticks));
        nested.push(OsuHitObject::slider_repeat());
    }

    nested.extend(std::iter::repeat(OsuHitObject::slider_tick()).take(ticks));
    nested.push(OsuHitObject::slider_tail());

    OsuHitObject::slider(nested)
}

/// A juice stream of fruits with `droplets` droplets in between, each
/// preceded by `tiny` tiny droplets.
pub fn juice_stream(droplets: usize, tiny: usize) -> CatchHitObject {
    let mut nested = vec![CatchHitObject::fruit()];

    for _ in 0..droplets {
        nested.extend(std::iter::repeat(CatchHitObject::tiny_droplet()).take(tiny));
        nested.push(CatchHitObject::droplet());
    }

    nested.extend(std::iter::repeat(CatchHitObject::tiny_droplet()).take(tiny));
    nested.push(CatchHitObject::fruit());

    CatchHitObject::juice_stream(nested)
}

/// Combo score of `n` objects that are each worth 300 and are awarded the
/// combo multiplier.
pub const fn full_combo_score(n: i64, stars: i64) -> i64 {
    if n < 2 {
        return 0;
    }

    12 * stars * (n - 1) * (n - 2) / 2
}

#[track_caller]
pub fn assert_eq_float<F: Float>(a: F, b: F) {
    assert!((a - b).abs() < F::EPSILON, "{a} != {b}")
}

/// Trait to provide flexibility in the `assert_eq_float` function.
pub trait Float:
    Copy + std::fmt::Display + std::ops::Sub<Output = Self> + PartialOrd + Sized
{
    const EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! impl_float {
    ( $( $ty:ty )* ) => {
        $(
            impl Float for $ty {
                const EPSILON: Self = Self::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }
            }
        )*
    }
}

impl_float!(f32 f64);
