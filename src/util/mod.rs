pub mod math;
pub mod mods;
