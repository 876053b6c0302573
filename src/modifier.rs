//! Optional "London twist" appended to a result.
use rand::Rng;

pub const DEFAULT_TWIST_CHANCE: f64 = 0.3;

pub const TWISTS: &[&str] = &[
    "End with a flat white.",
    "Do it rain or shine.",
    "Avoid Oxford Circus at all costs.",
    "Take the scenic route.",
    "Bring a brolly just in case.",
    "Snap a photo for the story.",
    "Stop for pasties if it gets chilly.",
    "Mind the gap.",
    "Enjoy the city's quiet corners.",
    "London's best kept secret.",
];

/// With probability `chance`, a uniformly chosen twist.
pub fn maybe_modify<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> Option<&'static str> {
    if rng.gen_range(0.0..1.0) < chance {
        Some(TWISTS[rng.gen_range(0..TWISTS.len())])
    } else {
        None
    }
}
