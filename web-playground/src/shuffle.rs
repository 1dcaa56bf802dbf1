//! Shuffle - random transform chains for the stage
//!
//! Each step is drawn from a small vocabulary so the card stays on stage.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use swerve::{Arg, TransformFn};

/// One queued transform call
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub function: TransformFn,
    pub args: Vec<Arg>,
}

const OFFSETS: &[f64] = &[-120.0, -80.0, -40.0, 0.0, 40.0, 80.0, 120.0];
const ANGLES: &[f64] = &[-90.0, -45.0, -15.0, 15.0, 45.0, 90.0, 180.0];
const SCALES: &[f64] = &[0.5, 0.75, 1.25, 1.5];
const TIMINGS: &[&str] = &["linear", "ease", "ease-in-out", "cubic-bezier(.5,-0.5,.5,1.5)"];
const DURATIONS: &[&str] = &[".3s", ".6s", "1s"];

/// Seeded from the platform RNG, falling back to the clock
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    match getrandom::fill(&mut buf) {
        Ok(()) => SmallRng::from_seed(buf),
        Err(_) => SmallRng::seed_from_u64(js_sys::Date::now() as u64),
    }
}

fn pick<R: Rng, T: Copy>(rng: &mut R, vocab: &[T]) -> T {
    vocab[rng.random_range(0..vocab.len())]
}

pub fn random_timing<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, TIMINGS)
}

pub fn random_duration<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, DURATIONS)
}

/// A single step; 3-D functions only when `allow_3d`
pub fn random_step<R: Rng>(rng: &mut R, allow_3d: bool) -> Step {
    let choices: &[TransformFn] = if allow_3d {
        &[
            TransformFn::Translate,
            TransformFn::Rotate,
            TransformFn::Scale,
            TransformFn::Skew,
            TransformFn::RotateX,
            TransformFn::RotateY,
            TransformFn::TranslateZ,
        ]
    } else {
        &[TransformFn::Translate, TransformFn::Rotate, TransformFn::Scale, TransformFn::Skew]
    };
    let function = pick(rng, choices);

    let args: Vec<Arg> = match function {
        TransformFn::Translate => vec![pick(rng, OFFSETS).into(), pick(rng, OFFSETS).into()],
        TransformFn::TranslateZ => vec![pick(rng, OFFSETS).into()],
        TransformFn::Scale => {
            let s = pick(rng, SCALES);
            vec![s.into(), s.into()]
        }
        TransformFn::Skew => vec![(pick(rng, ANGLES) / 6.0).into(), 0.into()],
        _ => vec![pick(rng, ANGLES).into()],
    };
    Step { function, args }
}

/// Between one and `max` steps
pub fn random_chain<R: Rng>(rng: &mut R, max: usize, allow_3d: bool) -> Vec<Step> {
    let count = rng.random_range(1..=max.max(1));
    (0..count).map(|_| random_step(rng, allow_3d)).collect()
}
