use crate::config::HarmonicBase;
use crate::constants::PARAM_JITTER;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::PI;

/// One sinusoidal harmonic of a layer's shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveParams {
    pub amplitude: f32,
    pub period: f32,
    pub phase_offset: f32,
    pub speed: f32,
}

/// Harmonics summed to form one layer; never more than six.
pub type HarmonicSet = SmallVec<[WaveParams; 6]>;

/// Jitter a base harmonic: amplitude and period within +/-25%, random phase and speed.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, base: HarmonicBase, max_speed: f32) -> WaveParams {
    WaveParams {
        amplitude: jitter(rng, base.amplitude),
        period: jitter(rng, base.period),
        phase_offset: rng.gen_range(-PI..PI),
        speed: if max_speed > 0.0 {
            rng.gen_range(-max_speed..max_speed)
        } else {
            0.0
        },
    }
}

/// A fresh harmonic set, one entry per base, in base order.
pub fn generate_set<R: Rng + ?Sized>(
    rng: &mut R,
    bases: &[HarmonicBase],
    max_speed: f32,
) -> HarmonicSet {
    bases.iter().map(|&b| generate(rng, b, max_speed)).collect()
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, value: f32) -> f32 {
    value * (1.0 + rng.gen_range(-PARAM_JITTER..=PARAM_JITTER))
}
