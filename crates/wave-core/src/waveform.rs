use crate::constants::SLOW_DOWN_BEND;
use crate::params::WaveParams;
use std::f32::consts::PI;

/// Vertical easing inputs shared by every layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    pub slow_down_rate: f32,
    pub base_offset: f32,
}

/// Sum of all harmonics at sample `x` for a layer at travel `position`.
pub fn harmonic_sum(x: f32, position: f32, params: &[WaveParams]) -> f32 {
    params
        .iter()
        .map(|p| {
            let angle = PI / p.period * (p.phase_offset + x) + position * p.amplitude * p.speed;
            p.amplitude * angle.sin()
        })
        .sum()
}

/// Vertical lift applied to every sample of a layer at `position`.
///
/// Below the slow-down line the layer rises linearly with travel; above it
/// the rise is bent by a cosine so the layer decelerates before it wraps.
pub fn eased_lift(position: f32, travel_limit: f32, easing: Easing) -> f32 {
    let slow_down_line = travel_limit * easing.slow_down_rate;
    let remain = position - slow_down_line;
    if remain < 0.0 {
        return position - easing.base_offset;
    }
    let span = travel_limit - slow_down_line;
    let bend = if span > 0.0 {
        (PI * remain * SLOW_DOWN_BEND / span).cos()
    } else {
        1.0
    };
    slow_down_line + remain * bend - easing.base_offset
}

/// Evaluate a layer into `width + 1` heights, one per integer x.
pub fn evaluate(
    width: u32,
    position: f32,
    travel_limit: f32,
    params: &[WaveParams],
    easing: Easing,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(width as usize + 1);
    evaluate_into(&mut out, width, position, travel_limit, params, easing);
    out
}

/// Same as [`evaluate`] but reuses `out`'s allocation.
pub fn evaluate_into(
    out: &mut Vec<f32>,
    width: u32,
    position: f32,
    travel_limit: f32,
    params: &[WaveParams],
    easing: Easing,
) {
    let lift = eased_lift(position, travel_limit, easing);
    out.clear();
    out.extend((0..=width).map(|x| harmonic_sum(x as f32, position, params) + lift));
}
