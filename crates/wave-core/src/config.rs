use crate::constants::*;
use crate::error::EngineError;
use crate::gradient::{ColorGradient, Rgb};

/// Base amplitude and period a harmonic is jittered around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonicBase {
    pub amplitude: f32,
    pub period: f32,
}

/// Engine configuration, validated once at construction.
///
/// Fields:
/// - `layer_count`: number of stacked wave layers
/// - `particle_count`: size of the sparkle pool
/// - `lifespan_ms`: maximum sparkle life
/// - `white_rate` / `disappear_rate`: gradient breakpoints as fractions of travel
/// - `slow_down_rate`: fraction of travel where layers start to decelerate
/// - `travel_ratio`: travel limit as a fraction of viewport height
/// - `time_scale`: milliseconds per unit of travel
/// - `layer_weights`: cumulative sparkle-to-layer weights, one per layer
#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub layer_count: usize,
    pub particle_count: usize,
    pub lifespan_ms: f32,
    pub white_rate: f32,
    pub disappear_rate: f32,
    pub slow_down_rate: f32,
    pub travel_ratio: f32,
    pub time_scale: f32,
    pub base_offset: f32,
    pub max_speed: f32,
    pub harmonics: Vec<HarmonicBase>,
    pub layer_weights: Vec<f32>,
    pub palette: [Rgb; 4],
    pub background: Rgb,
    pub sparkle_color: Rgb,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            layer_count: DEFAULT_LAYER_COUNT,
            particle_count: PARTICLE_COUNT,
            lifespan_ms: LIFESPAN_MS,
            white_rate: WHITE_RATE,
            disappear_rate: DISAPPEAR_RATE,
            slow_down_rate: SLOW_DOWN_RATE,
            travel_ratio: TRAVEL_RATIO,
            time_scale: TIME_SCALE_MS,
            base_offset: BASE_OFFSET,
            max_speed: MAX_SPEED,
            harmonics: HARMONIC_BASES
                .iter()
                .map(|&(amplitude, period)| HarmonicBase { amplitude, period })
                .collect(),
            layer_weights: LAYER_WEIGHTS.to_vec(),
            palette: [
                Rgb::from_array(DEEP_BLUE),
                Rgb::from_array(CYAN),
                Rgb::from_array(PALE_CYAN),
                Rgb::from_array(GRAY),
            ],
            background: Rgb::from_array(BACKGROUND),
            sparkle_color: Rgb::from_array(SPARKLE_COLOR),
        }
    }
}

impl WaveConfig {
    pub fn gradient(&self) -> ColorGradient {
        ColorGradient {
            stops: self.palette,
            white_rate: self.white_rate,
            disappear_rate: self.disappear_rate,
        }
    }

    /// Travel limit for a viewport of the given height.
    pub fn travel_limit(&self, height: u32) -> f32 {
        height as f32 * self.travel_ratio
    }

    /// Check every invariant the tick path relies on.
    // Negated comparisons so NaN fails every check.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), EngineError> {
        fn invalid(name: &'static str, reason: &'static str) -> Result<(), EngineError> {
            Err(EngineError::InvalidParameter { name, reason })
        }

        if self.layer_count == 0 {
            return invalid("layer_count", "must be at least 1");
        }
        if !(self.lifespan_ms > 0.0) {
            return invalid("lifespan_ms", "must be positive");
        }
        if !(self.time_scale > 0.0) {
            return invalid("time_scale", "must be positive");
        }
        if !(self.travel_ratio > 0.0 && self.travel_ratio <= 1.0) {
            return invalid("travel_ratio", "must be in (0, 1]");
        }
        if !(self.white_rate > 0.0
            && self.white_rate < self.disappear_rate
            && self.disappear_rate < 1.0)
        {
            return invalid("white_rate/disappear_rate", "must satisfy 0 < white < disappear < 1");
        }
        if !(self.slow_down_rate > 0.0 && self.slow_down_rate < 1.0) {
            return invalid("slow_down_rate", "must be in (0, 1)");
        }
        if !(3..=6).contains(&self.harmonics.len()) {
            return invalid("harmonics", "must list 3 to 6 entries");
        }
        if self.harmonics.iter().any(|h| !(h.period > 0.0)) {
            return invalid("harmonics", "periods must be positive");
        }
        if self.layer_weights.len() != self.layer_count {
            return Err(EngineError::ConfigurationMismatch {
                table: "layer_weights",
                expected: self.layer_count,
                actual: self.layer_weights.len(),
            });
        }
        if self.layer_weights.windows(2).any(|w| w[1] < w[0]) {
            return invalid("layer_weights", "must be cumulative (non-decreasing)");
        }
        if !(self.layer_weights[self.layer_count - 1] > 0.0) {
            return invalid("layer_weights", "total weight must be positive");
        }
        Ok(())
    }
}
