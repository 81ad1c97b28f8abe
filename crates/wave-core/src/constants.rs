// Shared tuning constants for the wave field. Front-ends read these through
// `WaveConfig::default()` rather than directly.

// Scene layout
pub const DEFAULT_LAYER_COUNT: usize = 4; // stacked wave bands
pub const TRAVEL_RATIO: f32 = 0.8; // travel limit as a fraction of viewport height
pub const TIME_SCALE_MS: f32 = 50.0; // milliseconds per unit of travel
pub const BASE_OFFSET: f32 = 60.0; // vertical calibration subtracted from every sample

// Gradient and easing breakpoints (fractions of the travel limit)
pub const WHITE_RATE: f32 = 0.7;
pub const DISAPPEAR_RATE: f32 = 0.76;
pub const SLOW_DOWN_RATE: f32 = 0.6;
pub const SLOW_DOWN_BEND: f32 = 0.45; // share of a half turn the easing cosine sweeps

// Harmonic generation
pub const PARAM_JITTER: f32 = 0.25; // +/- relative spread on amplitude and period
pub const MAX_SPEED: f32 = 0.0005;

/// Base (amplitude, period) pairs: large slow swells first, small fast ripples last.
pub const HARMONIC_BASES: [(f32, f32); 4] =
    [(40.0, 400.0), (20.0, 200.0), (10.0, 90.0), (5.0, 40.0)];

// Sparkles
pub const PARTICLE_COUNT: usize = 40;
pub const LIFESPAN_MS: f32 = 3000.0;
pub const SPARKLE_SIDES: (u32, u32) = (5, 7); // inclusive polygon side range
pub const SPARKLE_RADIUS: (u32, u32) = (2, 9); // inclusive base radius range
pub const SPARKLE_LIFT_BASE: f32 = 10.0; // offset below the crest for layer 0
pub const SPARKLE_LIFT_STEP: f32 = 2.0; // reduction per layer index
pub const SPARKLE_LIFT_JITTER: f32 = 20.0;

/// Cumulative selection weights per layer; biased toward the lower layers.
pub const LAYER_WEIGHTS: [f32; DEFAULT_LAYER_COUNT] = [0.4, 0.7, 0.9, 1.0];

// Palette
pub const DEEP_BLUE: [u8; 3] = [30, 60, 160];
pub const CYAN: [u8; 3] = [0, 190, 230];
pub const PALE_CYAN: [u8; 3] = [200, 245, 250];
pub const GRAY: [u8; 3] = [204, 204, 204];
pub const BACKGROUND: [u8; 3] = [204, 204, 204]; // #ccc
pub const SPARKLE_COLOR: [u8; 3] = [255, 255, 255];

// Host cadence
pub const TICK_INTERVAL_MS: u32 = 30;
pub const DEFAULT_CANVAS_ID: &str = "wave-canvas"; // mounted by the web host at load
