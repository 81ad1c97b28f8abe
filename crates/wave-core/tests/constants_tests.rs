// Host-side tests for default tuning constants and their relationships.

use wave_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_are_ordered_fractions() {
    assert!(SLOW_DOWN_RATE > 0.0 && SLOW_DOWN_RATE < 1.0);
    assert!(WHITE_RATE > 0.0 && WHITE_RATE < DISAPPEAR_RATE);
    assert!(DISAPPEAR_RATE < 1.0);
    assert!(TRAVEL_RATIO > 0.0 && TRAVEL_RATIO <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(TIME_SCALE_MS > 0.0);
    assert!(LIFESPAN_MS > 0.0);
    assert!(TICK_INTERVAL_MS >= 20 && TICK_INTERVAL_MS <= 50);
}

#[test]
fn harmonic_bases_go_from_swells_to_ripples() {
    assert!((3..=6).contains(&HARMONIC_BASES.len()));
    for pair in HARMONIC_BASES.windows(2) {
        assert!(pair[0].0 > pair[1].0, "amplitudes must decrease");
        assert!(pair[0].1 > pair[1].1, "periods must decrease");
    }
}

#[test]
fn layer_weights_are_cumulative_and_sized_to_layers() {
    assert_eq!(LAYER_WEIGHTS.len(), DEFAULT_LAYER_COUNT);
    assert!(LAYER_WEIGHTS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(LAYER_WEIGHTS[DEFAULT_LAYER_COUNT - 1], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sparkle_ranges_are_well_formed() {
    assert!(SPARKLE_SIDES.0 >= 3 && SPARKLE_SIDES.0 <= SPARKLE_SIDES.1);
    assert!(SPARKLE_RADIUS.0 > 0 && SPARKLE_RADIUS.0 <= SPARKLE_RADIUS.1);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(WaveConfig::default().validate(), Ok(()));
}

#[test]
fn palette_fades_into_the_background() {
    let config = WaveConfig::default();
    assert_eq!(config.palette[3], config.background);
}

#[test]
fn web_host_mounts_the_wave_canvas_by_default() {
    assert_eq!(DEFAULT_CANVAS_ID, "wave-canvas");
}
