// Host-side tests for harmonic generation and waveform evaluation.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;
use wave_core::*;

fn easing() -> Easing {
    Easing {
        slow_down_rate: SLOW_DOWN_RATE,
        base_offset: BASE_OFFSET,
    }
}

fn flat() -> Vec<WaveParams> {
    vec![WaveParams {
        amplitude: 0.0,
        period: 100.0,
        phase_offset: 0.0,
        speed: 0.0,
    }]
}

#[test]
fn generated_params_stay_within_jitter_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = HarmonicBase {
        amplitude: 40.0,
        period: 400.0,
    };
    for _ in 0..500 {
        let p = generate(&mut rng, base, MAX_SPEED);
        assert!(p.amplitude >= 30.0 && p.amplitude <= 50.0, "amplitude {}", p.amplitude);
        assert!(p.period >= 300.0 && p.period <= 500.0, "period {}", p.period);
        assert!(p.phase_offset >= -PI && p.phase_offset < PI);
        assert!(p.speed.abs() <= MAX_SPEED);
    }
}

#[test]
fn zero_max_speed_yields_static_harmonics() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = generate(
        &mut rng,
        HarmonicBase {
            amplitude: 5.0,
            period: 40.0,
        },
        0.0,
    );
    assert_eq!(p.speed, 0.0);
}

#[test]
fn generated_set_follows_base_order() {
    let config = WaveConfig::default();
    let mut rng = StepRng::new(0, 0);
    let set = generate_set(&mut rng, &config.harmonics, config.max_speed);
    assert_eq!(set.len(), config.harmonics.len());
    for pair in set.windows(2) {
        assert!(pair[0].amplitude > pair[1].amplitude);
        assert!(pair[0].period > pair[1].period);
    }
}

#[test]
fn evaluate_returns_width_plus_one_samples() {
    let config = WaveConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let params = generate_set(&mut rng, &config.harmonics, config.max_speed);
    for width in [0_u32, 1, 2, 17, 800, 1921] {
        let points = evaluate(width, 100.0, 320.0, &params, easing());
        assert_eq!(points.len(), width as usize + 1);
        assert!(points.iter().all(|y| y.is_finite()));
    }
}

#[test]
fn single_harmonic_matches_closed_form() {
    let params = [WaveParams {
        amplitude: 10.0,
        period: 50.0,
        phase_offset: 0.5,
        speed: 0.001,
    }];
    let position = 40.0;
    let points = evaluate(100, position, 320.0, &params, easing());
    for (x, y) in points.iter().enumerate() {
        let angle = PI / 50.0 * (0.5 + x as f32) + position * 10.0 * 0.001;
        let expected = 10.0 * angle.sin() + position - BASE_OFFSET;
        assert!((y - expected).abs() < 1e-3, "x={x} y={y} expected={expected}");
    }
}

#[test]
fn below_slow_down_line_lift_is_linear() {
    let e = easing();
    assert!((eased_lift(0.0, 320.0, e) + BASE_OFFSET).abs() < 1e-6);
    assert!((eased_lift(100.0, 320.0, e) - (100.0 - BASE_OFFSET)).abs() < 1e-4);
}

#[test]
fn above_slow_down_line_lift_decelerates() {
    let e = easing();
    let limit = 320.0;
    let line = limit * SLOW_DOWN_RATE;
    // Continuous at the slow-down line.
    let at_line = eased_lift(line, limit, e);
    assert!((at_line - (line - BASE_OFFSET)).abs() < 1e-4);
    // Past the line the layer lags behind linear travel.
    for p in [200.0, 250.0, 300.0, 319.0] {
        assert!(eased_lift(p, limit, e) < p - BASE_OFFSET);
    }
    let remain = limit - line;
    let end = eased_lift(limit, limit, e);
    let expected = line + remain * (PI * 0.45).cos() - BASE_OFFSET;
    assert!((end - expected).abs() < 1e-3);
}

#[test]
fn flat_layer_is_a_horizontal_line() {
    let points = evaluate(10, 50.0, 320.0, &flat(), easing());
    assert!(points.iter().all(|&y| (y - (50.0 - BASE_OFFSET)).abs() < 1e-5));
}

#[test]
fn evaluate_into_reuses_buffer() {
    let mut out = vec![1.0; 3];
    evaluate_into(&mut out, 5, 10.0, 320.0, &flat(), easing());
    assert_eq!(out.len(), 6);
    evaluate_into(&mut out, 2, 10.0, 320.0, &flat(), easing());
    assert_eq!(out.len(), 3);
}
