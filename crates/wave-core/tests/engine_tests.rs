// Host-side integration tests for the full tick pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wave_core::*;

fn engine(width: u32, height: u32) -> WaveEngine<StdRng> {
    WaveEngine::with_rng(
        WaveConfig::default(),
        Viewport::new(width, height),
        StdRng::seed_from_u64(42),
    )
    .unwrap()
}

#[test]
fn construction_derives_travel_limit_and_points() {
    let e = engine(800, 1000);
    assert_eq!(e.travel_limit(), 800.0);
    assert_eq!(e.layers().len(), DEFAULT_LAYER_COUNT);
    assert_eq!(e.sparkles().len(), PARTICLE_COUNT);
    for i in 0..DEFAULT_LAYER_COUNT {
        assert_eq!(e.layer_points(i).len(), 801);
    }
    assert!(e.layer_points(DEFAULT_LAYER_COUNT).is_empty());
}

#[test]
fn invalid_configs_fail_fast() {
    let bad_weights = WaveConfig {
        layer_weights: vec![0.5, 1.0],
        ..WaveConfig::default()
    };
    assert!(matches!(
        WaveEngine::new(bad_weights, Viewport::new(800, 600)),
        Err(EngineError::ConfigurationMismatch { expected: 4, actual: 2, .. })
    ));

    let zero_lifespan = WaveConfig {
        lifespan_ms: 0.0,
        ..WaveConfig::default()
    };
    assert!(matches!(
        WaveEngine::new(zero_lifespan, Viewport::new(800, 600)),
        Err(EngineError::InvalidParameter { name: "lifespan_ms", .. })
    ));

    let swapped_rates = WaveConfig {
        white_rate: 0.8,
        ..WaveConfig::default()
    };
    assert!(WaveEngine::new(swapped_rates, Viewport::new(800, 600)).is_err());

    let too_few_harmonics = WaveConfig {
        harmonics: WaveConfig::default().harmonics[..2].to_vec(),
        ..WaveConfig::default()
    };
    assert!(too_few_harmonics.validate().is_err());
}

#[test]
fn six_layer_config_is_accepted_with_matching_table() {
    let config = WaveConfig {
        layer_count: 6,
        layer_weights: vec![0.3, 0.55, 0.75, 0.88, 0.96, 1.0],
        ..WaveConfig::default()
    };
    let e = WaveEngine::with_rng(config, Viewport::new(800, 400), StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(e.travel_limit(), 320.0);
    assert!(e.sparkles().iter().all(|s| s.wave_index < 6));
}

#[test]
fn tick_advances_every_layer() {
    let mut e = engine(400, 1000);
    let before: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    let report = e.tick(1000.0);
    assert!(!report.skipped);
    assert_eq!(report.wrapped, 0);
    let step = 1000.0 / TIME_SCALE_MS;
    for (layer, old) in e.layers().iter().zip(before) {
        assert!((layer.travel_position - (old + step)).abs() < 1e-3);
    }
}

#[test]
fn tick_at_primes_then_measures_elapsed() {
    let mut e = engine(400, 1000);
    let start: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    assert_eq!(e.tick_at(5_000.0), TickReport::default());
    assert_eq!(
        e.layers().iter().map(|l| l.travel_position).collect::<Vec<_>>(),
        start
    );
    e.tick_at(5_500.0);
    let step = 500.0 / TIME_SCALE_MS;
    assert!((e.layers()[0].travel_position - (start[0] + step)).abs() < 1e-3);
}

#[test]
fn negative_and_nan_elapsed_are_absorbed() {
    let mut e = engine(400, 1000);
    let start: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    let lives: Vec<f32> = e.sparkles().iter().map(|s| s.life).collect();
    e.tick(-250.0);
    e.tick(f32::NAN);
    let after: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    assert_eq!(after, start);
    for (s, life) in e.sparkles().iter().zip(lives) {
        if life > 0.0 {
            assert_eq!(s.life, life);
        }
    }
}

#[test]
fn wrap_rotates_engine_layers_and_keeps_points_in_draw_order() {
    let mut e = engine(200, 1000);
    // Trailing layer sits at 600 of 800; 201 units wraps it.
    let report = e.tick(201.0 * TIME_SCALE_MS);
    assert_eq!(report.wrapped, 1);
    assert_eq!(e.layers()[0].id, DEFAULT_LAYER_COUNT - 1);
    let front = &e.layers()[0];
    let expected = evaluate(
        200,
        front.travel_position,
        e.travel_limit(),
        &front.params,
        Easing {
            slow_down_rate: SLOW_DOWN_RATE,
            base_offset: BASE_OFFSET,
        },
    );
    assert_eq!(e.layer_points(0), expected.as_slice());
}

#[test]
fn bands_chain_tails_from_a_zero_baseline() {
    let e = engine(300, 1000);
    let bands: Vec<Band> = e.bands().collect();
    assert_eq!(bands.len(), DEFAULT_LAYER_COUNT);
    assert_eq!(bands[0].tail.len(), 301);
    assert!(bands[0].tail.iter().all(|&y| y == 0.0));
    for i in 1..bands.len() {
        assert_eq!(bands[i].tail, bands[i - 1].points);
        assert_eq!(bands[i].points.len(), 301);
    }
    for (band, layer) in bands.iter().zip(e.layers()) {
        assert_eq!(band.layer_id, layer.id);
        assert_eq!(band.fill, layer.fill);
    }
}

#[test]
fn sprites_ride_on_their_layer() {
    let mut e = engine(500, 1000);
    e.tick(20.0);
    let sprites: Vec<SparkleSprite> = e.sprites().collect();
    assert_eq!(sprites.len(), PARTICLE_COUNT);
    for (sprite, sparkle) in sprites.iter().zip(e.sparkles()) {
        let layer = &e.layers()[sparkle.wave_index];
        let y = e.layer_points(sparkle.wave_index)[sparkle.x as usize] - sparkle.y_offset_delta;
        assert_eq!(sprite.y, y);
        let opacity = layer.opacity * sparkle.life / LIFESPAN_MS;
        assert!((sprite.opacity - opacity).abs() < 1e-6);
        assert!((sprite.radius - (1.0 - opacity) * sparkle.base_radius).abs() < 1e-4);
        assert!((5..=7).contains(&sprite.sides));
    }
}

#[test]
fn degenerate_viewport_pauses_and_recovers() {
    let mut e = engine(640, 1000);
    let before: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();

    e.resize(Viewport::new(0, 1000));
    assert!(e.layer_points(0).is_empty());
    assert!(e.bands().all(|b| b.points.is_empty() && b.tail.is_empty()));
    assert_eq!(e.sprites().count(), 0);
    let report = e.tick(1000.0);
    assert!(report.skipped);
    let paused: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    assert_eq!(paused, before);

    e.resize(Viewport::new(640, 1000));
    assert_eq!(e.layer_points(0).len(), 641);
    assert_eq!(e.sprites().count(), PARTICLE_COUNT);
}

#[test]
fn engine_started_degenerate_spawns_positions_on_first_real_size() {
    let mut e = WaveEngine::with_rng(
        WaveConfig::default(),
        Viewport::new(0, 0),
        StdRng::seed_from_u64(3),
    )
    .unwrap();
    assert_eq!(e.travel_limit(), 0.0);
    assert!(e.tick(16.0).skipped);
    assert!(e.sparkles().iter().all(|s| s.x == 0));
    let lives: Vec<f32> = e.sparkles().iter().map(|s| s.life).collect();

    e.resize(Viewport::new(100, 500));
    assert_eq!(e.travel_limit(), 400.0);
    let positions: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    assert_eq!(positions, vec![0.0, 100.0, 200.0, 300.0]);

    // Sparkles spawned at zero width are spread over the real width.
    let xs: Vec<u32> = e.sparkles().iter().map(|s| s.x).collect();
    assert!(xs.iter().all(|&x| x <= 100));
    let mut distinct = xs.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert!(distinct.len() > 10, "{xs:?}");
    assert!(xs.iter().filter(|&&x| x == 0).count() < 5, "{xs:?}");
    let after: Vec<f32> = e.sparkles().iter().map(|s| s.life).collect();
    assert_eq!(after, lives);
}

#[test]
fn resize_rescales_travel_and_sparkles() {
    let mut e = engine(800, 1000);
    let before: Vec<f32> = e.layers().iter().map(|l| l.travel_position).collect();
    e.resize(Viewport::new(400, 500));
    assert_eq!(e.travel_limit(), 400.0);
    for (layer, old) in e.layers().iter().zip(before) {
        assert!((layer.travel_position - old / 2.0).abs() < 1e-3);
    }
    assert!(e.sparkles().iter().all(|s| s.x <= 400));
    assert_eq!(e.layer_points(0).len(), 401);
}

#[test]
fn long_run_keeps_invariants() {
    let mut e = engine(320, 400);
    let limit = e.travel_limit();
    for i in 0..5_000 {
        e.tick(20.0 + (i % 7) as f32 * 5.0);
        for layer in e.layers() {
            assert!(layer.travel_position >= 0.0 && layer.travel_position < limit);
            assert!(layer.opacity > 0.0 && layer.opacity <= 1.0);
        }
        for s in e.sparkles() {
            assert!(s.wave_index < DEFAULT_LAYER_COUNT);
            assert!(s.x <= 320);
            assert!(s.life >= 0.0 && s.life <= LIFESPAN_MS);
        }
    }
    let mut ids: Vec<usize> = e.layers().iter().map(|l| l.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}
