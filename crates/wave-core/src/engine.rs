//! The animation engine: one instance owns every layer and sparkle.
//!
//! Each tick advances the layers, re-evaluates their point arrays and then
//! ages the sparkles, which ride on the freshly evaluated points. Hosts call
//! `tick_at` from their timer and read `bands()` / `sprites()` to draw.

use crate::config::WaveConfig;
use crate::error::EngineError;
use crate::gradient::{ColorGradient, Rgb};
use crate::layers::{LayerStack, WaveLayer};
use crate::sparkles::{Sparkle, SparklePool, SparkleSprite};
use crate::waveform::{evaluate_into, Easing};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drawable area in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Zero-sized viewports happen transiently during layout changes.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// What a tick did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub wrapped: usize,
    pub respawned: usize,
    /// The viewport was degenerate and nothing moved.
    pub skipped: bool,
}

/// A fillable region between a layer's points and the boundary beneath it.
#[derive(Clone, Copy, Debug)]
pub struct Band<'a> {
    pub layer_id: usize,
    pub points: &'a [f32],
    /// Points of the layer below, or a zero baseline for the first layer.
    pub tail: &'a [f32],
    pub fill: Rgb,
    pub opacity: f32,
}

pub struct WaveEngine<R: Rng = StdRng> {
    config: WaveConfig,
    gradient: ColorGradient,
    easing: Easing,
    viewport: Viewport,
    travel_limit: f32,
    layers: LayerStack,
    sparkles: SparklePool,
    points: Vec<Vec<f32>>,
    baseline: Vec<f32>,
    last_timestamp: Option<f64>,
    rng: R,
}

impl WaveEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn new(config: WaveConfig, viewport: Viewport) -> Result<Self, EngineError> {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }
}

impl<R: Rng> WaveEngine<R> {
    /// Engine drawing all randomness from `rng`.
    pub fn with_rng(
        config: WaveConfig,
        viewport: Viewport,
        mut rng: R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let travel_limit = if viewport.is_degenerate() {
            0.0
        } else {
            config.travel_limit(viewport.height)
        };
        let layers = LayerStack::new(&config, travel_limit, &mut rng);
        let sparkles = SparklePool::new(&config, viewport.width, &mut rng)?;
        log::info!(
            "[engine] layers={} sparkles={} viewport={}x{} travel_limit={:.1}",
            config.layer_count,
            config.particle_count,
            viewport.width,
            viewport.height,
            travel_limit
        );

        let mut engine = Self {
            gradient: config.gradient(),
            easing: Easing {
                slow_down_rate: config.slow_down_rate,
                base_offset: config.base_offset,
            },
            config,
            viewport,
            travel_limit,
            layers,
            sparkles,
            points: Vec::new(),
            baseline: Vec::new(),
            last_timestamp: None,
            rng,
        };
        engine.evaluate();
        Ok(engine)
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn travel_limit(&self) -> f32 {
        self.travel_limit
    }

    /// Layers in draw order.
    pub fn layers(&self) -> &[WaveLayer] {
        self.layers.layers()
    }

    /// Evaluated heights of the layer at draw index `index`; empty when out of range.
    pub fn layer_points(&self, index: usize) -> &[f32] {
        self.points.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        self.sparkles.sparkles()
    }

    /// Advance from a clock timestamp. The first call only primes the clock.
    pub fn tick_at(&mut self, timestamp_ms: f64) -> TickReport {
        match self.last_timestamp.replace(timestamp_ms) {
            Some(previous) => self.tick((timestamp_ms - previous) as f32),
            None => TickReport::default(),
        }
    }

    /// One synchronous update pass. Negative or non-finite elapsed counts as 0.
    pub fn tick(&mut self, elapsed_ms: f32) -> TickReport {
        if self.viewport.is_degenerate() {
            return TickReport {
                skipped: true,
                ..TickReport::default()
            };
        }
        let elapsed = if elapsed_ms.is_finite() { elapsed_ms.max(0.0) } else { 0.0 };

        let wrapped = self.layers.advance(
            elapsed,
            self.travel_limit,
            &self.config,
            &self.gradient,
            &mut self.rng,
        );
        self.evaluate();
        let respawned = self.sparkles.tick(elapsed, self.viewport.width, &mut self.rng);

        TickReport {
            wrapped: wrapped.len(),
            respawned,
            skipped: false,
        }
    }

    /// Adopt a new viewport size, keeping every layer's relative progress.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        let previous = std::mem::replace(&mut self.viewport, viewport);

        if viewport.is_degenerate() {
            if !previous.is_degenerate() {
                log::warn!(
                    "[engine] degenerate viewport {}x{}, pausing",
                    viewport.width,
                    viewport.height
                );
            }
            self.evaluate();
            return;
        }

        let travel_limit = self.config.travel_limit(viewport.height);
        if self.travel_limit > 0.0 {
            self.layers.rescale(self.travel_limit, travel_limit, &self.gradient);
        } else {
            self.layers.reset_positions(travel_limit, &self.gradient);
        }
        if previous.is_degenerate() {
            log::info!("[engine] viewport restored to {}x{}", viewport.width, viewport.height);
        }
        self.travel_limit = travel_limit;
        if previous.width == 0 {
            self.sparkles.respawn_all(viewport.width, &mut self.rng);
        } else {
            self.sparkles.rescale_x(previous.width, viewport.width);
        }
        self.evaluate();
    }

    /// Renderer view of the layers, in draw order.
    pub fn bands(&self) -> impl Iterator<Item = Band<'_>> + '_ {
        self.layers
            .layers()
            .iter()
            .enumerate()
            .map(move |(i, layer)| Band {
                layer_id: layer.id,
                points: self.layer_points(i),
                tail: if i == 0 {
                    self.baseline.as_slice()
                } else {
                    self.layer_points(i - 1)
                },
                fill: layer.fill,
                opacity: layer.opacity,
            })
    }

    /// Renderer view of the sparkles. Empty while the viewport is degenerate.
    pub fn sprites(&self) -> impl Iterator<Item = SparkleSprite> + '_ {
        let lifespan = self.sparkles.lifespan_ms();
        self.sparkles.sparkles().iter().filter_map(move |s| {
            let layer = self.layers.layers().get(s.wave_index)?;
            s.sprite(self.layer_points(s.wave_index), layer.opacity, lifespan)
        })
    }

    fn evaluate(&mut self) {
        let layers = self.layers.layers();
        self.points.resize_with(layers.len(), Vec::new);
        self.baseline.clear();
        if self.viewport.is_degenerate() {
            self.points.iter_mut().for_each(Vec::clear);
            return;
        }
        let width = self.viewport.width;
        for (out, layer) in self.points.iter_mut().zip(layers) {
            evaluate_into(
                out,
                width,
                layer.travel_position,
                self.travel_limit,
                &layer.params,
                self.easing,
            );
        }
        self.baseline.resize(width as usize + 1, 0.0);
    }
}
