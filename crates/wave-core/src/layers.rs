//! Layer travel, wrap detection and draw-order rotation.
//!
//! Layers are kept in draw order: index 0 is drawn first and sits lowest.
//! When a layer travels past the limit it restarts at the bottom with fresh
//! harmonics and moves to the front of the order.

use crate::config::WaveConfig;
use crate::gradient::{ColorGradient, Rgb};
use crate::params::{generate_set, HarmonicSet};
use rand::Rng;
use smallvec::SmallVec;

/// One wave band: travel progress, shape harmonics and current fill.
#[derive(Clone, Debug)]
pub struct WaveLayer {
    /// Stable identity assigned at startup; survives rotations.
    pub id: usize,
    pub travel_position: f32,
    pub params: HarmonicSet,
    pub fill: Rgb,
    pub opacity: f32,
}

impl WaveLayer {
    fn recolor(&mut self, gradient: &ColorGradient, travel_limit: f32) {
        let (fill, opacity) = gradient.color_for(self.travel_position, travel_limit);
        self.fill = fill;
        self.opacity = opacity;
    }
}

/// Result of advancing a single travel position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Advance {
    pub position: f32,
    pub wrapped: bool,
}

/// Move `position` by `elapsed_ms / time_scale`, wrapping modulo `travel_limit`.
///
/// A wrap is reported when the advance crosses the limit, so a whole-cycle
/// elapsed counts as exactly one wrap even though the position is unchanged.
pub fn advance_position(
    position: f32,
    elapsed_ms: f32,
    time_scale: f32,
    travel_limit: f32,
) -> Advance {
    if travel_limit <= 0.0 {
        return Advance { position, wrapped: false };
    }
    let moved = position + elapsed_ms / time_scale;
    if moved >= travel_limit {
        Advance {
            position: moved % travel_limit,
            wrapped: true,
        }
    } else {
        Advance {
            position: moved,
            wrapped: false,
        }
    }
}

/// Ordered collection of wave layers.
pub struct LayerStack {
    layers: Vec<WaveLayer>,
}

impl LayerStack {
    /// Evenly spaced layers, layer `i` starting at `travel_limit * i / layer_count`.
    pub fn new<R: Rng + ?Sized>(config: &WaveConfig, travel_limit: f32, rng: &mut R) -> Self {
        let gradient = config.gradient();
        let layers = (0..config.layer_count)
            .map(|id| {
                let mut layer = WaveLayer {
                    id,
                    travel_position: spawn_position(id, config.layer_count, travel_limit),
                    params: generate_set(rng, &config.harmonics, config.max_speed),
                    fill: config.palette[0],
                    opacity: 1.0,
                };
                layer.recolor(&gradient, travel_limit);
                layer
            })
            .collect();
        Self { layers }
    }

    pub fn layers(&self) -> &[WaveLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Advance every layer and rotate wrapped ones to the front.
    ///
    /// Wrapped layers get new harmonics. When several wrap in one tick they
    /// keep their relative order from before the tick. Returns the ids of the
    /// wrapped layers in that order.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        elapsed_ms: f32,
        travel_limit: f32,
        config: &WaveConfig,
        gradient: &ColorGradient,
        rng: &mut R,
    ) -> SmallVec<[usize; 4]> {
        let mut wrapped: SmallVec<[usize; 4]> = SmallVec::new();
        let mut wrapped_at: SmallVec<[usize; 4]> = SmallVec::new();
        for (index, layer) in self.layers.iter_mut().enumerate() {
            let step = advance_position(
                layer.travel_position,
                elapsed_ms,
                config.time_scale,
                travel_limit,
            );
            layer.travel_position = step.position;
            if step.wrapped {
                layer.params = generate_set(rng, &config.harmonics, config.max_speed);
                wrapped.push(layer.id);
                wrapped_at.push(index);
                log::debug!(
                    "[layers] layer {} wrapped to {:.1}, {} harmonics regenerated",
                    layer.id,
                    layer.travel_position,
                    layer.params.len()
                );
            }
            layer.recolor(gradient, travel_limit);
        }

        // `wrapped_at` is ascending, so each rotation only touches slots before
        // the next wrapped index.
        for (front, &index) in wrapped_at.iter().enumerate() {
            self.layers[front..=index].rotate_right(1);
        }
        wrapped
    }

    /// Scale positions to a new travel limit, keeping each layer's relative progress.
    pub fn rescale(&mut self, old_limit: f32, new_limit: f32, gradient: &ColorGradient) {
        if old_limit <= 0.0 || new_limit <= 0.0 {
            return;
        }
        let ratio = new_limit / old_limit;
        for layer in &mut self.layers {
            layer.travel_position = (layer.travel_position * ratio) % new_limit;
            layer.recolor(gradient, new_limit);
        }
    }

    /// Put layers back on their evenly spaced spawn positions, in current order.
    pub fn reset_positions(&mut self, travel_limit: f32, gradient: &ColorGradient) {
        let count = self.layers.len();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.travel_position = spawn_position(i, count, travel_limit);
            layer.recolor(gradient, travel_limit);
        }
    }
}

fn spawn_position(index: usize, count: usize, travel_limit: f32) -> f32 {
    travel_limit * index as f32 / count as f32
}
