//! Fixed-size pool of sparkles riding on wave layers.

use crate::config::WaveConfig;
use crate::constants::*;
use crate::error::EngineError;
use rand::Rng;

/// A short-lived decorative particle bound to a layer by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    /// Index into the current layer order; reassigned on respawn.
    pub wave_index: usize,
    pub x: u32,
    /// Distance below the layer's crest at `x`.
    pub y_offset_delta: f32,
    pub sides: u32,
    pub life: f32,
    pub base_radius: f32,
}

/// Outcome of aging a sparkle by one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum Aged {
    Alive(Sparkle),
    /// Life ran out; `overshoot` is how far past zero it went.
    Expired { overshoot: f32 },
}

/// Render attributes derived from a sparkle and the layer it rides on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleSprite {
    pub x: f32,
    pub y: f32,
    pub sides: u32,
    pub radius: f32,
    pub opacity: f32,
}

impl SparkleSprite {
    /// Corners of the regular polygon, first corner straight up.
    ///
    /// Coordinates use the engine's bottom-up y axis.
    pub fn corners(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        let step = std::f32::consts::TAU / self.sides.max(3) as f32;
        (0..self.sides.max(3)).map(move |i| {
            let angle = step * i as f32;
            (self.x + self.radius * angle.sin(), self.y + self.radius * angle.cos())
        })
    }
}

impl Sparkle {
    pub fn aged(self, elapsed_ms: f32) -> Aged {
        let life = self.life - elapsed_ms;
        if life <= 0.0 {
            Aged::Expired { overshoot: -life }
        } else {
            Aged::Alive(Sparkle { life, ..self })
        }
    }

    /// Position, size and fade against the bound layer's evaluated points.
    ///
    /// Sparkles fade with remaining life and grow as they fade.
    pub fn sprite(
        &self,
        points: &[f32],
        layer_opacity: f32,
        lifespan_ms: f32,
    ) -> Option<SparkleSprite> {
        let last = points.len().checked_sub(1)?;
        let x = (self.x as usize).min(last);
        let opacity = (layer_opacity * self.life / lifespan_ms).clamp(0.0, 1.0);
        Some(SparkleSprite {
            x: x as f32,
            y: points[x] - self.y_offset_delta,
            sides: self.sides,
            radius: (1.0 - opacity) * self.base_radius,
            opacity,
        })
    }
}

/// Life a respawned sparkle starts with: the overshoot is carried over
/// instead of restarting at a full lifespan.
pub fn carried_life(lifespan_ms: f32, overshoot: f32) -> f32 {
    let carried = lifespan_ms - overshoot;
    if carried >= 0.0 {
        carried
    } else {
        carried.rem_euclid(lifespan_ms)
    }
}

pub struct SparklePool {
    sparkles: Vec<Sparkle>,
    weights: Vec<f32>,
    lifespan_ms: f32,
}

impl SparklePool {
    /// Fill the pool with `particle_count` sparkles at random points of their life.
    pub fn new<R: Rng + ?Sized>(
        config: &WaveConfig,
        width: u32,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut pool = Self {
            sparkles: Vec::with_capacity(config.particle_count),
            weights: config.layer_weights.clone(),
            lifespan_ms: config.lifespan_ms,
        };
        for _ in 0..config.particle_count {
            let sparkle = pool.spawn(width, None, rng);
            pool.sparkles.push(sparkle);
        }
        Ok(pool)
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn lifespan_ms(&self) -> f32 {
        self.lifespan_ms
    }

    /// A brand new sparkle. Without `initial_life` it starts at a random age.
    pub fn spawn<R: Rng + ?Sized>(
        &self,
        width: u32,
        initial_life: Option<f32>,
        rng: &mut R,
    ) -> Sparkle {
        let wave_index = self.pick_layer(rng);
        let lift = SPARKLE_LIFT_BASE - wave_index as f32 * SPARKLE_LIFT_STEP;
        Sparkle {
            wave_index,
            x: rng.gen_range(0..=width),
            y_offset_delta: lift + rng.gen_range(-SPARKLE_LIFT_JITTER..=SPARKLE_LIFT_JITTER),
            sides: rng.gen_range(SPARKLE_SIDES.0..=SPARKLE_SIDES.1),
            life: initial_life.unwrap_or_else(|| rng.gen_range(0.0..self.lifespan_ms)),
            base_radius: rng.gen_range(SPARKLE_RADIUS.0..=SPARKLE_RADIUS.1) as f32,
        }
    }

    /// Weighted pick over the cumulative table; lower layers are favored.
    pub fn pick_layer<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let last = self.weights.len() - 1;
        let roll = rng.gen::<f32>() * self.weights[last];
        self.weights.iter().position(|&w| roll < w).unwrap_or(last)
    }

    /// Age every sparkle, replacing expired ones. Returns how many were replaced.
    pub fn tick<R: Rng + ?Sized>(&mut self, elapsed_ms: f32, width: u32, rng: &mut R) -> usize {
        let mut respawned = 0;
        for i in 0..self.sparkles.len() {
            self.sparkles[i] = match self.sparkles[i].aged(elapsed_ms) {
                Aged::Alive(sparkle) => sparkle,
                Aged::Expired { overshoot } => {
                    respawned += 1;
                    let life = carried_life(self.lifespan_ms, overshoot);
                    self.spawn(width, Some(life), rng)
                }
            };
        }
        respawned
    }

    /// Keep horizontal placement proportional across a width change.
    ///
    /// There is nothing to scale from a zero width; use [`Self::respawn_all`].
    pub fn rescale_x(&mut self, old_width: u32, new_width: u32) {
        if old_width == 0 {
            return;
        }
        for sparkle in &mut self.sparkles {
            sparkle.x = ((sparkle.x as u64 * new_width as u64) / old_width as u64) as u32;
        }
    }

    /// Replace every sparkle with a fresh one across `width`, keeping its remaining life.
    pub fn respawn_all<R: Rng + ?Sized>(&mut self, width: u32, rng: &mut R) {
        for i in 0..self.sparkles.len() {
            let life = self.sparkles[i].life;
            self.sparkles[i] = self.spawn(width, Some(life), rng);
        }
    }
}
