use glam::Vec2;
use wave_core::{Band, Rgb, SparkleSprite, Viewport, WaveEngine};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Maps engine pixels (x right, y up from the bottom edge) to clip space.
#[derive(Clone, Copy, Debug)]
pub struct ClipSpace {
    scale: Vec2,
}

impl ClipSpace {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scale: Vec2::new(
                2.0 / viewport.width.max(1) as f32,
                2.0 / viewport.height.max(1) as f32,
            ),
        }
    }

    pub fn map(&self, x: f32, y: f32) -> [f32; 2] {
        (Vec2::new(x, y) * self.scale - Vec2::ONE).to_array()
    }
}

/// Triangle list for the whole scene: bands in draw order, then sparkles.
pub fn build_scene(engine: &WaveEngine, out: &mut Vec<Vertex>) {
    out.clear();
    let clip = ClipSpace::new(engine.viewport());
    for band in engine.bands() {
        push_band(out, &clip, &band);
    }
    let sparkle = engine.config().sparkle_color;
    for sprite in engine.sprites() {
        push_sparkle(out, &clip, &sprite, sparkle);
    }
}

/// Two triangles per column between the tail and the layer's points.
pub fn push_band(out: &mut Vec<Vertex>, clip: &ClipSpace, band: &Band) {
    let color = band.fill.to_rgba_f32(band.opacity);
    let columns = band.points.len().min(band.tail.len());
    for x in 1..columns {
        let (x0, x1) = ((x - 1) as f32, x as f32);
        let v = |px: f32, py: f32| Vertex {
            pos: clip.map(px, py),
            color,
        };
        let lo0 = v(x0, band.tail[x - 1]);
        let hi0 = v(x0, band.points[x - 1]);
        let lo1 = v(x1, band.tail[x]);
        let hi1 = v(x1, band.points[x]);
        out.extend_from_slice(&[lo0, hi0, hi1, lo0, hi1, lo1]);
    }
}

/// Fan of `sides` triangles around the sprite's center.
pub fn push_sparkle(out: &mut Vec<Vertex>, clip: &ClipSpace, sprite: &SparkleSprite, fill: Rgb) {
    if sprite.radius <= 0.0 || sprite.opacity <= 0.0 {
        return;
    }
    let color = fill.to_rgba_f32(sprite.opacity);
    let center = Vertex {
        pos: clip.map(sprite.x, sprite.y),
        color,
    };
    let corners: Vec<Vertex> = sprite
        .corners()
        .map(|(x, y)| Vertex {
            pos: clip.map(x, y),
            color,
        })
        .collect();
    for i in 0..corners.len() {
        out.extend_from_slice(&[center, corners[i], corners[(i + 1) % corners.len()]]);
    }
}
