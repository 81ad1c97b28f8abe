//! Travel-progress to fill-color mapping.
//!
//! A layer starts deep blue at the bottom of its travel, brightens to cyan,
//! flashes pale cyan around `white_rate`, then greys out and fades to fully
//! transparent as it approaches the travel limit.

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Channel-wise `round(a + (b - a) * t)` with `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// CSS color string, e.g. `rgba(30,60,160,0.500)`.
    pub fn to_css(self, alpha: f32) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0))
    }

    /// Normalized [r, g, b, a] for GPU vertex colors.
    pub fn to_rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha.clamp(0.0, 1.0),
        ]
    }
}

/// Four reference colors and the two breakpoints between them.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorGradient {
    pub stops: [Rgb; 4],
    pub white_rate: f32,
    pub disappear_rate: f32,
}

impl ColorGradient {
    /// Fill color and opacity for a layer at `position` along `travel_limit`.
    pub fn color_for(&self, position: f32, travel_limit: f32) -> (Rgb, f32) {
        if travel_limit <= 0.0 {
            return (self.stops[0], 1.0);
        }
        let rate = (position / travel_limit).clamp(0.0, 1.0);
        let [c1, c2, c3, c4] = self.stops;

        if rate < self.white_rate {
            (c1.lerp(c2, rate / self.white_rate), 1.0)
        } else if rate < self.disappear_rate {
            let local = (rate - self.white_rate) / (self.disappear_rate - self.white_rate);
            (c2.lerp(c3, local), 1.0)
        } else {
            let tail = 1.0 - self.disappear_rate;
            let local = (rate - self.disappear_rate) / tail;
            (c3.lerp(c4, local), (1.0 - rate) / tail)
        }
    }
}
