//! HSV conversion for 8-bit RGB pixels.
//!
//! Value stays on the 8-bit grid (it is the largest channel). Hue and
//! saturation are kept as `f32` in `[0, 1]` so that a round trip through
//! [`Hsv`] reproduces the original pixel to within one step per channel.

/// A pixel in hue/saturation/value form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as a fraction of a full turn, `[0, 1)`.
    pub h: f32,
    /// Saturation, `[0, 1]`.
    pub s: f32,
    /// Value, the largest of the three channels.
    pub v: u8,
}

impl Hsv {
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(f32::from);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = rgb[0].max(rgb[1]).max(rgb[2]);

        if max == min {
            return Self { h: 0.0, s: 0.0, v };
        }

        let delta = max - min;
        let s = delta / max;
        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let h = (sector / 6.0).rem_euclid(1.0);

        Self { h, s, v }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        if self.s <= 0.0 {
            return [self.v; 3];
        }

        let v = f32::from(self.v);
        let s = self.s.min(1.0);
        let scaled = self.h.rem_euclid(1.0) * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [to_u8(r), to_u8(g), to_u8(b)]
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
