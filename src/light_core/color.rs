//! Linear RGB and HSV helpers for ambient light colors.
//!
//! Colors are `Vec4` in `(r, g, b, a)` order. Hue is measured in degrees and
//! wraps into `[0, 360)` on the way back to RGB. Nothing in here clamps, so
//! channels above 1.0 or below 0.0 pass through untouched.

use glam::{Vec3, Vec4};

pub const HUE_CYCLE: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

/// Unclamped linear interpolation, exact at `t == 0.0` and `t == 1.0`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

pub fn lerp_color(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

pub fn opaque(color: Vec4) -> Vec4 {
    Vec4::new(color.x, color.y, color.z, 1.0)
}

pub fn rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

pub fn rgb_to_hsv(color: Vec4) -> Hsv {
    let (r, g, b) = (color.x, color.y, color.z);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    // A non-positive max collapses to grey at `v`.
    let s = if max > 0.0 { delta / max } else { 0.0 };

    Hsv {
        h,
        s,
        v: max,
        a: color.w,
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Vec4 {
    let h = hsv.h.rem_euclid(HUE_CYCLE) / 60.0;
    let chroma = hsv.v * hsv.s;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = hsv.v - chroma;

    // rem_euclid can round up to exactly 360, which lands back in sector 0.
    let rgb = match (h.floor() as i32).rem_euclid(6) {
        0 => Vec3::new(chroma, x, 0.0),
        1 => Vec3::new(x, chroma, 0.0),
        2 => Vec3::new(0.0, chroma, x),
        3 => Vec3::new(0.0, x, chroma),
        4 => Vec3::new(x, 0.0, chroma),
        _ => Vec3::new(chroma, 0.0, x),
    };

    (rgb + Vec3::splat(m)).extend(hsv.a)
}

/// Rotates the hue of `color` by `degrees`, keeping saturation, value and alpha.
pub fn shift_hue(color: Vec4, degrees: f32) -> Vec4 {
    let mut hsv = rgb_to_hsv(color);
    hsv.h += degrees;
    hsv_to_rgb(hsv)
}
