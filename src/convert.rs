use crate::gamma;
use crate::types::{Rgb8, Rgba16, XYColor};

/* Wide-gamut XYZ -> RGB, from the Hue color conversion guide */
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [1.656_492_0, -0.354_851, -0.255_038],
    [-0.707_196, 1.655_397_0, 0.036_152_0],
    [0.051_713_0, -0.121_364, 1.011_530_0],
];

/* Inverse of XYZ_TO_RGB, derived by hand */
#[allow(clippy::excessive_precision)]
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.664_511_594_963_000, 0.154_323_718_044_0, 0.162_028_409_539_0],
    [0.283_881_604_719_000, 0.668_433_604_075_0, 0.047_685_570_422_8],
    [8.810_313_563_21e-05, 0.072_309_504_902_2, 0.986_039_303_260_0],
];

/// Device brightness at full luminance (`Y == 1.0`).
pub const MAX_BRIGHTNESS: u8 = 254;

#[allow(clippy::suboptimal_flops)]
fn transform(m: &[[f32; 3]; 3], [a, b, c]: [f32; 3]) -> [f32; 3] {
    m.map(|row| a * row[0] + b * row[1] + c * row[2])
}

/// Gamma-encoded RGB for the given xy point and brightness, before
/// clamping and quantization.
///
/// Caller must guarantee `y != 0`.
fn xyy_to_encoded(x: f32, y: f32, bri: u8) -> [f32; 3] {
    let z = 1.0 - x - y;
    let lum = f32::from(bri) / f32::from(MAX_BRIGHTNESS);
    let xyz = [(lum / y) * x, lum, (lum / y) * z];

    transform(&XYZ_TO_RGB, xyz).map(gamma::encode)
}

/// Clamp to `0.0..=1.0` and scale to 16 bits, rounding half up.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn to16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * f32::from(u16::MAX) + 0.5) as u16
}

/// Clamp to `0.0..=1.0` and scale to 8 bits, rounding half up.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn to8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * f32::from(u8::MAX) + 0.5) as u8
}

/// Convert xy chromaticity and brightness (0-254) to 16-bit RGB.
///
/// A zero `y` has no defined luminance ratio, and maps to opaque black.
/// Nothing else is validated: out-of-gamut points are clamped per channel.
#[must_use]
pub fn xyy_to_rgb16(x: f32, y: f32, bri: u8) -> Rgba16 {
    if y == 0.0 {
        log::trace!("xy ({x}, {y}) has zero y, mapping to black");
        return Rgba16::BLACK;
    }

    let [r, g, b] = xyy_to_encoded(x, y, bri).map(to16);
    Rgba16::new(r, g, b)
}

/// Convert xy chromaticity and brightness (0-254) to 8-bit RGB.
///
/// Same as [`xyy_to_rgb16`], quantized to 8 bits per channel.
#[must_use]
pub fn xyy_to_rgb8(x: f32, y: f32, bri: u8) -> Rgb8 {
    if y == 0.0 {
        log::trace!("xy ({x}, {y}) has zero y, mapping to black");
        return Rgb8::BLACK;
    }

    let [r, g, b] = xyy_to_encoded(x, y, bri).map(to8);
    Rgb8::new(r, g, b)
}

/// Convert 8-bit sRGB to xy chromaticity and brightness (0-254).
///
/// Brightness is truncated, not rounded. Pure black has no chromaticity, and
/// maps to `(0, 0)` with zero brightness.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_xyy(r: u8, g: u8, b: u8) -> XYColor {
    let rgb = [r, g, b].map(|c| gamma::decode(f32::from(c) / f32::from(u8::MAX)));
    let [cx, cy, cz] = transform(&RGB_TO_XYZ, rgb);

    let sum = cx + cy + cz;
    if sum == 0.0 {
        log::trace!("rgb ({r}, {g}, {b}) has no chromaticity, mapping to black");
        return XYColor::BLACK;
    }

    XYColor::new(cx / sum, cy / sum, (cy * f32::from(MAX_BRIGHTNESS)) as u8)
}
