use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{self, MAX_BRIGHTNESS};
use crate::error::{ColorError, ColorResult};

/// Chromaticity pair, as found in `color.xy` of the hue api.
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    /// sRGB white. The bulb matrix maps `#ffffff` slightly red of this point.
    pub const D65_WHITE_POINT: Self = Self {
        x: 0.31271,
        y: 0.32902,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Chromaticity plus device brightness (0-254), as used by hue bulbs.
///
/// Values are not validated on construction, and conversions accept any
/// input. Use [`XYColor::validate`] where a physically valid point is needed.
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct XYColor {
    pub x: f32,
    pub y: f32,
    pub bri: u8,
}

impl XYColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0);

    #[must_use]
    pub const fn new(x: f32, y: f32, bri: u8) -> Self {
        Self { x, y, bri }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_xy(xy: XY, bri: u8) -> Self {
        Self::new(xy.x as f32, xy.y as f32, bri)
    }

    #[must_use]
    pub fn xy(&self) -> XY {
        XY::new(f64::from(self.x), f64::from(self.y))
    }

    #[must_use]
    pub fn rgba(&self) -> Rgba16 {
        convert::xyy_to_rgb16(self.x, self.y, self.bri)
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb8 {
        convert::xyy_to_rgb8(self.x, self.y, self.bri)
    }

    /// Brightness on the 0-100 scale of the hue v2 `dimming` object.
    #[must_use]
    pub fn brightness_percent(&self) -> f64 {
        f64::from(self.bri) / f64::from(MAX_BRIGHTNESS) * 100.0
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with_brightness_percent(self, pct: f64) -> Self {
        let bri = (pct.clamp(0.0, 100.0) / 100.0 * f64::from(MAX_BRIGHTNESS)).round() as u8;
        Self { bri, ..self }
    }

    /// Check that the point lies inside the unit triangle of the CIE
    /// diagram, and that brightness is on the 0-254 scale.
    pub fn validate(&self) -> ColorResult<()> {
        let Self { x, y, bri } = *self;

        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) || x + y > 1.0 {
            return Err(ColorError::Chromaticity { x, y });
        }

        if bri > MAX_BRIGHTNESS {
            return Err(ColorError::Brightness(bri));
        }

        Ok(())
    }
}

impl From<Rgb8> for XYColor {
    fn from(value: Rgb8) -> Self {
        convert::rgb_to_xyy(value.r, value.g, value.b)
    }
}

/// 8-bit sRGB triple.
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<XYColor> for Rgb8 {
    fn from(value: XYColor) -> Self {
        value.rgb()
    }
}

/* 0xffff / 0xff == 257, so this is the exact inverse of bit replication */
impl From<Rgba16> for Rgb8 {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: Rgba16) -> Self {
        Self {
            r: (value.r / 257) as u8,
            g: (value.g / 257) as u8,
            b: (value.b / 257) as u8,
        }
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    /// Parse `#rrggbb` or `#rgb`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ColorError::HexDigit(c))
            })
            .collect::<ColorResult<Vec<u8>>>()?;

        match *digits.as_slice() {
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ColorError::HexLength(digits.len())),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 16-bit sRGB with alpha. Colors produced by this crate are always opaque.
#[derive(Copy, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba16 {
    pub const OPAQUE: u16 = 0xffff;
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self {
            r,
            g,
            b,
            a: Self::OPAQUE,
        }
    }

    /// Channels widened to `u32`, still on the 16-bit scale.
    #[must_use]
    pub fn rgba(&self) -> (u32, u32, u32, u32) {
        (
            u32::from(self.r),
            u32::from(self.g),
            u32::from(self.b),
            u32::from(self.a),
        )
    }
}

impl From<XYColor> for Rgba16 {
    fn from(value: XYColor) -> Self {
        value.rgba()
    }
}
