//! sRGB transfer functions.
//!
//! The thresholds differ between directions (0.0031308 on linear values,
//! 0.04045 on encoded values), and so do the comparison operators. Both are
//! kept exactly as the standard curve defines them.

/// Linear light to sRGB-encoded value.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::suboptimal_flops)]
pub fn encode(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        return 12.92 * c;
    }
    (1.055 * f64::from(c).powf(1.0 / 2.4) - 0.055) as f32
}

/// sRGB-encoded value (normalized to `0.0..=1.0`) to linear light.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn decode(c: f32) -> f32 {
    if c > 0.040_45 {
        return ((f64::from(c) + 0.055) / 1.055).powf(2.4) as f32;
    }
    c / 12.92
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{decode, encode};

    fn steps() -> impl Iterator<Item = f32> {
        (0..=1000u16).map(|i| f32::from(i) / 1000.0)
    }

    #[test]
    fn endpoints() {
        assert_eq!(encode(0.0), 0.0);
        assert_eq!(decode(0.0), 0.0);
        assert_abs_diff_eq!(encode(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(decode(1.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn linear_segments() {
        assert_eq!(encode(0.003_130_8), 12.92 * 0.003_130_8);
        assert_eq!(decode(0.040_45), 0.040_45 / 12.92);
    }

    #[test]
    fn encode_monotonic() {
        let mut last = encode(0.0);
        for c in steps() {
            let v = encode(c);
            assert!(v >= last, "encode({c}) = {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn decode_monotonic() {
        let mut last = decode(0.0);
        for c in steps() {
            let v = decode(c);
            assert!(v >= last, "decode({c}) = {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn encode_inverts_decode() {
        for c in steps() {
            assert_abs_diff_eq!(encode(decode(c)), c, epsilon = 1e-5);
        }
    }
}
