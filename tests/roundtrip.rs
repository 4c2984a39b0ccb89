use approx::assert_abs_diff_eq;

use huecolor::{rgb_to_xyy, xyy_to_rgb16, xyy_to_rgb8, Rgb8, XYColor, XY};

/* in-gamut points, away from the clipped edges of the bulb gamut */
const POINTS: [XYColor; 4] = [
    XYColor::new(0.4962, 0.4151, 143),
    XYColor::new(0.2, 0.6, 100),
    XYColor::new(0.4, 0.4, 200),
    XYColor::new(0.25, 0.45, 160),
];

fn assert_close(expected: XYColor, actual: XYColor) {
    assert_abs_diff_eq!(expected.x, actual.x, epsilon = 0.001);
    assert_abs_diff_eq!(expected.y, actual.y, epsilon = 0.001);
    assert!(
        expected.bri.abs_diff(actual.bri) <= 3,
        "brightness {} too far from {}",
        actual.bri,
        expected.bri
    );
}

#[test]
fn single_round_trip() {
    for xy0 in POINTS {
        let rgb = Rgb8::from(xy0.rgba());
        let xy1 = XYColor::from(rgb);
        assert_close(xy0, xy1);
    }
}

#[test]
fn double_round_trip() {
    for xy0 in POINTS {
        let Rgb8 { r, g, b } = Rgb8::from(xyy_to_rgb16(xy0.x, xy0.y, xy0.bri));
        let xy1 = rgb_to_xyy(r, g, b);
        assert_close(xy0, xy1);

        let Rgb8 { r, g, b } = xyy_to_rgb8(xy1.x, xy1.y, xy1.bri);
        let xy2 = rgb_to_xyy(r, g, b);
        assert_close(xy0, xy2);
    }
}

#[test]
fn degenerate_y_is_black() {
    assert_eq!(xyy_to_rgb16(0.7, 0.0, 200).rgba(), (0, 0, 0, 0xffff));
    assert_eq!(xyy_to_rgb8(0.7, 0.0, 200), Rgb8::BLACK);
}

#[test]
fn black_round_trips_to_black() {
    let xy = rgb_to_xyy(0, 0, 0);
    assert_eq!(xy, XYColor::BLACK);
    assert_eq!(xy.rgb(), Rgb8::BLACK);
}

#[test]
fn white_point() {
    /* the bulb matrix puts sRGB white slightly red of D65 */
    let xy = rgb_to_xyy(255, 255, 255).xy();
    assert_abs_diff_eq!(xy.x, 0.3227, epsilon = 0.001);
    assert_abs_diff_eq!(xy.y, XY::D65_WHITE_POINT.y, epsilon = 0.001);
    assert!(xy.x > XY::D65_WHITE_POINT.x);
    assert_eq!(rgb_to_xyy(255, 255, 255).bri, 254);
}

#[test]
fn channels_bounded_over_grid() {
    for xi in 0..=20u8 {
        for yi in 1..=20u8 {
            let (x, y) = (f32::from(xi) / 20.0, f32::from(yi) / 20.0);
            for bri in [1, 64, 254, 255] {
                let wide = xyy_to_rgb16(x, y, bri);
                let narrow = xyy_to_rgb8(x, y, bri);
                assert_eq!(wide.a, 0xffff);
                assert!(Rgb8::from(wide).r.abs_diff(narrow.r) <= 1);
                assert!(Rgb8::from(wide).g.abs_diff(narrow.g) <= 1);
                assert!(Rgb8::from(wide).b.abs_diff(narrow.b) <= 1);
            }
        }
    }
}

#[test]
fn hex_input() {
    let xy = XYColor::from("#ffffff".parse::<Rgb8>().unwrap());
    assert_eq!(xy, rgb_to_xyy(255, 255, 255));
}
