// Host-side property tests for the per-item frame math.

use carousel_core::*;

fn ring(n: usize) -> RingGeometry {
    CarouselConfig::default().validate(n).unwrap().0
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

const ROTATIONS: [f64; 8] = [-98765.4, -1000.5, -37.0, 0.0, 12.3, 142.0, 359.9, 98765.4];

#[test]
fn frame_is_periodic_in_full_turns() {
    let r = ring(5);
    for &rotation in &ROTATIONS {
        for index in 0..5 {
            let a = compute_frame(rotation, index, &r);
            for turns in [-3.0, 1.0, 2.0] {
                let b = compute_frame(rotation + 360.0 * turns, index, &r);
                assert!(close(a.x, b.x, 1e-6), "x at {rotation} #{index}");
                assert!(close(a.z, b.z, 1e-6), "z at {rotation} #{index}");
                assert!(close(a.scale, b.scale, 1e-9));
                assert!(close(a.brightness, b.brightness, 1e-9));
                assert!(close(a.tilt_deg, b.tilt_deg, 1e-6), "tilt at {rotation} #{index}");
                assert_eq!(a.is_front, b.is_front);
            }
        }
    }
}

#[test]
fn frame_is_bitwise_idempotent() {
    let r = ring(6);
    for &rotation in &ROTATIONS {
        for index in 0..6 {
            let a = compute_frame(rotation, index, &r);
            let b = compute_frame(rotation, index, &r);
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());
            assert_eq!(a.brightness.to_bits(), b.brightness.to_bits());
            assert_eq!(a.tilt_deg.to_bits(), b.tilt_deg.to_bits());
            assert_eq!(a, b);
        }
    }
}

#[test]
fn scale_and_brightness_peak_at_front_and_bottom_out_at_back() {
    // A single-item ring makes the item's angle equal to the rotation.
    let r = ring(1);
    let front = compute_frame(0.0, 0, &r);
    let back = compute_frame(180.0, 0, &r);
    assert!(close(front.scale, 1.0, 1e-12));
    assert!(close(front.brightness, r.max_brightness, 1e-12));
    assert!(close(back.scale, 0.6, 1e-12));
    assert!(close(back.brightness, r.min_brightness, 1e-12));

    for deg in (1..360).filter(|d| *d != 180) {
        let f = compute_frame(deg as f64, 0, &r);
        assert!(f.scale < front.scale && f.scale > back.scale, "scale at {deg}");
        assert!(
            f.brightness < front.brightness && f.brightness > back.brightness,
            "brightness at {deg}"
        );
    }
}

#[test]
fn brightness_follows_configured_range() {
    let (r, _) = CarouselConfig {
        min_brightness: 0.3,
        ..Default::default()
    }
    .validate(1)
    .unwrap();
    assert!(close(compute_frame(180.0, 0, &r).brightness, 0.3, 1e-12));
    assert!(close(compute_frame(90.0, 0, &r).brightness, 0.65, 1e-9));
    assert!(close(compute_frame(0.0, 0, &r).brightness, 1.0, 1e-12));
}

#[test]
fn tilt_flips_only_on_the_right_half() {
    let r = ring(1);
    let mut prev = compute_frame(0.0, 0, &r);
    for deg in 1..=90 {
        let f = compute_frame(deg as f64, 0, &r);
        assert!(f.x > prev.x);
        assert!(f.tilt_deg >= prev.tilt_deg, "tilt decreased at {deg}");
        prev = f;
    }
    // Fully to the right the flip term saturates at 180.
    assert!(close(prev.tilt_deg, r.max_tilt_deg + 180.0, 1e-9));

    for deg in 180..360 {
        let f = compute_frame(deg as f64, 0, &r);
        if f.x <= 0.0 {
            let linear = f.x / r.radius * r.max_tilt_deg;
            assert!(close(f.tilt_deg, linear, 1e-12), "flip term present at {deg}");
        }
    }
}

#[test]
fn front_zone_threshold() {
    let r = ring(1);
    // cos(25 deg) = 0.906 > 0.9, cos(26 deg) = 0.899 < 0.9
    assert!(compute_frame(25.0, 0, &r).is_front);
    assert!(compute_frame(-25.0, 0, &r).is_front);
    assert!(!compute_frame(26.0, 0, &r).is_front);
    assert!(!compute_frame(-26.0, 0, &r).is_front);
}

#[test]
fn items_are_evenly_spaced() {
    let r = ring(5);
    for index in 0..5 {
        let f = compute_frame(0.0, index, &r);
        assert!(close(f.angle_deg, index as f64 * 72.0, 1e-9));
        assert!(close(f.position().length(), r.radius, 1e-9));
    }
}

#[test]
fn stack_order_is_rounded_depth() {
    let r = ring(5);
    for &rotation in &ROTATIONS {
        for index in 0..5 {
            let f = compute_frame(rotation, index, &r);
            assert_eq!(f.stack_order, f.z.round() as i32);
        }
    }
}
