//! Easing functions for animations

/// CSS-compatible cubic bezier easing curve, anchored at (0, 0) and (1, 1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Easing {
    /// CSS `ease-in-out`, the smooth curve used by eased dot styles
    pub const STANDARD_EASE_IN_OUT: Easing = Easing::cubic_bezier(0.42, 0.0, 0.58, 1.0);

    /// Curve with control points (x1, y1) and (x2, y2)
    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        cubic_bezier_ease(t, self.x1, self.y1, self.x2, self.y2)
    }
}

/// Cubic bezier easing calculation (matches CSS timing functions).
///
/// Newton-Raphson with a bisection fallback, computed in f64.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..30 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³, in Horner form
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let easings = [
            Easing::STANDARD_EASE_IN_OUT,
            Easing::cubic_bezier(0.25, 0.1, 0.25, 1.0),
            Easing::cubic_bezier(0.0, 0.0, 1.0, 1.0),
        ];
        for easing in easings {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_standard_ease_in_out_is_symmetric() {
        let e = Easing::STANDARD_EASE_IN_OUT;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_standard_ease_in_out_is_monotonic() {
        let e = Easing::STANDARD_EASE_IN_OUT;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        // Slow start and finish
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
    }
}
