/// Utility functions for interpolation and 3-vector geometry
use nalgebra::Vector3;

/// Linear interpolation over an ascending table.
///
/// Scans from the second node for the first `x[i] >= x_new` and interpolates
/// on `[x[i-1], x[i]]`. Values below `x[0]` match the first bracket, so the
/// first segment is extended linearly below range. Values above the last
/// node return the last `y` unchanged.
///
/// Tables with fewer than two points return the single value or NaN.
pub fn interpolate_linear(x: &[f64], y: &[f64], x_new: f64) -> f64 {
    if x.is_empty() {
        return f64::NAN;
    }
    if x.len() == 1 {
        return y[0];
    }

    for i in 1..x.len() {
        if x_new <= x[i] {
            let x1 = x[i - 1];
            let x2 = x[i];
            let t = (x_new - x1) / (x2 - x1);
            // Written as a weighted sum so nodes (t = 0 or 1) come back exactly
            return y[i - 1] * (1.0 - t) + y[i] * t;
        }
    }

    y[y.len() - 1]
}

/// A vector orthogonal to `v`, built from its two largest components.
///
/// Same construction as CLHEP's `Hep3Vector::orthogonal`; not normalised.
pub fn orthogonal(v: &Vector3<f64>) -> Vector3<f64> {
    let x = v.x.abs();
    let y = v.y.abs();
    let z = v.z.abs();

    if x < y {
        if x < z {
            Vector3::new(0.0, v.z, -v.y)
        } else {
            Vector3::new(v.y, -v.x, 0.0)
        }
    } else if y < z {
        Vector3::new(-v.z, 0.0, v.x)
    } else {
        Vector3::new(v.y, -v.x, 0.0)
    }
}

/// Evenly spaced points over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the last point so rounding never leaves the range
            out[n - 1] = stop;
            out
        }
    }
}
