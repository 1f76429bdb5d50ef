use crate::error::{IbdError, IbdResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lower_left: [f64; 3],
    pub upper_right: [f64; 3],
    pub center: [f64; 3],
    pub width: [f64; 3],
}

impl BoundingBox {
    pub fn new(lower_left: [f64; 3], upper_right: [f64; 3]) -> Self {
        let center = [
            0.5 * (lower_left[0] + upper_right[0]),
            0.5 * (lower_left[1] + upper_right[1]),
            0.5 * (lower_left[2] + upper_right[2]),
        ];
        let width = [
            upper_right[0] - lower_left[0],
            upper_right[1] - lower_left[1],
            upper_right[2] - lower_left[2],
        ];
        BoundingBox {
            lower_left,
            upper_right,
            center,
            width,
        }
    }

    /// Origin-centred box spanning `[-h, h]` along each axis.
    pub fn from_half_dimensions(half: [f64; 3]) -> IbdResult<Self> {
        if half.iter().any(|h| !h.is_finite() || *h < 0.0) {
            return Err(IbdError::Config(format!(
                "half-dimensions must be finite and non-negative, got {:?}",
                half
            )));
        }
        Ok(Self::new([-half[0], -half[1], -half[2]], half))
    }

    pub fn half_width(&self, axis: usize) -> f64 {
        0.5 * self.width[axis]
    }

    pub fn contains(&self, point: [f64; 3]) -> bool {
        (0..3).all(|i| point[i] >= self.lower_left[i] && point[i] <= self.upper_right[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_box() {
        let bb = BoundingBox::new([0.0, -1.0, 2.0], [2.0, 1.0, 6.0]);
        assert_eq!(bb.center, [1.0, 0.0, 4.0]);
        assert_eq!(bb.width, [2.0, 2.0, 4.0]);
        assert_eq!(bb.half_width(2), 2.0);
    }

    #[test]
    fn test_from_half_dimensions() {
        let bb = BoundingBox::from_half_dimensions([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(bb.lower_left, [-1.0, -2.0, -3.0]);
        assert_eq!(bb.upper_right, [1.0, 2.0, 3.0]);
        assert_eq!(bb.center, [0.0, 0.0, 0.0]);
        assert!(bb.contains([0.9, -1.9, 2.9]));
        assert!(!bb.contains([1.1, 0.0, 0.0]));
    }

    #[test]
    fn test_negative_half_dimension_rejected() {
        assert!(BoundingBox::from_half_dimensions([1.0, -2.0, 3.0]).is_err());
        assert!(BoundingBox::from_half_dimensions([f64::NAN, 2.0, 3.0]).is_err());
    }
}
