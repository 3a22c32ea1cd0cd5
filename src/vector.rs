/*
 * Vector Module
 *
 * A small 2D vector type used for boid positions, velocities and steering
 * forces. All operations are value-based; the zero vector is handled
 * explicitly so that normalization never produces NaN components.
 */

/// A 2D vector with `f32` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::ZERO
        }
    }

    /// Vector in the same direction with the given length, or zero for the
    /// zero vector.
    pub fn with_magnitude(&self, magnitude: f32) -> Self {
        self.normalize() * magnitude
    }

    /// Caps the length at `max`; shorter vectors are returned unchanged.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: Vector2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn dot(&self, other: Vector2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Rotates the vector counter-clockwise by `angle` radians.
    pub fn rotate(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Angle of the vector in radians, measured from the positive x-axis.
    pub fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn magnitude_of_a_3_4_vector_is_5() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn normalize_produces_a_unit_vector() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-5);
        assert!((normalized.x - 0.6).abs() < 1e-5);
        assert!((normalized.y - 0.8).abs() < 1e-5);
    }

    #[test]
    fn normalizing_the_zero_vector_stays_zero() {
        assert_eq!(Vector2D::ZERO.normalize(), Vector2D::ZERO);
        assert_eq!(Vector2D::ZERO.with_magnitude(5.0), Vector2D::ZERO);
    }

    #[test]
    fn with_magnitude_rescales_to_the_requested_length() {
        let v = Vector2D::new(0.0, 2.0).with_magnitude(5.0);
        assert!((v.magnitude() - 5.0).abs() < 1e-5);
        assert!((v.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn limit_caps_long_vectors_and_keeps_short_ones() {
        let long = Vector2D::new(10.0, 0.0).limit(5.0);
        assert_eq!(long, Vector2D::new(5.0, 0.0));

        let short = Vector2D::new(1.0, 2.0);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn distance_between_two_points() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn dot_product_of_orthogonal_vectors_is_zero() {
        let a = Vector2D::new(1.0, 0.0);
        let b = Vector2D::new(0.0, 3.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.dot(Vector2D::new(2.0, 7.0)), 2.0);
    }

    #[test]
    fn rotate_by_a_quarter_turn() {
        let v = Vector2D::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn heading_measures_the_angle_from_the_x_axis() {
        assert_eq!(Vector2D::new(1.0, 0.0).heading(), 0.0);
        assert!((Vector2D::new(0.0, 1.0).heading() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn arithmetic_operators() {
        let a = Vector2D::new(1.0, 2.0);
        let b = Vector2D::new(3.0, 4.0);

        assert_eq!(a + b, Vector2D::new(4.0, 6.0));
        assert_eq!(b - a, Vector2D::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vector2D::new(1.5, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector2D::new(4.0, 6.0));
    }
}
