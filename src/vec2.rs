/*
 * Vector Module
 *
 * This module defines the 2D vector type used throughout the simulation.
 * Field vectors, particle positions, and displacements are all Vec2 values.
 *
 * The simulation runs in f64 so that field generation is bit-for-bit
 * reproducible for a given noise seed; positions are only narrowed to f32
 * at draw time.
 */

// 2D vector with value semantics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    // Length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    // Scale to unit length. Precondition: the vector is non-zero; a
    // zero-length input divides by zero and yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    // Angle of the vector in radians, measured from the positive x axis
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    // Build a unit vector from an angle by normalizing (1, tan(a)).
    // The x component is always positive, so the resulting angle is only
    // the requested one modulo pi. The field generator depends on this
    // exact construction; do not swap it for (cos(a), sin(a)).
    pub fn from_angle(a: f64) -> Self {
        Self::new(1.0, a.tan()).normalize()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        self * (1.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a + b, Vec2::new(4.0, -2.0));
        assert_eq!(a - b, Vec2::new(-2.0, 6.0));
    }

    #[test]
    fn scale_by_one_is_identity() {
        let v = Vec2::new(3.5, -7.25);
        assert_eq!(v * 1.0, v);
    }

    #[test]
    fn divide_is_inverse_of_multiply() {
        let v = Vec2::new(8.0, -6.0);
        let w = (v * 4.0) / 4.0;
        assert!((w.x - v.x).abs() < TOL);
        assert!((w.y - v.y).abs() < TOL);
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        assert!((Vec2::new(3.0, 4.0).magnitude() - 5.0).abs() < TOL);
    }

    #[test]
    fn normalize_yields_unit_length() {
        let v = Vec2::new(-12.0, 5.0).normalize();
        assert!((v.magnitude() - 1.0).abs() < TOL);
    }

    #[test]
    fn angle_matches_atan2() {
        let v = Vec2::new(0.0, 2.0);
        assert!((v.angle() - std::f64::consts::FRAC_PI_2).abs() < TOL);
        let v = Vec2::new(-1.0, 0.0);
        assert!((v.angle() - std::f64::consts::PI).abs() < TOL);
    }

    #[test]
    fn from_angle_is_unit_length() {
        for a in [0.0, 0.3, 1.0, 2.0, 3.0, -1.5, 6.0] {
            let v = Vec2::from_angle(a);
            assert!(
                (v.magnitude() - 1.0).abs() < TOL,
                "from_angle({a}) has magnitude {}",
                v.magnitude()
            );
        }
    }

    #[test]
    fn from_angle_recovers_first_quadrant_angles() {
        let a = 0.7;
        assert!((Vec2::from_angle(a).angle() - a).abs() < TOL);
    }

    #[test]
    fn from_angle_folds_left_half_plane() {
        // The tan-based construction always has positive x, so an angle in
        // the second quadrant comes back reflected into the fourth.
        let a = 3.0 * std::f64::consts::FRAC_PI_4;
        let v = Vec2::from_angle(a);
        assert!(v.x > 0.0);
        assert!((v.angle() - (a - std::f64::consts::PI)).abs() < TOL);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn component() -> impl Strategy<Value = f64> {
            -1.0e6_f64..1.0e6
        }

        proptest! {
            #[test]
            fn add_is_commutative(
                ax in component(), ay in component(),
                bx in component(), by in component(),
            ) {
                let a = Vec2::new(ax, ay);
                let b = Vec2::new(bx, by);
                prop_assert_eq!(a + b, b + a);
            }

            #[test]
            fn add_is_associative(
                ax in component(), ay in component(),
                bx in component(), by in component(),
                cx in component(), cy in component(),
            ) {
                let a = Vec2::new(ax, ay);
                let b = Vec2::new(bx, by);
                let c = Vec2::new(cx, cy);
                let lhs = (a + b) + c;
                let rhs = a + (b + c);
                prop_assert!((lhs.x - rhs.x).abs() < 1e-6);
                prop_assert!((lhs.y - rhs.y).abs() < 1e-6);
            }

            #[test]
            fn normalize_nonzero_has_unit_magnitude(
                x in component(), y in component(),
            ) {
                prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
                let m = Vec2::new(x, y).normalize().magnitude();
                prop_assert!((m - 1.0).abs() < 1e-9, "magnitude was {m}");
            }

            #[test]
            fn from_angle_unit_for_finite_angles(a in -100.0_f64..100.0) {
                let m = Vec2::from_angle(a).magnitude();
                prop_assert!((m - 1.0).abs() < 1e-9, "magnitude was {m}");
            }
        }
    }
}
