//! A 2-dimensional vector/point.

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

impl V2 {
    pub const ZERO: V2 = V2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> V2 {
        V2 { x, y }
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Normalize this vector.
    ///
    /// A zero vector has no direction and produces NaNs; callers which might have one should check
    /// [crate::tolerance::is_zero_length] first.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2 {
        let l = self.length();
        V2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    pub fn dot(&self, other: &V2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3d cross product of `self` and `other`.
    ///
    /// Positive when `other` is counterclockwise of `self`.
    pub fn cross(&self, other: &V2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate this vector a quarter turn counterclockwise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn perpendicular(self) -> V2 {
        V2::new(-self.y, self.x)
    }

    pub fn distance_squared(&self, other: &V2) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance(&self, other: &V2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotate this point by `angle` radians counterclockwise about `center`:
    ///
    /// `x' = (x-cx)cos - (y-cy)sin + cx`, `y' = (x-cx)sin + (y-cy)cos + cy`.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotate_around(self, angle: f64, center: V2) -> V2 {
        let (sin, cos) = angle.sin_cos();
        let shifted = self - center;
        V2 {
            x: shifted.x * cos - shifted.y * sin + center.x,
            y: shifted.x * sin + shifted.y * cos + center.y,
        }
    }
}

impl From<(f64, f64)> for V2 {
    fn from((x, y): (f64, f64)) -> V2 {
        V2::new(x, y)
    }
}

impl std::ops::Add for V2 {
    type Output = V2;

    fn add(self, rhs: V2) -> V2 {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for V2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for V2 {
    type Output = V2;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::ops::MulAssign<f64> for V2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl std::ops::Div<f64> for V2 {
    type Output = V2;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl std::ops::DivAssign<f64> for V2 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl std::ops::Neg for V2 {
    type Output = V2;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Sub for V2 {
    type Output = V2;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl std::ops::SubAssign for V2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
