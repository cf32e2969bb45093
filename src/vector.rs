//! Small 2D vector types.
//!
//! [`Vec2`] is the floating-point point/vector used for simulation and
//! pixel coordinates. [`IVec2`] holds discrete grid coordinates such as the
//! window size; its `divide` and `normalize` produce a [`Vec2`].

use std::ops::{Add, Mul, Sub};

use crate::error::{FoucaultError, Result};

/// Floating-point 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector with both components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    pub fn sub(self, other: Self) -> Self {
        self.add(other.scale(-1.0))
    }

    /// Multiply both components by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Divide both components by `k`.
    pub fn divide(self, k: f64) -> Result<Self> {
        if k == 0.0 {
            return Err(FoucaultError::division_by_zero("Vec2::divide"));
        }
        Ok(self.scale(1.0 / k))
    }

    /// Euclidean norm.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector pointing the same way. Fails for the zero vector.
    pub fn normalize(self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(FoucaultError::division_by_zero("Vec2::normalize"));
        }
        self.divide(magnitude)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

/// Integer 2D vector for discrete grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IVec2 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl IVec2 {
    /// Create a vector from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a vector with both components set to `v`.
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference.
    pub fn sub(self, other: Self) -> Self {
        self.add(other.scale(-1))
    }

    /// Multiply both components by `k`.
    pub fn scale(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Divide both components by `k`, yielding a float vector.
    pub fn divide(self, k: i32) -> Result<Vec2> {
        if k == 0 {
            return Err(FoucaultError::division_by_zero("IVec2::divide"));
        }
        Ok(self.to_vec2().scale(1.0 / f64::from(k)))
    }

    /// Euclidean norm.
    pub fn magnitude(self) -> f64 {
        self.to_vec2().magnitude()
    }

    /// Unit vector pointing the same way. Fails for the zero vector.
    pub fn normalize(self) -> Result<Vec2> {
        self.to_vec2()
            .normalize()
            .map_err(|_| FoucaultError::division_by_zero("IVec2::normalize"))
    }

    /// Convert to a float vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<IVec2> for Vec2 {
    fn from(v: IVec2) -> Self {
        v.to_vec2()
    }
}
