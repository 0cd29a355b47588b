use std::ops::{Add, Mul};

/// Integer pixel coordinate, also used for pixel extents and strides.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    #[must_use]
    pub fn area(&self) -> i64 {
        i64::from(self.x) * i64::from(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Mul<i32> for Point {
    type Output = Self;

    fn mul(self, factor: i32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}
