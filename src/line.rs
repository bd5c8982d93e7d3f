use std::fmt;
use std::ops::{Add, Mul};

use crate::field::Field;

/// Maximum distance, in rows, at which a field still counts as lying on a
/// real-valued line.
pub const COLLINEARITY_TOLERANCE: f64 = 0.1;

/// Linear function `row = slope * column + intercept`.
///
/// `Line<i32>` describes the attack diagonals of a queen, `Line<f64>` the line
/// through two arbitrary queens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line<T> {
    slope: T,
    intercept: T,
}

impl<T: Copy> Line<T> {
    pub const fn new(slope: T, intercept: T) -> Self {
        Line { slope, intercept }
    }

    pub fn slope(&self) -> T {
        self.slope
    }

    pub fn intercept(&self) -> T {
        self.intercept
    }
}

impl<T> Line<T>
where
    T: Copy + Mul<Output = T> + Add<Output = T>,
{
    #[inline]
    pub fn value(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl Line<i32> {
    /// The +45° diagonal through `field`.
    pub fn ascending_diagonal(field: Field) -> Self {
        Line::new(1, field.row() as i32 - field.column() as i32)
    }

    /// The −45° diagonal through `field`.
    pub fn descending_diagonal(field: Field) -> Self {
        Line::new(-1, field.row() as i32 + field.column() as i32)
    }
}

impl Line<f64> {
    /// The line through two fields, or `None` when they share a column.
    pub fn through(a: Field, b: Field) -> Option<Self> {
        if a.column() == b.column() {
            return None;
        }
        let dx = b.column() as f64 - a.column() as f64;
        let dy = b.row() as f64 - a.row() as f64;
        let slope = dy / dx;
        Some(Line::new(slope, a.row() as f64 - slope * a.column() as f64))
    }

    /// True if `field` lies on the line, within [`COLLINEARITY_TOLERANCE`].
    #[inline]
    pub fn contains(&self, field: Field) -> bool {
        (self.value(field.column() as f64) - field.row() as f64).abs() < COLLINEARITY_TOLERANCE
    }
}

impl<T: fmt::Display> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y={}x{:+}", self.slope, self.intercept)
    }
}
