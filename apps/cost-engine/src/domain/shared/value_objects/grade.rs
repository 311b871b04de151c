//! Egg grade and per-grade count value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality tier for collected eggs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EggGrade {
    /// Grade A - premium tier.
    A,
    /// Grade B - standard tier.
    B,
    /// Grade C - discount tier.
    C,
}

impl EggGrade {
    /// Fixed sale markup over total cost per egg for this grade.
    ///
    /// The markups are business constants (25% / 20% / 15%), not
    /// per-request parameters.
    #[must_use]
    pub const fn markup(&self) -> Decimal {
        match self {
            Self::A => Decimal::from_parts(125, 0, 0, false, 2),
            Self::B => Decimal::from_parts(120, 0, 0, false, 2),
            Self::C => Decimal::from_parts(115, 0, 0, false, 2),
        }
    }
}

impl fmt::Display for EggGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Egg counts by grade for one production log row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggCounts {
    /// Grade A count.
    pub grade_a: u32,
    /// Grade B count.
    pub grade_b: u32,
    /// Grade C count.
    pub grade_c: u32,
}

impl EggCounts {
    /// Create counts from per-grade figures.
    #[must_use]
    pub const fn new(grade_a: u32, grade_b: u32, grade_c: u32) -> Self {
        Self {
            grade_a,
            grade_b,
            grade_c,
        }
    }

    /// Total eggs across all grades.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.grade_a as u64 + self.grade_b as u64 + self.grade_c as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn grade_markups() {
        assert_eq!(EggGrade::A.markup(), dec!(1.25));
        assert_eq!(EggGrade::B.markup(), dec!(1.20));
        assert_eq!(EggGrade::C.markup(), dec!(1.15));
    }

    #[test]
    fn grade_markups_strictly_ordered() {
        assert!(EggGrade::A.markup() > EggGrade::B.markup());
        assert!(EggGrade::B.markup() > EggGrade::C.markup());
    }

    #[test]
    fn grade_display() {
        assert_eq!(format!("{}", EggGrade::A), "A");
        assert_eq!(format!("{}", EggGrade::B), "B");
        assert_eq!(format!("{}", EggGrade::C), "C");
    }

    #[test]
    fn egg_counts_total() {
        let counts = EggCounts::new(100, 40, 20);
        assert_eq!(counts.total(), 160);
    }

    #[test]
    fn egg_counts_default_is_zero() {
        assert_eq!(EggCounts::default().total(), 0);
    }

    #[test]
    fn egg_counts_total_does_not_overflow_u32() {
        let counts = EggCounts::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(counts.total(), u64::from(u32::MAX) * 3);
    }
}
