/*
 * Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Numeric traits for capacities and flow values.

use crate::num::traits::{NumAssign, Signed};

use std::fmt::{Debug, Display};

/// A number type usable for capacities and flows.
///
/// Flow values are snapped to `0` or to the capacity of an edge if they are
/// within `tolerance()` of these bounds. For integer types the tolerance is
/// zero, so no snapping ever happens and the computation is exact.
pub trait FlowNum: NumAssign + Signed + PartialOrd + Copy + Debug + Display {
    /// The snapping tolerance of this number type.
    fn tolerance() -> Self;

    /// Return `true` if `self` and `other` differ by at most `tolerance()`.
    fn approx_eq(self, other: Self) -> bool {
        (self - other).abs() <= Self::tolerance()
    }

    /// Return `true` if `self` is a comparable number (i.e. not NaN).
    fn is_comparable(self) -> bool {
        self.partial_cmp(&self).is_some()
    }
}

macro_rules! exact_flownum {
    ($($t:ty),*) => {
        $(
            impl FlowNum for $t {
                fn tolerance() -> Self {
                    0
                }
            }
        )*
    };
}

exact_flownum!(i8, i16, i32, i64, i128, isize);

impl FlowNum for f64 {
    fn tolerance() -> Self {
        1e-10
    }
}

impl FlowNum for f32 {
    fn tolerance() -> Self {
        1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::FlowNum;

    #[test]
    fn test_tolerance() {
        assert_eq!(i32::tolerance(), 0);
        assert!(3i64.approx_eq(3));
        assert!(!3i64.approx_eq(4));

        assert!(1.0f64.approx_eq(1.0 + 1e-11));
        assert!(!1.0f64.approx_eq(1.0 + 1e-9));
        assert!((0.1f64 + 0.2).approx_eq(0.3));
    }

    #[test]
    fn test_nan() {
        assert!(1.5f64.is_comparable());
        assert!(!f64::NAN.is_comparable());
        assert!(!f32::NAN.is_comparable());
        assert!(7i32.is_comparable());
    }
}
