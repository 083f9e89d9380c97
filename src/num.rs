//! Decimal number definition and the basic arithmetic and comparison operations.

use crate::defs::Digit;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::magnitude::Magnitude;
use core::cmp::Ordering;

/// An exact signed decimal number of arbitrary precision.
///
/// The value is represented as a sequence of significant decimal digits, an
/// exponent, and a sign: `sign × digits × 10^exponent`. Trailing zero digits
/// are always folded into the exponent, and the digit sequence carries no
/// leading zeroes, so every value has exactly one representation. Zero is
/// stored with an empty digit sequence, exponent 0, and positive sign.
///
/// A `Decimal` is immutable; every operation returns a new value.
#[derive(Debug, Clone)]
pub struct Decimal {
    m: Magnitude,
    e: Exponent,
    s: Sign,
}

impl Decimal {
    /// Returns a new decimal with the value of zero.
    pub fn new() -> Self {
        Decimal {
            m: Magnitude::new(),
            e: 0,
            s: Sign::Pos,
        }
    }

    /// Constructs a decimal from its parts: the digits of the magnitude given
    /// most significant first, the exponent, and the sign. Digits must be in
    /// the range 0..=9.
    ///
    /// The result is normalized: leading zero digits are dropped, trailing
    /// zero digits are folded into the exponent, and a zero magnitude yields
    /// the canonical zero regardless of `e` and `s`.
    pub fn from_raw_parts(digits: &[Digit], e: Exponent, s: Sign) -> Self {
        let mut m = Magnitude::from_digits(digits);
        m.trunc_leading_zeroes();
        Self::from_magnitude(m, e, s)
    }

    // Canonicalization chokepoint: every constructor and operation builds its
    // result through this function.
    pub(crate) fn from_magnitude(mut m: Magnitude, e: Exponent, s: Sign) -> Self {
        let shift = m.trunc_trailing_zeroes();

        if m.is_empty() {
            Self::new()
        } else {
            Decimal {
                m,
                e: e.saturating_add(shift as Exponent),
                s,
            }
        }
    }

    /// Decomposes the decimal into the digits of its magnitude, the sign, and
    /// the exponent.
    pub fn to_raw_parts(&self) -> (&[Digit], Sign, Exponent) {
        (self.m.digits(), self.s, self.e)
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the exponent of `self`.
    #[inline]
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns true if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_empty()
    }

    /// Returns true if `self` is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.s.is_positive()
    }

    /// Returns true if `self` is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Returns a copy of `self` with the sign reversed. Zero is returned
    /// unchanged: it never carries a negative sign.
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Decimal {
                m: self.m.clone(),
                e: self.e,
                s: self.s.invert(),
            }
        }
    }

    /// Compares `self` to `d2`.
    ///
    /// The result is `Ordering::Equal` if and only if the two operands denote
    /// the same real number, regardless of how the digits are split between
    /// magnitude and exponent.
    pub fn cmp(&self, d2: &Self) -> Ordering {
        if self.s != d2.s {
            return if self.s.is_positive() {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let (pad1, pad2) = Self::align(self.e, d2.e);
        let ord = self.m.cmp_aligned(pad1, &d2.m, pad2);

        if self.s.is_negative() {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Adds `d2` to `self` and returns the result.
    pub fn add(&self, d2: &Self) -> Self {
        // operands of different signs reduce to subtraction
        if self.s != d2.s {
            return if self.s.is_positive() {
                self.sub(&d2.neg())
            } else {
                d2.sub(&self.neg())
            };
        }

        let e = self.e.min(d2.e);
        let (pad1, pad2) = Self::align(self.e, d2.e);
        let m = self.m.add_aligned(pad1, &d2.m, pad2);

        Self::from_magnitude(m, e, self.s)
    }

    /// Subtracts `d2` from `self` and returns the result.
    pub fn sub(&self, d2: &Self) -> Self {
        if d2.is_negative() {
            return self.add(&d2.neg());
        }

        if self.is_negative() {
            return d2.add(&self.neg()).neg();
        }

        if self.cmp(d2) == Ordering::Less {
            return d2.sub(self).neg();
        }

        // both operands are non-negative and the minuend is not smaller
        let e = self.e.min(d2.e);
        let (pad1, pad2) = Self::align(self.e, d2.e);
        let m = self.m.sub_aligned(pad1, &d2.m, pad2);

        Self::from_magnitude(m, e, Sign::Pos)
    }

    // Numbers of trailing zeroes which align both operands at the smaller of
    // the two exponents.
    fn align(e1: Exponent, e2: Exponent) -> (usize, usize) {
        let e = e1.min(e2);
        (
            (e1 as i64 - e as i64) as usize,
            (e2 as i64 - e as i64) as usize,
        )
    }
}
