//! Arbitrary precision signed decimal numbers implemented purely in Rust.
//!
//! A [`Decimal`] represents a decimal quantity exactly: the value is a
//! sequence of significant decimal digits together with a power-of-ten
//! exponent and a sign, so integers and decimal fractions carry no binary
//! rounding error. Addition, subtraction, negation, ordering comparison, and
//! saturating conversion to the native numeric types are supported.
//!
//! ```
//! use precise_dec::Decimal;
//!
//! let a = Decimal::parse("0.1").unwrap();
//! let b = Decimal::parse("0.2").unwrap();
//!
//! assert_eq!(a.add(&b), Decimal::parse("0.3").unwrap());
//! ```
//!
//! Values are immutable; every operation returns a new value, and values can
//! be freely shared across threads.
//!
//! The implementation does not rely heavily on the capabilities of the
//! standard library, and can be used without the standard library.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod common;
mod conv;
mod defs;
mod ext;
mod magnitude;
mod num;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Digit;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::num::Decimal;

pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::F32_ROUND_DIGITS;
pub use crate::defs::F64_ROUND_DIGITS;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_decimal() {
        // accumulate a ledger of exact fractions
        let entries = ["10.05", "-2.50", "0.45", "1000", "-8.00"];

        let mut balance = Decimal::new();
        for e in entries {
            balance += Decimal::parse(e).unwrap();
        }

        assert_eq!(balance, Decimal::parse("1000.00").unwrap());
        assert_eq!(balance.to_i64(), 1000);

        // values beyond native range keep full precision
        let big = Decimal::parse("92233720368547758070").unwrap();
        let one = Decimal::from_i32(1);

        let sum = big.add(&one);
        assert_eq!(sum.format(), "92233720368547758071");
        assert_eq!(sum.to_i64(), i64::MAX);
        assert!(sum > big);
        assert_eq!(sum.sub(&one), big);
    }
}
