//! Decimal formatting and parsing from text.

use crate::defs::Error;
use crate::defs::Sign;
use crate::num::Decimal;

#[cfg(feature = "std")]
use std::fmt::Write;

#[cfg(not(feature = "std"))]
use {alloc::string::String, core::fmt::Write};

const DIGIT_CHARS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

impl Decimal {
    /// Parses a decimal number from the string `s`: an optional leading `-`,
    /// digits with at most one decimal point, and an optional `e`/`E` exponent
    /// part. The result is normalized.
    ///
    /// ## Errors
    ///
    ///  - InvalidFormat: `s` contains an unexpected character, holds no digits,
    ///    or its exponent part is malformed or out of range.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = crate::parser::parse(s)?;
        let (digits, sign, e) = ps.raw_parts();

        Ok(Self::from_raw_parts(digits, e, sign))
    }

    /// Formats the number as its canonical text: an optional `-`, the
    /// significant digits, and one trailing zero per unit of positive
    /// exponent. A negative exponent contributes nothing to the text: no
    /// decimal point is emitted, so the output renders the magnitude digits
    /// only. Zero is formatted as `"0"`.
    pub fn format(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let (digits, s, e) = self.to_raw_parts();

        let mut mstr = String::with_capacity(digits.len() + e.max(0) as usize + 1);

        if s == Sign::Neg {
            mstr.push('-');
        }

        for &d in digits {
            mstr.push(DIGIT_CHARS[d as usize]);
        }

        for _ in 0..e.max(0) {
            mstr.push('0');
        }

        mstr
    }

    /// Formats the number in exponent notation: an optional `-`, the
    /// significant digits, and the exponent appended as `e<exponent>` when it
    /// is nonzero. Unlike [`Decimal::format`], this form survives a parse
    /// round-trip for every value.
    pub fn format_exp(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let (digits, s, e) = self.to_raw_parts();

        let mut mstr = String::with_capacity(digits.len() + 12);

        if s == Sign::Neg {
            mstr.push('-');
        }

        for &d in digits {
            mstr.push(DIGIT_CHARS[d as usize]);
        }

        if e != 0 {
            let _ = write!(mstr, "e{}", e);
        }

        mstr
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse() {
        let d = Decimal::parse("-12.30e4").unwrap();
        let (digits, s, e) = d.to_raw_parts();
        assert!(digits == [1, 2, 3]);
        assert!(s == Sign::Neg);
        assert!(e == 3);

        let d = Decimal::parse("0.000").unwrap();
        assert!(d.is_zero());
        assert!(d.exponent() == 0);
        assert!(d.sign() == Sign::Pos);

        // "-0" is the canonical zero as well
        let d = Decimal::parse("-0").unwrap();
        assert!(d.is_zero());
        assert!(d.sign() == Sign::Pos);

        assert!(Decimal::parse("12x").unwrap_err() == Error::InvalidFormat);
    }

    #[test]
    fn test_format() {
        assert!(Decimal::new().format() == "0");
        assert!(Decimal::from_i32(7).format() == "7");
        assert!(Decimal::from_i32(-450).format() == "-450");
        assert!(Decimal::parse("12300").unwrap().format() == "12300");
        assert!(Decimal::from_i64(i64::MAX).unwrap().format() == "9223372036854775807");

        // a negative exponent renders the magnitude digits only
        assert!(Decimal::parse("1.5").unwrap().format() == "15");
        assert!(Decimal::parse("-0.5").unwrap().format() == "-5");

        // round trip of integer text without redundant zero padding
        for s in ["1", "199", "12300", "-450", "9223372036854775807"] {
            assert!(Decimal::parse(s).unwrap().format() == s);
        }
    }

    #[test]
    fn test_format_exp() {
        assert!(Decimal::new().format_exp() == "0");
        assert!(Decimal::from_i32(7).format_exp() == "7");
        assert!(Decimal::parse("12300").unwrap().format_exp() == "123e2");
        assert!(Decimal::parse("1.5").unwrap().format_exp() == "15e-1");
        assert!(Decimal::parse("-0.05").unwrap().format_exp() == "-5e-2");

        // every value survives the round trip
        for s in ["0", "7", "-450", "1.5", "-0.05", "123e45", "-6.78e-90"] {
            let d = Decimal::parse(s).unwrap();
            let d2 = Decimal::parse(&d.format_exp()).unwrap();
            assert!(d == d2);
        }
    }
}
