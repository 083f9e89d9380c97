//! Parser for numbers represented in decimal text form.

use crate::common::buf::DigitBuf;
use crate::defs::Digit;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::Error;
use core::str::Chars;

#[derive(Debug)]
pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: DigitBuf,
    e: i64,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: DigitBuf::new(0),
            e: 0,
        }
    }

    // Returns the next character of the string, or None if the string end is reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next();
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    /// Returns the digits of the magnitude, the sign, and the exponent.
    pub fn raw_parts(&self) -> (&[Digit], Sign, Exponent) {
        (&self.digits, self.sign, self.e as Exponent)
    }
}

/// Parse a decimal number: an optional leading `-`, a digit sequence with at
/// most one decimal point, and an optional `e`/`E` exponent part holding a
/// signed integer. Any other character makes the whole input invalid.
///
/// ## Errors
///
///  - InvalidFormat: the input contains an unexpected character, holds no
///    digits, or its exponent part is missing, malformed, or out of range.
pub fn parse(s: &str) -> Result<ParserState, Error> {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some('-') = ch {
        parser_state.sign = Sign::Neg;
        ch = parser_state.next_char();
    }

    // integer part
    let mut have_digits = false;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            parser_state.digits.push(d as Digit);
            have_digits = true;
            ch = parser_state.next_char();
        } else {
            break;
        }
    }

    // fractional part
    let mut frac_len: i64 = 0;
    if let Some('.') = ch {
        ch = parser_state.next_char();
        while let Some(c) = ch {
            if let Some(d) = c.to_digit(10) {
                parser_state.digits.push(d as Digit);
                have_digits = true;
                frac_len += 1;
                ch = parser_state.next_char();
            } else {
                break;
            }
        }
    }

    if !have_digits {
        return Err(Error::InvalidFormat);
    }

    // exponent part
    let mut e: i64 = 0;
    if let Some('e' | 'E') = ch {
        parser_state.next_char();
        e = parse_exp(&mut parser_state)?;
        ch = parser_state.cur_char();
    }

    // anything left over is not a part of a number
    if ch.is_some() {
        return Err(Error::InvalidFormat);
    }

    let e = e - frac_len;
    if e < EXPONENT_MIN as i64 || e > EXPONENT_MAX as i64 {
        return Err(Error::InvalidFormat);
    }
    parser_state.e = e;

    parser_state.digits.trunc_leading_zeroes();

    Ok(parser_state)
}

// Parses the signed integer of the exponent part. Overflow of the exponent
// range is a format error, as is an empty digit sequence.
fn parse_exp(parser_state: &mut ParserState) -> Result<i64, Error> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();

    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut e: i64 = 0;
    let mut len = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            e = e
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as i64))
                .ok_or(Error::InvalidFormat)?;
            len += 1;
            ch = parser_state.next_char();
        } else {
            break;
        }
    }

    if len == 0 {
        return Err(Error::InvalidFormat);
    }

    Ok(if neg { -e } else { e })
}
