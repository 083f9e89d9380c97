//! Standard library traits for the decimal number.

use crate::defs::Error;
use crate::defs::Sign;
use crate::magnitude::Magnitude;
use crate::num::Decimal;
use core::cmp::Ordering;
use core::fmt::Display;
use core::fmt::Formatter;
use core::hash::Hash;
use core::hash::Hasher;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

//
// ops traits
//

impl Add for Decimal {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Decimal::add(&self, &rhs)
    }
}

impl Add<&Decimal> for Decimal {
    type Output = Self;
    fn add(self, rhs: &Decimal) -> Self::Output {
        Decimal::add(&self, rhs)
    }
}

impl Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: Self) -> Self::Output {
        Decimal::add(self, rhs)
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Self) {
        *self = Decimal::add(self, &rhs)
    }
}

impl AddAssign<&Decimal> for Decimal {
    fn add_assign(&mut self, rhs: &Decimal) {
        *self = Decimal::add(self, rhs)
    }
}

impl Sub for Decimal {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Decimal::sub(&self, &rhs)
    }
}

impl Sub<&Decimal> for Decimal {
    type Output = Self;
    fn sub(self, rhs: &Decimal) -> Self::Output {
        Decimal::sub(&self, rhs)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: Self) -> Self::Output {
        Decimal::sub(self, rhs)
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Decimal::sub(self, &rhs)
    }
}

impl SubAssign<&Decimal> for Decimal {
    fn sub_assign(&mut self, rhs: &Decimal) {
        *self = Decimal::sub(self, rhs)
    }
}

impl Neg for Decimal {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Decimal::neg(&self)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Self::Output {
        Decimal::neg(self)
    }
}

//
// ordering traits
//

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        matches!(Decimal::cmp(self, other), Ordering::Equal)
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Decimal::cmp(self, other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        Decimal::cmp(self, other)
    }
}

// Canonical representations are unique, so hashing the parts agrees with `Eq`.
impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (digits, s, e) = self.to_raw_parts();
        digits.hash(state);
        s.hash(state);
        e.hash(state);
    }
}

//
// conversion traits
//

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident) => {
        impl Decimal {
            /// Constructs a decimal with the value of `i`.
            pub fn $from_s(i: $s) -> Self {
                let v = i as i64;
                let s = if v < 0 { Sign::Neg } else { Sign::Pos };

                Self::from_magnitude(Magnitude::from_u64(v.unsigned_abs()), 0, s)
            }
        }

        impl From<$s> for Decimal {
            fn from(i: $s) -> Self {
                Decimal::$from_s(i)
            }
        }
    };
}

impl_int_conv!(i8, from_i8);
impl_int_conv!(i16, from_i16);

impl_int_conv!(u8, from_u8);
impl_int_conv!(u16, from_u16);
impl_int_conv!(u32, from_u32);

impl From<i32> for Decimal {
    fn from(i: i32) -> Self {
        Decimal::from_i32(i)
    }
}

impl TryFrom<i64> for Decimal {
    type Error = Error;

    fn try_from(i: i64) -> Result<Self, Self::Error> {
        Decimal::from_i64(i)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(f)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self, Self::Error> {
        Decimal::from_f32(f)
    }
}

//
// other traits
//

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::new()
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(src: &str) -> Result<Decimal, Self::Err> {
        Decimal::parse(src)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        let mut acc = Decimal::new();
        for v in iter {
            acc = acc.add(&v);
        }
        acc
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        let mut acc = Decimal::new();
        for v in iter {
            acc = acc.add(v);
        }
        acc
    }
}
