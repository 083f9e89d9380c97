//! Deserialization of Decimal.

use core::fmt::Formatter;

use crate::defs::Sign;
use crate::magnitude::Magnitude;
use crate::num::Decimal;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

#[cfg(not(feature = "std"))]
use {alloc::format, alloc::string::String};

pub struct DecimalVisitor {}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String`, `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        match Decimal::from_i64(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Decimal::from_magnitude(Magnitude::from_u64(v), 0, Sign::Pos))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        match Decimal::from_f32(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        match Decimal::from_f64(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match Decimal::parse(v) {
            Ok(o) => Ok(o),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;

    use crate::Decimal;

    #[test]
    fn from_json() {
        assert_eq!(from_str::<Decimal>("\"0\"").unwrap(), Decimal::new());
        assert_eq!(
            from_str::<Decimal>("\"-12.5\"").unwrap(),
            Decimal::parse("-12.5").unwrap()
        );
        assert_eq!(from_str::<Decimal>("123").unwrap(), Decimal::from_i32(123));
        assert_eq!(from_str::<Decimal>("-5").unwrap(), Decimal::from_i32(-5));
        assert_eq!(
            from_str::<Decimal>("0.25").unwrap(),
            Decimal::parse("0.25").unwrap()
        );
        assert_eq!(
            from_str::<Decimal>("18446744073709551615").unwrap(),
            Decimal::parse("18446744073709551615").unwrap()
        );

        // round trip through serialization
        for s in ["0", "1.5", "-0.05", "12300", "6.78e-90"] {
            let d = Decimal::parse(s).unwrap();
            let json = serde_json::to_string(&d).unwrap();
            assert_eq!(from_str::<Decimal>(&json).unwrap(), d);
        }

        assert!(from_str::<Decimal>("\"12x\"").is_err());
    }
}
