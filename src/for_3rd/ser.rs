//! Serialization of Decimal.
//! Serialization to a string uses the exponent notation, which survives a
//! parse round-trip for every value.

use crate::num::Decimal;
use serde::{Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format_exp())
    }
}
