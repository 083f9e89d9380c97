//! Static constants.

use crate::num::Decimal;
use lazy_static::lazy_static;

lazy_static! {

    /// `i64::MAX` as a decimal.
    pub(crate) static ref I64_MAX: Decimal = Decimal::from_i64(i64::MAX).expect("Constant I64_MAX initialization.");

    /// `i64::MIN` as a decimal.
    pub(crate) static ref I64_MIN: Decimal = Decimal::parse("-9223372036854775808").expect("Constant I64_MIN initialization.");

    /// `f64::MAX` as a decimal.
    pub(crate) static ref F64_MAX: Decimal = Decimal::parse("1.7976931348623157e308").expect("Constant F64_MAX initialization.");

    /// `f64::MIN` as a decimal.
    pub(crate) static ref F64_MIN: Decimal = Decimal::parse("-1.7976931348623157e308").expect("Constant F64_MIN initialization.");
}
