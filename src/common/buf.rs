//! Buffer for holding magnitude digits.

use crate::defs::Digit;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 20;

/// Buffer for holding magnitude digits. The most significant digit comes first.
#[derive(Debug, Clone, Hash)]
pub struct DigitBuf {
    inner: SmallVec<[Digit; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    /// New buffer of length `sz` filled with zeroes.
    #[inline]
    pub fn new(sz: usize) -> Self {
        let mut inner = SmallVec::new();
        inner.resize(sz, 0);
        DigitBuf { inner }
    }

    /// New buffer holding a copy of `digits`.
    #[inline]
    pub fn from_digits(digits: &[Digit]) -> Self {
        DigitBuf {
            inner: SmallVec::from_slice(digits),
        }
    }

    #[inline]
    pub fn push(&mut self, d: Digit) {
        self.inner.push(d);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove leading digits containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        let n = self.inner.iter().take_while(|&&d| d == 0).count();

        if n > 0 {
            let sz = self.len();
            self.inner.rotate_left(n);
            self.inner.truncate(sz - n);
        }
    }

    /// Remove trailing digits containing zeroes and return the number of digits removed.
    pub fn trunc_trailing_zeroes(&mut self) -> usize {
        let n = self.inner.iter().rev().take_while(|&&d| d == 0).count();

        self.inner.truncate(self.len() - n);
        n
    }
}

impl<I: SliceIndex<[Digit]>> IndexMut<I> for DigitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Digit]>> Index<I> for DigitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for DigitBuf {
    type Target = [Digit];

    #[inline]
    fn deref(&self) -> &[Digit] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Digit] {
        self.inner.deref_mut()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_digit_buf() {
        let mut buf = DigitBuf::from_digits(&[0, 0, 1, 2, 0, 3, 0, 0]);

        buf.trunc_leading_zeroes();
        assert!(&buf[..] == [1, 2, 0, 3, 0, 0]);

        let n = buf.trunc_trailing_zeroes();
        assert!(n == 2);
        assert!(&buf[..] == [1, 2, 0, 3]);

        // no zeroes to remove
        buf.trunc_leading_zeroes();
        let n = buf.trunc_trailing_zeroes();
        assert!(n == 0);
        assert!(&buf[..] == [1, 2, 0, 3]);

        // all zeroes
        let mut buf = DigitBuf::from_digits(&[0, 0, 0]);
        let n = buf.trunc_trailing_zeroes();
        assert!(n == 3);
        assert!(buf.is_empty());

        let mut buf = DigitBuf::new(3);
        assert!(buf.len() == 3);
        buf.trunc_leading_zeroes();
        assert!(buf.is_empty());
    }
}
