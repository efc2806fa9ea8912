use crate::error::{FixtureError, Result};

/// A borrowed run of integers that knows its own length.
///
/// The fixtures pass an array together with a separate `size`. Here the length
/// is checked once, when the view is built, and every operation afterwards
/// only sees elements that exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntSeq<'a> {
    data: &'a [i32],
}

impl<'a> IntSeq<'a> {
    /// View the whole slice
    pub fn new(data: &'a [i32]) -> Self {
        Self { data }
    }

    /// View the first `len` elements of `data`.
    ///
    /// Errors with [`FixtureError::OutOfBounds`] if `len` is larger than the slice.
    pub fn prefix(data: &'a [i32], len: usize) -> Result<Self> {
        let Some(data) = data.get(..len) else {
            log::debug!("rejected prefix of {len} over {} elements", data.len());
            return Err(FixtureError::OutOfBounds {
                len,
                available: data.len(),
            });
        };
        Ok(Self { data })
    }

    /// View `data`, optionally limited to an explicit length
    pub fn with_len(data: &'a [i32], len: Option<usize>) -> Result<Self> {
        match len {
            Some(len) => Self::prefix(data, len),
            None => Ok(Self::new(data)),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &'a [i32] {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'a, i32> {
        self.data.iter()
    }

    /// Split at `mid`, clamped to the length
    pub fn split_at(&self, mid: usize) -> (IntSeq<'a>, IntSeq<'a>) {
        let (head, tail) = self.data.split_at(mid.min(self.data.len()));
        (IntSeq::new(head), IntSeq::new(tail))
    }
}

impl<'a> From<&'a [i32]> for IntSeq<'a> {
    fn from(data: &'a [i32]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [i32; N]> for IntSeq<'a> {
    fn from(data: &'a [i32; N]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a Vec<i32>> for IntSeq<'a> {
    fn from(data: &'a Vec<i32>) -> Self {
        Self::new(data)
    }
}

impl<'a> IntoIterator for IntSeq<'a> {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
