use bytes::{Bytes, BytesMut};
use std::ops::{Deref, Range};

/// Growable byte buffer supporting insertion and removal in the middle.
///
/// Backed by [`BytesMut`]. Both mutations shift the bytes after the edit
/// point, so they cost O(n) in the length of the tail.
///
/// Example:
/// ```
/// use h264_reformat::utils::ByteBuffer;
///
/// let mut buf = ByteBuffer::from(&[1u8, 2, 5][..]);
/// buf.insert_at(2, &[3, 4]);
/// assert_eq!(&buf[..], &[1, 2, 3, 4, 5]);
///
/// buf.remove_range(0..2);
/// assert_eq!(&buf[..], &[3, 4, 5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: BytesMut,
}

impl ByteBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self {
            data: BytesMut::new(),
        }
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left from `position` to the end, zero past the end
    pub fn remaining(&self, position: usize) -> usize {
        self.data.len().saturating_sub(position)
    }

    /// Inserts `bytes` before index `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`.
    pub fn insert_at(&mut self, position: usize, bytes: &[u8]) {
        assert!(
            position <= self.data.len(),
            "insert position {} beyond length {}",
            position,
            self.data.len()
        );
        if bytes.is_empty() {
            return;
        }
        let tail = self.data.split_off(position);
        self.data.reserve(bytes.len() + tail.len());
        self.data.extend_from_slice(bytes);
        self.data.extend_from_slice(&tail);
    }

    /// Removes the bytes in `range`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends beyond `len`.
    pub fn remove_range(&mut self, range: Range<usize>) {
        assert!(
            range.start <= range.end && range.end <= self.data.len(),
            "remove range {:?} out of bounds for length {}",
            range,
            self.data.len()
        );
        if range.is_empty() {
            return;
        }
        let tail = self.data.split_off(range.end);
        self.data.truncate(range.start);
        self.data.unsplit(tail);
    }

    /// Contents as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(value: &[u8]) -> Self {
        Self {
            data: BytesMut::from(value),
        }
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(value: Vec<u8>) -> Self {
        Self {
            data: BytesMut::from(&value[..]),
        }
    }
}

impl From<BytesMut> for ByteBuffer {
    fn from(data: BytesMut) -> Self {
        Self { data }
    }
}

impl From<Bytes> for ByteBuffer {
    fn from(value: Bytes) -> Self {
        Self {
            data: BytesMut::from(&value[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_insert_at() {
        let mut buf = ByteBuffer::from(vec![0xAA, 0xBB]);
        buf.insert_at(0, &[0x01]);
        assert_eq!(buf.as_slice(), &[0x01, 0xAA, 0xBB]);

        buf.insert_at(3, &[0x02, 0x03]);
        assert_eq!(buf.as_slice(), &[0x01, 0xAA, 0xBB, 0x02, 0x03]);

        buf.insert_at(2, &[]);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_remove_range() {
        let mut buf = ByteBuffer::from(vec![0, 1, 2, 3, 4, 5]);
        buf.remove_range(1..3);
        assert_eq!(buf.as_slice(), &[0, 3, 4, 5]);

        buf.remove_range(3..4);
        assert_eq!(buf.as_slice(), &[0, 3, 4]);

        buf.remove_range(0..0);
        assert_eq!(buf.as_slice(), &[0, 3, 4]);

        buf.remove_range(0..3);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_remaining() {
        let buf = ByteBuffer::from(vec![0; 4]);
        assert_eq!(buf.remaining(0), 4);
        assert_eq!(buf.remaining(3), 1);
        assert_eq!(buf.remaining(4), 0);
        assert_eq!(buf.remaining(9), 0);
    }

    #[test]
    #[should_panic]
    fn test_insert_past_end_panics() {
        let mut buf = ByteBuffer::from(vec![0; 2]);
        buf.insert_at(3, &[1]);
    }

    #[test]
    #[should_panic]
    fn test_remove_past_end_panics() {
        let mut buf = ByteBuffer::from(vec![0; 2]);
        buf.remove_range(1..3);
    }

    #[quickcheck]
    fn prop_insert_then_remove_restores(data: Vec<u8>, insert: Vec<u8>, at: usize) -> bool {
        let at = if data.is_empty() { 0 } else { at % (data.len() + 1) };
        let mut buf = ByteBuffer::from(data.clone());
        buf.insert_at(at, &insert);
        if buf.len() != data.len() + insert.len() || buf[at..at + insert.len()] != insert[..] {
            return false;
        }
        buf.remove_range(at..at + insert.len());
        buf.as_slice() == &data[..]
    }
}
