//! Fixed-size plain-data elements that the codec streams consume and produce.
//!
//! The encoder reads each source element through [`Plain::to_bytes`] and the
//! decoder assembles output elements through [`Plain::from_bytes`], so an
//! element's byte representation is always explicit.
//!
//! ```
//! use z85::Plain;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Rgba(u8, u8, u8, u8);
//!
//! impl Plain for Rgba {
//!     const SIZE: usize = 4;
//!     type Bytes = [u8; 4];
//!
//!     fn zeroed() -> Self::Bytes {
//!         [0; 4]
//!     }
//!
//!     fn to_bytes(self) -> Self::Bytes {
//!         [self.0, self.1, self.2, self.3]
//!     }
//!
//!     fn from_bytes(b: Self::Bytes) -> Self {
//!         Self(b[0], b[1], b[2], b[3])
//!     }
//! }
//!
//! let pixels = [Rgba(0x86, 0x4f, 0xd2, 0x6f), Rgba(0xb5, 0x59, 0xf7, 0x5b)];
//! let text: String = z85::encode(pixels)
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(text, "HelloWorld");
//! let back: Vec<Rgba> = z85::decode(text.bytes()).collect::<Result<_, _>>().unwrap();
//! assert_eq!(back, pixels);
//! ```

/// A fixed-size value with an inspectable byte representation.
///
/// `to_bytes` and `from_bytes` must be inverses, and `Bytes` must always be
/// exactly [`SIZE`](Plain::SIZE) bytes long.
pub trait Plain: Copy {
    /// Size of the byte representation.
    const SIZE: usize;

    /// Byte representation, usually `[u8; SIZE]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy;

    /// An all-zero byte representation, filled in by the decoder.
    fn zeroed() -> Self::Bytes;

    /// The bytes the encoder reads for this value.
    fn to_bytes(self) -> Self::Bytes;

    /// Rebuilds a value from the bytes the decoder assembled.
    fn from_bytes(bytes: Self::Bytes) -> Self;
}

// Integers use their in-memory (native-endian) representation.
macro_rules! impl_plain_for_int {
    ($($int:ty),*) => {
        $(
            impl Plain for $int {
                const SIZE: usize = core::mem::size_of::<$int>();
                type Bytes = [u8; core::mem::size_of::<$int>()];

                fn zeroed() -> Self::Bytes {
                    [0; core::mem::size_of::<$int>()]
                }

                fn to_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn from_bytes(bytes: Self::Bytes) -> Self {
                    <$int>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_plain_for_int!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

impl<const N: usize> Plain for [u8; N] {
    const SIZE: usize = N;
    type Bytes = Self;

    fn zeroed() -> Self::Bytes {
        [0; N]
    }

    fn to_bytes(self) -> Self::Bytes {
        self
    }

    fn from_bytes(bytes: Self::Bytes) -> Self {
        bytes
    }
}

/// Splits a stream of elements into their bytes, one byte per pull.
#[derive(Clone)]
pub(crate) struct ByteCursor<I>
where
    I: Iterator,
    I::Item: Plain,
{
    source: I,
    element: Option<<I::Item as Plain>::Bytes>,
    offset: usize,
    consumed: usize,
}

impl<I> ByteCursor<I>
where
    I: Iterator,
    I::Item: Plain,
{
    pub(crate) fn new(source: I) -> Self {
        Self {
            source,
            element: None,
            offset: 0,
            consumed: 0,
        }
    }

    /// Total bytes handed out so far.
    pub(crate) fn consumed(&self) -> usize {
        self.consumed
    }

    pub(crate) fn next_byte(&mut self) -> Option<u8> {
        loop {
            if let Some(bytes) = &self.element {
                if let Some(&byte) = bytes.as_ref().get(self.offset) {
                    self.offset += 1;
                    self.consumed += 1;
                    return Some(byte);
                }
            }
            self.element = Some(self.source.next()?.to_bytes());
            self.offset = 0;
        }
    }

    /// Bounds on the bytes still to come, in the style of `Iterator::size_hint`.
    pub(crate) fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self
            .element
            .as_ref()
            .map_or(0, |bytes| bytes.as_ref().len() - self.offset);
        let size = <I::Item as Plain>::SIZE;
        let (low, high) = self.source.size_hint();
        let low = low.saturating_mul(size).saturating_add(pending);
        let high = high
            .and_then(|h| h.checked_mul(size))
            .and_then(|h| h.checked_add(pending));
        (low, high)
    }
}
