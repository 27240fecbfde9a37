//! Lazy Z85 decoding into a stream of [`Plain`] elements.
//!
//! Bytes that are not valid at the next quintet position are skipped, so the
//! encoded text may be wrapped or spaced freely.
//!
//! ```
//! let decoded: Vec<u8> = z85::decode_bytes("Hello World\n".bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(decoded, [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
//!
//! // any fixed-size output type works, as long as the data fills it exactly
//! let records: Vec<[u8; 5]> = z85::decode("xK#0@z*cbuy?aW?0000000000".bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(records, [*b"hello", *b"world", *b"!\0\0\0\0", *b"\0\0\0\0\0"]);
//! ```

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::alphabet::{decode_group, is_valid, BYTES_PER_GROUP, CHARS_PER_GROUP};
use crate::element::ByteCursor;
use crate::{Error, Plain};

/// Decodes a source of candidate characters into elements of type `T`.
///
/// The source items are split into bytes exactly as the encoder splits them,
/// so text is usually passed as `str::bytes()`.
///
/// # Examples
///
/// ```
/// use z85::Error;
/// let words: Vec<u32> = z85::decode("HelloWorld".bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(words[0], u32::from_ne_bytes([0x86, 0x4f, 0xd2, 0x6f]));
///
/// let wide: Result<Vec<u64>, _> = z85::decode("Hello".bytes()).collect();
/// assert_eq!(
///     wide,
///     Err(Error::PartialOutputElement {
///         required: 8,
///         received: 4
///     })
/// );
/// ```
pub fn decode<T, I>(source: I) -> Decoder<I::IntoIter, T>
where
    T: Plain,
    I: IntoIterator,
    I::Item: Plain,
{
    Decoder::new(source.into_iter())
}

/// Decodes a source of candidate characters into bytes.
///
/// ```
/// use z85::Error;
/// let mut decoder = z85::decode_bytes("Hello Wor".bytes());
/// assert_eq!(decoder.by_ref().take(4).count(), 4);
/// assert_eq!(decoder.next(), Some(Err(Error::PartialEncodedGroup { count: 3 })));
/// assert_eq!(decoder.next(), None);
/// ```
pub fn decode_bytes<I>(source: I) -> Decoder<I::IntoIter, u8>
where
    I: IntoIterator,
    I::Item: Plain,
{
    Decoder::new(source.into_iter())
}

/// Decodes a Z85 string into a byte vector.
///
/// # Errors
///
/// Returns [`Error::PartialEncodedGroup`] if the number of alphabet
/// characters in `encoded` is not a multiple of 5.
#[cfg(feature = "alloc")]
pub fn decode_to_vec(encoded: &str) -> Result<Vec<u8>, Error> {
    decode_bytes(encoded.bytes()).collect()
}

/// Iterator adaptor yielding decoded elements of type `T`, see [`decode`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Decoder<I, T = u8>
where
    I: Iterator,
    I::Item: Plain,
    T: Plain,
{
    bytes: ByteCursor<I>,
    group: [u8; BYTES_PER_GROUP],
    position: usize,
    done: bool,
    output: PhantomData<fn() -> T>,
}

impl<I, T> Decoder<I, T>
where
    I: Iterator,
    I::Item: Plain,
    T: Plain,
{
    /// Wraps `source`, a stream of encoded text, decoding into elements of `T`.
    pub fn new(source: I) -> Self {
        Self {
            bytes: ByteCursor::new(source),
            group: [0; BYTES_PER_GROUP],
            position: BYTES_PER_GROUP,
            done: false,
            output: PhantomData,
        }
    }

    /// Pulls bytes until five characters valid for their positions are found.
    fn next_quintet(&mut self) -> Result<Option<[u8; CHARS_PER_GROUP]>, Error> {
        let mut chars = [0; CHARS_PER_GROUP];
        let mut count = 0;
        while count < CHARS_PER_GROUP {
            let Some(c) = self.bytes.next_byte() else {
                return if count == 0 {
                    Ok(None)
                } else {
                    Err(Error::PartialEncodedGroup { count })
                };
            };
            if is_valid(c, count) {
                chars[count] = c;
                count += 1;
            } else {
                trace!("z85 decode skipped byte {c:#04x} at quintet position {count}");
            }
        }
        Ok(Some(chars))
    }

    fn next_element(&mut self) -> Result<Option<T>, Error> {
        let mut bytes = T::zeroed();
        let out = bytes.as_mut();
        let required = out.len();
        if required == 0 {
            return Ok(None);
        }
        for (received, slot) in out.iter_mut().enumerate() {
            if self.position == BYTES_PER_GROUP {
                match self.next_quintet()? {
                    Some(chars) => {
                        self.group = decode_group(chars).to_be_bytes();
                        self.position = 0;
                    }
                    None if received == 0 => return Ok(None),
                    None => return Err(Error::PartialOutputElement { required, received }),
                }
            }
            *slot = self.group[self.position];
            self.position += 1;
        }
        Ok(Some(T::from_bytes(bytes)))
    }
}

impl<I, T> Iterator for Decoder<I, T>
where
    I: Iterator,
    I::Item: Plain,
    T: Plain,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_element() {
            Ok(Some(element)) => Some(Ok(element)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                debug!("z85 decode failed: {error}");
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done || T::SIZE == 0 {
            return (0, Some(0));
        }
        // filler may stand in for any number of characters, so only the
        // upper bound is known
        let buffered = BYTES_PER_GROUP - self.position;
        let (_, high) = self.bytes.size_hint();
        let high = high.and_then(|h| {
            let decoded = (h / CHARS_PER_GROUP)
                .checked_mul(BYTES_PER_GROUP)?
                .checked_add(buffered)?;
            Some(decoded / T::SIZE + 1)
        });
        (0, high)
    }
}

impl<I, T> FusedIterator for Decoder<I, T>
where
    I: Iterator,
    I::Item: Plain,
    T: Plain,
{
}
