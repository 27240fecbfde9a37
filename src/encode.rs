//! Lazy Z85 encoding of a stream of [`Plain`] elements.
//!
//! The source is read as one flat byte stream: each element contributes the
//! bytes of [`Plain::to_bytes`] in order before the next element is pulled.
//! Every 4 bytes become 5 characters, produced one at a time.
//!
//! ```
//! let data: [u8; 8] = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];
//! let encoded: String = z85::encode(data).unwrap().collect::<Result<_, _>>().unwrap();
//! assert_eq!(encoded, "HelloWorld");
//! ```

#[cfg(feature = "alloc")]
use alloc::string::String;
use core::iter::FusedIterator;

use log::debug;

use crate::alphabet::{encode_group, BYTES_PER_GROUP, CHARS_PER_GROUP};
use crate::element::ByteCursor;
use crate::{Error, Plain};

/// Encodes a source whose length is known up front.
///
/// # Examples
///
/// ```
/// use z85::Error;
/// assert_eq!(
///     z85::encode([1u8, 2, 3]).err(),
///     Some(Error::InvalidInputLength { length: 3 })
/// );
/// // 5-byte records are encoded as their concatenated bytes
/// let records = [*b"hello", *b"world", *b"hello", *b"world"];
/// assert_eq!(z85::encode(records).unwrap().count(), 25);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputLength`] if the source's total byte length is
/// not a multiple of 4.
pub fn encode<I>(source: I) -> Result<Encoder<I::IntoIter>, Error>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Plain,
{
    let source = source.into_iter();
    let count = source.len();
    let size = <I::Item as Plain>::SIZE;
    // decided modulo 4 so that huge sources cannot overflow the check
    if (count % BYTES_PER_GROUP) * (size % BYTES_PER_GROUP) % BYTES_PER_GROUP != 0 {
        let error = Error::InvalidInputLength {
            length: count.saturating_mul(size),
        };
        debug!("z85 encode rejected: {error}");
        return Err(error);
    }
    Ok(Encoder::new(source))
}

/// Encodes a source of unknown length.
///
/// A source that does not end on a 4-byte boundary is reported by the
/// encoder when it runs dry, after every complete group has been yielded.
///
/// ```
/// use z85::Error;
/// let mut encoder = z85::encode_stream((1u8..=5).filter(|_| true));
/// assert_eq!(encoder.by_ref().take(5).count(), 5);
/// assert_eq!(encoder.next(), Some(Err(Error::InvalidInputLength { length: 5 })));
/// assert_eq!(encoder.next(), None);
/// ```
pub fn encode_stream<I>(source: I) -> Encoder<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Plain,
{
    Encoder::new(source.into_iter())
}

/// Encodes a byte slice into a `String`.
///
/// # Errors
///
/// Returns [`Error::InvalidInputLength`] if `data.len()` is not a multiple of 4.
#[cfg(feature = "alloc")]
pub fn encode_to_string(data: &[u8]) -> Result<String, Error> {
    encode(data.iter().copied())?.collect()
}

/// Iterator adaptor yielding the Z85 characters of a source, see [`encode`]
/// and [`encode_stream`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Encoder<I>
where
    I: Iterator,
    I::Item: Plain,
{
    bytes: ByteCursor<I>,
    chars: [u8; CHARS_PER_GROUP],
    position: usize,
    done: bool,
}

impl<I> Encoder<I>
where
    I: Iterator,
    I::Item: Plain,
{
    /// Wraps `source` without checking its length up front.
    pub fn new(source: I) -> Self {
        Self {
            bytes: ByteCursor::new(source),
            chars: [0; CHARS_PER_GROUP],
            position: CHARS_PER_GROUP,
            done: false,
        }
    }

    fn next_group(&mut self) -> Result<Option<[u8; CHARS_PER_GROUP]>, Error> {
        let Some(first) = self.bytes.next_byte() else {
            return Ok(None);
        };
        let mut group = [first, 0, 0, 0];
        for slot in &mut group[1..] {
            *slot = self.bytes.next_byte().ok_or(Error::InvalidInputLength {
                length: self.bytes.consumed(),
            })?;
        }
        Ok(Some(encode_group(u32::from_be_bytes(group))))
    }
}

impl<I> Iterator for Encoder<I>
where
    I: Iterator,
    I::Item: Plain,
{
    type Item = Result<char, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == CHARS_PER_GROUP {
            if self.done {
                return None;
            }
            match self.next_group() {
                Ok(Some(chars)) => {
                    self.chars = chars;
                    self.position = 0;
                }
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(error) => {
                    self.done = true;
                    debug!("z85 encode failed: {error}");
                    return Some(Err(error));
                }
            }
        }
        let c = self.chars[self.position];
        self.position += 1;
        Some(Ok(char::from(c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = CHARS_PER_GROUP - self.position;
        if self.done {
            return (buffered, Some(buffered));
        }
        let (low, high) = self.bytes.size_hint();
        let low = (low / BYTES_PER_GROUP)
            .saturating_mul(CHARS_PER_GROUP)
            .saturating_add(buffered);
        let high = high.and_then(|h| {
            let trailing = usize::from(h % BYTES_PER_GROUP != 0);
            (h / BYTES_PER_GROUP)
                .checked_mul(CHARS_PER_GROUP)?
                .checked_add(buffered + trailing)
        });
        (low, high)
    }
}

impl<I> FusedIterator for Encoder<I>
where
    I: Iterator,
    I::Item: Plain,
{
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec::Vec;

    const HELLO: [u8; 8] = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];

    fn encode_all<I>(encoder: Encoder<I>) -> Result<String, Error>
    where
        I: Iterator,
        I::Item: Plain,
    {
        encoder.collect()
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(encode_all(encode(HELLO).unwrap()).unwrap(), "HelloWorld");
        assert_eq!(encode_to_string(&HELLO).unwrap(), "HelloWorld");
        assert_eq!(
            encode_all(encode_stream(HELLO.iter().copied())).unwrap(),
            "HelloWorld"
        );
    }

    #[test]
    fn test_known_vectors() {
        let input = hex::decode("8e0bdd697628b91d8f245587ee95c5b04d48963f79259877b49cd9063aead3b7")
            .unwrap();
        assert_eq!(
            encode_to_string(&input).unwrap(),
            "JTKVSB%%)wK0E.X)V>+}o?pNmC{O&4W4b!Ni{Lh6"
        );
        assert_eq!(encode_to_string(&[0; 4]).unwrap(), "00000");
        assert_eq!(encode_to_string(&[0xff; 4]).unwrap(), "%nSc0");
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_all(encode(Vec::<u8>::new()).unwrap()).unwrap(), "");
        assert_eq!(encode_all(encode_stream(core::iter::empty::<u32>())).unwrap(), "");
    }

    #[test]
    fn test_invalid_length() {
        for length in [1, 2, 3, 5, 7, 9] {
            assert_eq!(
                encode(alloc::vec![0u8; length]).err(),
                Some(Error::InvalidInputLength { length })
            );
        }
        assert_eq!(
            encode([*b"abc"]).err(),
            Some(Error::InvalidInputLength { length: 3 })
        );
        assert_eq!(
            encode_to_string(b"Hello"),
            Err(Error::InvalidInputLength { length: 5 })
        );
    }

    /// Exact-size source of `remaining` zeroed records, produced on demand.
    struct Records<const N: usize> {
        remaining: usize,
    }

    impl<const N: usize> Iterator for Records<N> {
        type Item = [u8; N];

        fn next(&mut self) -> Option<Self::Item> {
            self.remaining = self.remaining.checked_sub(1)?;
            Some([0; N])
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.remaining, Some(self.remaining))
        }
    }

    impl<const N: usize> ExactSizeIterator for Records<N> {}

    #[test]
    fn test_length_check_on_huge_sources() {
        // usize::MAX / 4 * 4 records of 5 bytes overflow usize but are whole groups
        let encoder = encode(Records::<5> {
            remaining: usize::MAX / 4 * 4,
        })
        .unwrap();
        let head: String = encoder.take(10).map(Result::unwrap).collect();
        assert_eq!(head, "0000000000");

        assert_eq!(
            encode(Records::<5> {
                remaining: usize::MAX
            })
            .err(),
            Some(Error::InvalidInputLength { length: usize::MAX })
        );
        assert_eq!(
            encode(Records::<6> {
                remaining: usize::MAX / 2 + 1
            })
            .err(),
            None
        );
        assert_eq!(
            encode(Records::<3> { remaining: 6 }).err(),
            Some(Error::InvalidInputLength { length: 18 })
        );
    }

    #[test]
    fn test_invalid_length_detected_lazily() {
        let mut encoder = encode_stream(HELLO.iter().copied().take(7).filter(|_| true));
        let head: String = encoder.by_ref().take(5).map(Result::unwrap).collect();
        assert_eq!(head, "Hello");
        assert_eq!(
            encoder.next(),
            Some(Err(Error::InvalidInputLength { length: 7 }))
        );
        assert_eq!(encoder.next(), None);
        assert_eq!(encoder.next(), None);
    }

    #[test]
    fn test_multi_byte_elements() {
        let records = [*b"hello", *b"world", *b"hello", *b"world"];
        let flat: Vec<u8> = records.iter().flatten().copied().collect();
        assert_eq!(
            encode_all(encode(records).unwrap()).unwrap(),
            encode_to_string(&flat).unwrap()
        );

        let triples: [[u8; 3]; 4] = [
            [0x86, 0x4f, 0xd2],
            [0x6f, 0xb5, 0x59],
            [0xf7, 0x5b, 0x86],
            [0x4f, 0xd2, 0x6f],
        ];
        assert_eq!(
            encode_all(encode(triples).unwrap()).unwrap(),
            "HelloWorldHello"
        );

        let words = [
            u32::from_ne_bytes([0x86, 0x4f, 0xd2, 0x6f]),
            u32::from_ne_bytes([0xb5, 0x59, 0xf7, 0x5b]),
        ];
        assert_eq!(encode_all(encode(words).unwrap()).unwrap(), "HelloWorld");
        let wide = [u64::from_ne_bytes(HELLO)];
        assert_eq!(encode_all(encode(wide).unwrap()).unwrap(), "HelloWorld");
    }

    #[test]
    fn test_size_hint() {
        let mut encoder = encode(HELLO).unwrap();
        assert_eq!(encoder.size_hint(), (10, Some(10)));
        encoder.next();
        assert_eq!(encoder.size_hint(), (9, Some(9)));
        let mut encoder = encode([*b"hello", *b"world", *b"hello", *b"world"]).unwrap();
        assert_eq!(encoder.size_hint(), (25, Some(25)));
        encoder.by_ref().take(7).for_each(drop);
        assert_eq!(encoder.size_hint(), (18, Some(18)));
        assert_eq!(encoder.count(), 18);

        // trailing bytes may still surface as an error item
        let encoder = encode_stream(HELLO.iter().copied().take(6));
        assert_eq!(encoder.size_hint(), (5, Some(6)));
    }
}
