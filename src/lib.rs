//! `z85` is a crate for lazy, streaming [Z85](https://rfc.zeromq.org/spec/32/)
//! encoding and decoding. Every 4 bytes map to 5 printable characters.
//!
//! Both directions are iterator adaptors: they pull from the source only as
//! far as needed to produce the next item, and they yield `Result`s so that
//! malformed input surfaces at the exact point it is detected.
//!
//! # Encode binary data
//! ```
//! let data: [u8; 8] = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];
//! let encoded: String = z85::encode(data).unwrap().collect::<Result<_, _>>().unwrap();
//! assert_eq!(encoded, "HelloWorld");
//! ```
//!
//! # Decode text with embedded formatting
//!
//! Bytes outside the alphabet, such as whitespace, are skipped.
//! ```
//! let decoded: Vec<u8> = z85::decode_bytes("Hello\nWorld\n".bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(decoded, [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b]);
//! ```
//!
//! # Stream fixed-size records
//!
//! Sources and outputs may be any [`Plain`] type. Records are encoded as
//! their concatenated bytes, and decoding back into the record type restores
//! the record boundaries.
//! ```
//! let records = [*b"hello", *b"world", *b"hello", *b"world"];
//! let encoded: String = z85::encode(records).unwrap().collect::<Result<_, _>>().unwrap();
//! let decoded: Vec<[u8; 5]> = z85::decode(encoded.bytes())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(decoded, records);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod alphabet;
pub mod decode;
pub mod element;
pub mod encode;
mod error;
#[cfg(all(test, feature = "alloc"))]
mod test_utils;

pub use self::decode::{decode, decode_bytes, Decoder};
#[cfg(feature = "alloc")]
pub use self::decode::decode_to_vec;
pub use self::element::Plain;
pub use self::encode::{encode, encode_stream, Encoder};
#[cfg(feature = "alloc")]
pub use self::encode::encode_to_string;
pub use self::error::Error;
