/// Errors reported while pulling from an [`Encoder`](crate::Encoder) or a
/// [`Decoder`](crate::Decoder), or when constructing an encoder over a source
/// of known length.
///
/// Each of these is terminal: once a stream has yielded an error it yields
/// nothing further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The encoder input is not a whole number of 4-byte groups.
    #[error("input length {length} is not a multiple of 4 bytes")]
    InvalidInputLength {
        /// Total input length in bytes.
        length: usize,
    },
    /// The decoder input ended inside a quintet.
    #[error("input ends with {count} unmatched characters, expected a multiple of 5")]
    PartialEncodedGroup {
        /// Number of valid characters pending when the input ended.
        count: usize,
    },
    /// The decoded bytes ended before a whole output element was assembled.
    #[error("partial element at end of data: required {required} bytes, received {received}")]
    PartialOutputElement {
        /// Size of the output element in bytes.
        required: usize,
        /// Bytes available for the final element.
        received: usize,
    },
}
