//! The Z85 alphabet and the lookup tables derived from it.
//!
//! ```
//! use z85::alphabet::{digit, is_valid, ALPHABET};
//! assert_eq!(ALPHABET[0], b'0');
//! assert_eq!(ALPHABET[84], b'#');
//! assert_eq!(digit(b'H'), Some(43));
//! assert_eq!(digit(b'~'), None);
//! // '#' is a valid character, just never the first of a quintet
//! assert!(!is_valid(b'#', 0));
//! assert!(is_valid(b'#', 1));
//! ```

/// The 85 symbols in digit order.
pub const ALPHABET: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Raw bytes per group.
pub const BYTES_PER_GROUP: usize = 4;

/// Characters per quintet.
pub const CHARS_PER_GROUP: usize = 5;

/// Sentinel stored in [`INVERSE`] for codes outside the alphabet.
pub const INVALID: u8 = 0xff;

/// Largest digit that can lead a quintet: `u32::MAX / 85^4`.
const MAX_LEADING_DIGIT: usize = (u32::MAX / (85 * 85 * 85 * 85)) as usize;

const ALL_POSITIONS: u8 = (1 << CHARS_PER_GROUP) - 1;

/// Maps `(c - 32) & 127` to the digit of `c`, or [`INVALID`].
pub const INVERSE: [u8; 128] = build_inverse();

/// Bit `i` of `VALID[c]` is set when `c` may occupy position `i` of a quintet.
const VALID: [u8; 256] = build_valid();

const fn build_inverse() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[(ALPHABET[digit] - 32) as usize & 127] = digit as u8;
        digit += 1;
    }
    table
}

const fn build_valid() -> [u8; 256] {
    let mut table = [0; 256];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[ALPHABET[digit] as usize] = if digit <= MAX_LEADING_DIGIT {
            ALL_POSITIONS
        } else {
            ALL_POSITIONS & !1
        };
        digit += 1;
    }
    table
}

/// Returns the digit value of an alphabet character.
#[must_use]
pub fn digit(c: u8) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match INVERSE[inverse_index(c)] {
        INVALID => None,
        d => Some(d),
    }
}

/// Returns whether `c` is accepted at `position` (0..5) of a quintet.
///
/// Everything outside the alphabet is rejected at every position. `$` and `#`
/// are additionally rejected at position 0.
#[must_use]
pub fn is_valid(c: u8, position: usize) -> bool {
    debug_assert!(position < CHARS_PER_GROUP);
    let mask = 1 << position;
    VALID[c as usize] & mask == mask
}

fn inverse_index(c: u8) -> usize {
    usize::from(c.wrapping_sub(32) & 127)
}

/// Integer division by 85 as a reciprocal multiply and shift, exact for all `u32`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn div85(value: u32) -> u32 {
    const MAGIC: u64 = 3_233_857_729;
    ((MAGIC * u64::from(value)) >> 38) as u32
}

/// Spreads a big-endian group value into five characters, most significant first.
pub(crate) fn encode_group(mut value: u32) -> [u8; CHARS_PER_GROUP] {
    let mut chars = [0; CHARS_PER_GROUP];
    for slot in chars.iter_mut().rev() {
        let quotient = div85(value);
        *slot = ALPHABET[(value - quotient * 85) as usize];
        value = quotient;
    }
    chars
}

/// Folds five characters back into a group value.
///
/// The characters must have passed [`is_valid`] for their positions. The fold
/// wraps, so out-of-range quintets yield the low 32 bits.
pub(crate) fn decode_group(chars: [u8; CHARS_PER_GROUP]) -> u32 {
    chars.iter().fold(0u32, |value, &c| {
        let digit = INVERSE[inverse_index(c)];
        debug_assert_ne!(digit, INVALID);
        value.wrapping_mul(85).wrapping_add(u32::from(digit))
    })
}
