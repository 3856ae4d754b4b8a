//! Short code allocation.
//!
//! Short codes are the lowercase hexadecimal form of the mapping id. Ids are
//! allocated sequentially by the store, so the code space grows one digit at a
//! time: `1`..`f`, then `10`..`ff`, and so on.

/// Digits used for base-16 encoding, indexed by value.
const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Radix of the encoding.
const BASE: u64 = 16;

/// Encodes a sequence value as a lowercase hexadecimal short code.
///
/// The result is the standard positional base-16 representation without
/// leading zeros, so distinct inputs always produce distinct codes.
/// Zero maps to `"0"`.
///
/// # Examples
///
/// ```
/// use hexlink::utils::code_generator::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(255), "ff");
/// assert_eq!(encode(256), "100");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(16);
    while n > 0 {
        digits.push(HEX_ALPHABET[(n % BASE) as usize]);
        n /= BASE;
    }
    digits.reverse();

    // Every byte comes from HEX_ALPHABET, which is ASCII.
    digits.into_iter().map(char::from).collect()
}

/// Returns the sequence value the next mapping will receive.
///
/// `current_max` is the largest id in storage, `None` for an empty store.
pub fn next_sequence_value(current_max: Option<i64>) -> i64 {
    current_max.unwrap_or(0) + 1
}

/// Builds the public short URL for a code.
pub fn short_url(prefix: &str, code: &str) -> String {
    format!("{prefix}{code}")
}

/// Extracts the short code from user input.
///
/// Accepts either a bare code (`"1f"`) or a full short URL carrying the
/// configured prefix (`"cnjr.lnk/1f"`). Surrounding whitespace is ignored.
pub fn code_from_input<'a>(prefix: &str, input: &'a str) -> &'a str {
    let input = input.trim();
    input.strip_prefix(prefix).unwrap_or(input)
}
