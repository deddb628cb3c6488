use super::error::ChainIdError;

/// Symbols available for chain identifiers, in encoding order.
pub const CHAIN_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

/// Alphabet size used when compacting chains: upper case, digits and lower case.
pub const DEFAULT_CHAIN_BASE: i64 = CHAIN_ALPHABET.len() as i64;

/// Converts a non-negative integer into a chain identifier.
///
/// The encoding is bijective base-`base` over the first `base` symbols of
/// [`CHAIN_ALPHABET`]: `0 -> "A"`, `25 -> "Z"`, `26 -> "0"`, `61 -> "z"`,
/// `62 -> "AA"`, `63 -> "AB"`. There is no zero digit, so every integer has
/// exactly one representation and no two integers share one.
///
/// # Errors
///
/// Returns [`ChainIdError::InvalidArgument`] if `i` is negative or `base` is
/// outside `1..=62`.
pub fn int_to_chain(i: i64, base: i64) -> Result<String, ChainIdError> {
    if i < 0 {
        return Err(ChainIdError::InvalidArgument(format!(
            "chain index must be non-negative, got {i}"
        )));
    }
    if !(1..=DEFAULT_CHAIN_BASE).contains(&base) {
        return Err(ChainIdError::InvalidArgument(format!(
            "alphabet size must be between 1 and {DEFAULT_CHAIN_BASE}, got {base}"
        )));
    }

    let mut digits = Vec::new();
    let mut n = i;
    loop {
        digits.push(CHAIN_ALPHABET[(n % base) as usize]);
        let quotient = n / base;
        if quotient == 0 {
            break;
        }
        n = quotient - 1;
    }
    digits.reverse();

    Ok(digits.into_iter().map(char::from).collect())
}
