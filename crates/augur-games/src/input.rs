//! Guess parsing.
//!
//! Rejected input never reaches the engine, so a bad line costs nothing.

use augur_core::BigInt;

use crate::error::{GameError, GameResult};

/// Parse an arbitrary-precision signed integer.
pub fn parse_guess(input: &str) -> GameResult<BigInt> {
    let trimmed = input.trim();
    trimmed
        .parse::<BigInt>()
        .map_err(|_| GameError::InvalidGuess(trimmed.to_string()))
}

/// Parse a 64-bit signed integer.
pub fn parse_guess_i64(input: &str) -> GameResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GameError::InvalidGuess(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_big() {
        assert_eq!(parse_guess(" 42 ").unwrap(), BigInt::from(42));
        assert_eq!(parse_guess("-7").unwrap(), BigInt::from(-7));
        let huge = parse_guess("1000000000000000000000000").unwrap();
        assert!(huge > BigInt::from(i64::MAX));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "   ", "abc", "4.2", "12a", "--3"] {
            assert!(
                matches!(parse_guess(bad), Err(GameError::InvalidGuess(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn i64_rejects_overflow() {
        assert_eq!(parse_guess_i64("9223372036854775807").unwrap(), i64::MAX);
        assert!(parse_guess_i64("9223372036854775808").is_err());
        assert!(parse_guess_i64("x").is_err());
    }
}
