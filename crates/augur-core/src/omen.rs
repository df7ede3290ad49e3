//! Omens: hints read from the shape of the guess itself rather than its
//! distance to the answer.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

/// A property of the guess that the oracle remarks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Omen {
    /// The guess has exactly two digits.
    TwoFaces,
    /// The guess is even.
    Balance,
    /// The guess contains the digit 4.
    RightAngle,
    /// The guess contains the digit 2.
    Duet,
}

impl Omen {
    /// All omens, in the order they are read.
    pub fn all() -> &'static [Self] {
        &[Self::TwoFaces, Self::Balance, Self::RightAngle, Self::Duet]
    }
}

impl std::fmt::Display for Omen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwoFaces => write!(f, "The answer wears two faces."),
            Self::Balance => write!(f, "Balance. Symmetry. A paired rhythm."),
            Self::RightAngle => write!(f, "A right-angled shape flashes behind your eyes."),
            Self::Duet => write!(f, "You hear a duet, two notes insisting they belong together."),
        }
    }
}

/// Read every omen present in `guess`. An empty result means static.
pub fn read_omens(guess: &BigInt) -> Vec<Omen> {
    let magnitude = guess.abs();
    let digits = magnitude.to_string();

    let mut omens = Vec::new();
    if digits.len() == 2 {
        omens.push(Omen::TwoFaces);
    }
    if (guess % BigInt::from(2)).is_zero() {
        omens.push(Omen::Balance);
    }
    if digits.contains('4') {
        omens.push(Omen::RightAngle);
    }
    if digits.contains('2') {
        omens.push(Omen::Duet);
    }
    omens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn omens(n: i64) -> Vec<Omen> {
        read_omens(&BigInt::from(n))
    }

    #[test]
    fn forty_two_reads_everything() {
        assert_eq!(omens(42), Omen::all().to_vec());
    }

    #[test]
    fn negative_two_digit() {
        assert_eq!(omens(-42), Omen::all().to_vec());
        assert_eq!(omens(-13), vec![Omen::TwoFaces]);
    }

    #[test]
    fn static_guess() {
        assert!(omens(7).is_empty());
        assert!(omens(135).is_empty());
    }

    #[test]
    fn individual_properties() {
        assert_eq!(omens(8), vec![Omen::Balance]);
        assert_eq!(omens(401), vec![Omen::RightAngle]);
        assert_eq!(omens(123), vec![Omen::Duet]);
        assert_eq!(omens(0), vec![Omen::Balance]);
        assert_eq!(omens(99), vec![Omen::TwoFaces]);
        assert_eq!(omens(100), vec![Omen::Balance]);
    }

    #[test]
    fn huge_guess() {
        let big = num_traits::pow(BigInt::from(10), 30) + BigInt::from(4);
        assert_eq!(read_omens(&big), vec![Omen::Balance, Omen::RightAngle]);
    }
}
