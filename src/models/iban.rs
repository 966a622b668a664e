//! International bank account numbers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error("IBAN contains invalid characters")]
    InvalidCharacters,
    #[error("IBAN must start with a country code and two check digits")]
    InvalidPrefix,
    #[error("IBAN for {country} must have {expected} characters, got {actual}")]
    InvalidLength {
        country: String,
        expected: usize,
        actual: usize,
    },
    #[error("IBAN checksum mismatch")]
    InvalidChecksum,
}

/// Normalized IBAN (upper case, no spaces)
///
/// Values read from the backend are taken as-is; use [`Iban::parse`] to validate user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IbanError::InvalidCharacters);
        }

        let bytes = normalized.as_bytes();
        if bytes.len() < 5
            || !bytes[..2].iter().all(u8::is_ascii_uppercase)
            || !bytes[2..4].iter().all(u8::is_ascii_digit)
        {
            return Err(IbanError::InvalidPrefix);
        }

        let country = &normalized[..2];
        let actual = normalized.len();
        match country_length(country) {
            Some(expected) if expected != actual => {
                return Err(IbanError::InvalidLength {
                    country: country.to_string(),
                    expected,
                    actual,
                })
            }
            None if !(15..=34).contains(&actual) => {
                return Err(IbanError::InvalidLength {
                    country: country.to_string(),
                    expected: 34,
                    actual,
                })
            }
            _ => {}
        }

        // check digits are always 02..=98
        let check_digits: u8 = normalized[2..4].parse().map_err(|_| IbanError::InvalidPrefix)?;
        if !(2..=98).contains(&check_digits) || mod97(&normalized) != 1 {
            return Err(IbanError::InvalidChecksum);
        }

        Ok(Iban(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country(&self) -> &str {
        self.0.get(..2).unwrap_or("")
    }

    /// Print form, grouped in blocks of four
    pub fn formatted(&self) -> String {
        self.0
            .as_bytes()
            .chunks(4)
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// ISO 7064 MOD 97-10 over the rearranged IBAN
fn mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4);
    tail.chars().chain(head.chars()).fold(0u32, |acc, c| {
        let value = c.to_digit(36).unwrap_or(0);
        if value >= 10 {
            (acc * 100 + value) % 97
        } else {
            (acc * 10 + value) % 97
        }
    })
}

fn country_length(country: &str) -> Option<usize> {
    let len = match country {
        "AT" => 20,
        "BE" => 16,
        "CH" => 21,
        "CZ" => 24,
        "DE" => 22,
        "DK" => 18,
        "ES" => 24,
        "FI" => 18,
        "FR" => 27,
        "GB" => 22,
        "IE" => 22,
        "IT" => 27,
        "LI" => 21,
        "LU" => 20,
        "NL" => 18,
        "NO" => 15,
        "PL" => 28,
        "PT" => 25,
        "SE" => 24,
        _ => return None,
    };
    Some(len)
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iban::parse(s)
    }
}

impl From<String> for Iban {
    /// Unchecked conversion for values the backend already validated
    fn from(value: String) -> Self {
        Iban(value)
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
