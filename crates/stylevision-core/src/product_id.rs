use std::fmt;

use chrono::{Datelike, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StylevisionError;

/// Attempts made by [`ProductId::generate_unique`] before giving up.
pub const MAX_GENERATE_ATTEMPTS: usize = 32;

const RANDOM_SPACE: u32 = 100_000_000;

/// Product identifier of the form `YY_DDDDDDDD`: two-digit year, underscore,
/// eight random decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Random id for the current local year. No collision check.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng(), Local::now().year())
    }

    pub fn generate_with<R: Rng>(rng: &mut R, year: i32) -> Self {
        let digits: u32 = rng.gen_range(0..RANDOM_SPACE);
        Self(format!("{:02}_{:08}", year.rem_euclid(100), digits))
    }

    /// Generate ids until `is_taken` accepts one.
    pub fn generate_unique<F>(mut is_taken: F) -> Result<Self, StylevisionError>
    where
        F: FnMut(&ProductId) -> bool,
    {
        for _ in 0..MAX_GENERATE_ATTEMPTS {
            let id = Self::generate();
            if !is_taken(&id) {
                return Ok(id);
            }
        }
        Err(StylevisionError::Conflict(format!(
            "no free product id after {MAX_GENERATE_ATTEMPTS} attempts"
        )))
    }

    pub fn parse(s: &str) -> Result<Self, StylevisionError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 11
            && bytes[2] == b'_'
            && bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[3..].iter().all(u8::is_ascii_digit);
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(StylevisionError::InvalidInput(format!(
                "product id must look like YY_DDDDDDDD, got {s:?}"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year_prefix(&self) -> &str {
        &self.0[..2]
    }

    /// Name of the image file stored for this product.
    pub fn image_filename(&self) -> String {
        format!("{}.jpg", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = StylevisionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
