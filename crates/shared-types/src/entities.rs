//! # Core Value Objects
//!
//! ## Clusters
//!
//! - **Identity**: `Address` (20 bytes)
//! - **Content addressing**: `Hash` (32 bytes), `keccak256`
//! - **Amounts**: `U256` token amounts, `to_base_units`
//! - **Ledger indices**: `ListingId`, `ReviewId`

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// Number of decimals used by the posting-fee token.
pub const TOKEN_DECIMALS: u8 = 18;

/// Dense index of a job listing, always in `[0, listing_count)`.
pub type ListingId = u64;

/// Dense index of a review, always in `[0, review_count)`.
pub type ReviewId = u64;

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte Ethereum-style account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parses a `0x`-prefixed (or bare) 40 hex digit address.
    pub fn from_hex(input: &str) -> Result<Self, ParseError> {
        let bytes = decode_hex(input)?;
        if bytes.len() != 20 {
            return Err(ParseError::InvalidLength {
                expected: 20,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; 20];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// HASH (32 bytes)
// =============================================================================

/// A 32-byte content hash (keccak-256 of the review text by convention).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// The zero hash. Reserved: never a valid review hash.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Creates a hash from a 32-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parses hex into a hash.
    ///
    /// Short inputs are right-padded with zero bytes, the way a `bytes32`
    /// conversion treats them, so `0x1234abcd` becomes `0x1234abcd00...00`.
    pub fn from_hex(input: &str) -> Result<Self, ParseError> {
        let bytes = decode_hex(input)?;
        if bytes.len() > 32 {
            return Err(ParseError::TooLong {
                actual: bytes.len(),
                max: 32,
            });
        }
        let mut out = [0u8; 32];
        out[..bytes.len()].copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Keccak-256 of arbitrary text.
    #[must_use]
    pub fn of_text(text: &str) -> Self {
        keccak256(text.as_bytes())
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true if this is the zero hash.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[28..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Computes keccak-256 over `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    Hash(Keccak256::digest(data).into())
}

/// Derives a well-known account from a label: the low 20 bytes of
/// `keccak256(label)`.
#[must_use]
pub fn derive_address(label: &str) -> Address {
    let digest = keccak256(label.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest.0[12..]);
    Address(bytes)
}

/// Converts a whole-token amount into base units (`amount * 10^18`).
#[must_use]
pub fn to_base_units(whole: u64) -> U256 {
    U256::from(whole) * U256::exp10(usize::from(TOKEN_DECIMALS))
}

fn decode_hex(input: &str) -> Result<Vec<u8>, ParseError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    if digits.len() % 2 == 1 {
        return Ok(hex::decode(format!("0{digits}"))?);
    }
    Ok(hex::decode(digits)?)
}

// =============================================================================
// TESTS
// =============================================================================
