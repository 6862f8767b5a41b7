use {
    std::{fmt, str::FromStr},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseHashError {
    #[error("Invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("Expected {expected} bytes, got {given}")]
    Length { expected: usize, given: usize },
}

macro_rules! fixed_bytes {
    ($(#[$attr:meta])* $name:ident, $len:literal) => {
        $(#[$attr])*
        #[derive(
            Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;
            pub const ZERO: Self = Self([0; $len]);

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(value: [u8; $len]) -> Self {
                Self(value)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = ParseHashError;

            fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
                let bytes = value.try_into().map_err(|_| ParseHashError::Length {
                    expected: $len,
                    given: value.len(),
                })?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl FromStr for $name {
            type Err = ParseHashError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix("0x").unwrap_or(s);
                let bytes = hex::decode(digits)?;
                Self::try_from(bytes.as_slice())
            }
        }
    };
}

fixed_bytes!(
    /// A 256-bit hash identifying blocks, transactions and assets.
    ///
    /// The canonical text encoding is `0x` followed by 64 lowercase hex digits. Parsing also
    /// accepts the digits without the prefix.
    B256,
    32
);

fixed_bytes!(
    /// A 160-bit script hash that identifies the owner of a transaction output.
    Address,
    20
);

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test]
    fn test_display_is_prefixed_lowercase_hex() {
        let hash = B256::new([0xab; 32]);

        assert_eq!(hash.to_string(), format!("0x{}", "ab".repeat(32)));
    }

    #[test_case("0x0101010101010101010101010101010101010101010101010101010101010101"; "prefixed")]
    #[test_case("0101010101010101010101010101010101010101010101010101010101010101"; "bare")]
    fn test_parse_accepts_hash_text(input: &str) {
        let hash: B256 = input.parse().unwrap();

        assert_eq!(hash, B256::new([1; 32]));
    }

    #[test]
    fn test_parse_accepts_uppercase_digits() {
        let hash: B256 = format!("0x{}", "AB".repeat(32)).parse().unwrap();

        assert_eq!(hash, B256::new([0xab; 32]));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "0xabcd".parse::<B256>().unwrap_err();

        assert_eq!(
            err,
            ParseHashError::Length {
                expected: 32,
                given: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = "0xzz".parse::<Address>().unwrap_err();

        assert!(matches!(err, ParseHashError::Hex(_)));
    }

    #[test]
    fn test_binary_encoding_has_no_length_prefix() {
        let bytes = bcs::to_bytes(&Address::new([7; 20])).unwrap();

        assert_eq!(bytes, vec![7; 20]);
    }
}
