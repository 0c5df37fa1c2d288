//! TypeID parsing and category-tag validation.
//!
//! Arcjet resource identifiers are TypeIDs: a lowercase type prefix, an
//! underscore, and a 26 character Crockford base32 encoding of a 128-bit UUID,
//! for example `team_01h455vb4pex5vsknk084sn02q`.
//!
//! Every tool parameter that names a resource goes through
//! [`validate_typeid`] before it is used to build a request path, so malformed
//! or wrongly-tagged identifiers never reach the network.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Crockford base32 alphabet, lowercase, as used by TypeID suffixes.
const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

/// Length of the encoded suffix.
const SUFFIX_LENGTH: usize = 26;

/// Maximum length of the type prefix.
const MAX_PREFIX_LENGTH: usize = 63;

/// Errors that can occur while parsing or validating a TypeID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeIdError {
    #[error("type prefix is longer than 63 characters ({0})")]
    PrefixTooLong(usize),

    #[error("type prefix '{0}' must contain only lowercase letters and underscores, and must not start or end with an underscore")]
    InvalidPrefix(String),

    #[error("type prefix is empty but a separator is present")]
    EmptyPrefixWithSeparator,

    #[error("suffix must be 26 characters, got {0}")]
    InvalidSuffixLength(usize),

    #[error("suffix contains invalid character '{0}'")]
    InvalidSuffixCharacter(char),

    #[error("suffix does not fit in 128 bits")]
    SuffixOverflow,

    #[error("expected type prefix '{expected}', got '{actual}'")]
    PrefixMismatch { expected: String, actual: String },
}

/// A parsed TypeID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId {
    prefix: String,
    uuid: Uuid,
}

impl TypeId {
    /// The category tag (empty for prefix-less identifiers).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The decoded 128-bit value.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The canonical base32 suffix.
    pub fn suffix(&self) -> String {
        encode_suffix(self.uuid.as_u128())
    }
}

impl FromStr for TypeId {
    type Err = TypeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, suffix) = match s.rsplit_once('_') {
            Some(("", _)) => return Err(TypeIdError::EmptyPrefixWithSeparator),
            Some((prefix, suffix)) => {
                validate_prefix(prefix)?;
                (prefix, suffix)
            }
            None => ("", s),
        };

        Ok(Self {
            prefix: prefix.to_string(),
            uuid: Uuid::from_u128(decode_suffix(suffix)?),
        })
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}", self.suffix())
        } else {
            write!(f, "{}_{}", self.prefix, self.suffix())
        }
    }
}

/// Parse `raw` as a TypeID and check that its prefix equals `expected_prefix`.
pub fn validate_typeid(raw: &str, expected_prefix: &str) -> Result<TypeId, TypeIdError> {
    let id: TypeId = raw.parse()?;
    if id.prefix != expected_prefix {
        return Err(TypeIdError::PrefixMismatch {
            expected: expected_prefix.to_string(),
            actual: id.prefix,
        });
    }
    Ok(id)
}

/// Whether `raw` is a well-formed TypeID carrying `expected_prefix`.
///
/// Unparseable input is simply invalid, the same as a wrong tag.
pub fn is_valid_typeid(raw: &str, expected_prefix: &str) -> bool {
    validate_typeid(raw, expected_prefix).is_ok()
}

fn validate_prefix(prefix: &str) -> Result<(), TypeIdError> {
    if prefix.len() > MAX_PREFIX_LENGTH {
        return Err(TypeIdError::PrefixTooLong(prefix.len()));
    }
    let well_formed = prefix.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
        && !prefix.starts_with('_')
        && !prefix.ends_with('_');
    if !well_formed {
        return Err(TypeIdError::InvalidPrefix(prefix.to_string()));
    }
    Ok(())
}

fn decode_suffix(suffix: &str) -> Result<u128, TypeIdError> {
    let len = suffix.chars().count();
    if len != SUFFIX_LENGTH {
        return Err(TypeIdError::InvalidSuffixLength(len));
    }

    let mut value: u128 = 0;
    for (index, c) in suffix.chars().enumerate() {
        let digit = ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(TypeIdError::InvalidSuffixCharacter(c))?;
        // 26 * 5 = 130 bits, so the leading digit may only carry 3.
        if index == 0 && digit > 7 {
            return Err(TypeIdError::SuffixOverflow);
        }
        value = (value << 5) | digit as u128;
    }
    Ok(value)
}

fn encode_suffix(value: u128) -> String {
    (0..SUFFIX_LENGTH)
        .rev()
        .map(|i| ALPHABET[((value >> (i * 5)) & 0x1f) as usize] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAM_ID: &str = "team_01h455vb4pex5vsknk084sn02q";

    #[test]
    fn test_parse_valid_team_id() {
        let id: TypeId = TEAM_ID.parse().unwrap();
        assert_eq!(id.prefix(), "team");
        assert_eq!(
            id.uuid().to_string(),
            "01890a5d-ac96-774b-bcce-b302099a8057"
        );
        assert_eq!(id.to_string(), TEAM_ID);
    }

    #[test]
    fn test_decode_known_values() {
        let cases = [
            ("00000000000000000000000000", "00000000-0000-0000-0000-000000000000"),
            ("00000000000000000000000001", "00000000-0000-0000-0000-000000000001"),
            ("0000000000000000000000000g", "00000000-0000-0000-0000-000000000010"),
            ("7zzzzzzzzzzzzzzzzzzzzzzzzz", "ffffffff-ffff-ffff-ffff-ffffffffffff"),
            ("0123456789abcdefghjkmnpqrs", "0110c853-1d09-52d8-d73e-1194e95b5f19"),
        ];
        for (suffix, uuid) in cases {
            let id: TypeId = suffix.parse().unwrap();
            assert_eq!(id.prefix(), "");
            assert_eq!(id.uuid().to_string(), uuid, "suffix {}", suffix);
            assert_eq!(id.to_string(), suffix);
        }
    }

    #[test]
    fn test_prefix_with_inner_underscore() {
        let id: TypeId = "api_key_01h455vb4pex5vsknk084sn02q".parse().unwrap();
        assert_eq!(id.prefix(), "api_key");
    }

    #[test]
    fn test_validate_matching_prefix() {
        assert!(validate_typeid(TEAM_ID, "team").is_ok());
        assert!(is_valid_typeid(TEAM_ID, "team"));
    }

    #[test]
    fn test_validate_prefix_mismatch() {
        let err = validate_typeid("site_01h455vb4pex5vsknk084sn02q", "team").unwrap_err();
        assert_eq!(
            err,
            TypeIdError::PrefixMismatch {
                expected: "team".to_string(),
                actual: "site".to_string(),
            }
        );
        assert!(!is_valid_typeid("01h455vb4pex5vsknk084sn02q", "team"));
    }

    #[test]
    fn test_malformed_input_is_invalid() {
        let cases = [
            "",
            "team",
            "team_",
            "team_abc",
            "_01h455vb4pex5vsknk084sn02q",
            "Team_01h455vb4pex5vsknk084sn02q",
            "team__01h455vb4pex5vsknk084sn02q",
            "_team_01h455vb4pex5vsknk084sn02q",
            "team-x_01h455vb4pex5vsknk084sn02q",
            "team_01H455VB4PEX5VSKNK084SN02Q",
            "team_01h455vb4pex5vsknk084sn02",
            "team_01h455vb4pex5vsknk084sn02qq",
            "team_01h455vb4pex5vsknk084sn0iq",
            "team_8zzzzzzzzzzzzzzzzzzzzzzzzz",
            "team_01h455vb4pex5vsknk084sné2",
        ];
        for raw in cases {
            assert!(!is_valid_typeid(raw, "team"), "accepted {:?}", raw);
        }
    }

    #[test]
    fn test_specific_errors() {
        assert_eq!(
            "_01h455vb4pex5vsknk084sn02q".parse::<TypeId>(),
            Err(TypeIdError::EmptyPrefixWithSeparator)
        );
        assert_eq!(
            "team_8zzzzzzzzzzzzzzzzzzzzzzzzz".parse::<TypeId>(),
            Err(TypeIdError::SuffixOverflow)
        );
        assert_eq!(
            "team_abc".parse::<TypeId>(),
            Err(TypeIdError::InvalidSuffixLength(3))
        );
        assert_eq!(
            "team_01h455vb4pex5vsknk084sn0uq".parse::<TypeId>(),
            Err(TypeIdError::InvalidSuffixCharacter('u'))
        );

        let long_prefix = "a".repeat(64);
        assert_eq!(
            format!("{}_01h455vb4pex5vsknk084sn02q", long_prefix).parse::<TypeId>(),
            Err(TypeIdError::PrefixTooLong(64))
        );
    }

    #[test]
    fn test_multibyte_suffix_counts_characters() {
        assert_eq!(
            "team_01h455vb4pex5vsknk084sn\u{e9}2q".parse::<TypeId>(),
            Err(TypeIdError::InvalidSuffixCharacter('\u{e9}'))
        );
        assert_eq!(
            "team_01h455vb4pex5vsknk084sn\u{e9}2".parse::<TypeId>(),
            Err(TypeIdError::InvalidSuffixLength(25))
        );
    }
}
