//! Compact binary and text encodings for [`Digits`]
//!
//! # Binary format
//!
//! | Byte | Meaning |
//! |------|---------|
//! | first | format version, currently `1` |
//! | `0..=99` | two consecutive digits `b / 10`, `b % 10` |
//! | `100..=109` | one digit `b - 100` |
//! | `110` | gap: skip the unsigned LEB128 count that follows |
//!
//! Decoding starts at position 0. The text form is lowercase hex of the
//! binary form.

use super::Digits;
use crate::error::{RootError, RootResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Current encoding version
pub const VERSION: u8 = 1;

const SINGLE: u8 = 100;
const GAP: u8 = 110;

impl Digits {
    /// Encode to the binary format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() / 2 + 2);
        out.push(VERSION);

        let mut expected = 0usize;
        let mut i = 0;
        while i < self.positions.len() {
            let position = self.positions[i];
            if position != expected {
                out.push(GAP);
                write_varint(&mut out, (position - expected) as u64);
            }
            if self.positions.get(i + 1) == Some(&(position + 1)) {
                out.push(self.digits[i] * 10 + self.digits[i + 1]);
                i += 2;
                expected = position + 2;
            } else {
                out.push(SINGLE + self.digits[i]);
                i += 1;
                expected = position + 1;
            }
        }
        out
    }

    /// Decode the binary format
    pub fn from_bytes(bytes: &[u8]) -> RootResult<Self> {
        let (&version, body) = bytes.split_first().ok_or(RootError::EmptyEncoding)?;
        if version != VERSION {
            return Err(RootError::UnsupportedVersion(version));
        }

        let mut digits = Digits::default();
        let mut position = 0usize;
        let mut offset = 1;
        let mut rest = body;
        while let Some((&byte, tail)) = rest.split_first() {
            rest = tail;
            match byte {
                0..=99 => {
                    let next = position
                        .checked_add(2)
                        .ok_or(RootError::InvalidByte { offset, byte })?;
                    digits.push(position, byte / 10);
                    digits.push(position + 1, byte % 10);
                    position = next;
                }
                100..=109 => {
                    let next = position
                        .checked_add(1)
                        .ok_or(RootError::InvalidByte { offset, byte })?;
                    digits.push(position, byte - SINGLE);
                    position = next;
                }
                GAP => {
                    let (gap, used) = read_varint(rest, offset + 1)?;
                    rest = &rest[used..];
                    offset += used;
                    position = usize::try_from(gap)
                        .ok()
                        .and_then(|gap| position.checked_add(gap))
                        .ok_or(RootError::InvalidByte { offset, byte })?;
                }
                _ => return Err(RootError::InvalidByte { offset, byte }),
            }
            offset += 1;
        }
        Ok(digits)
    }

    /// Encode to the text (hex) format
    pub fn to_text(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode the text (hex) format
    pub fn from_text(text: &str) -> RootResult<Self> {
        let bytes = hex::decode(text.trim())?;
        Self::from_bytes(&bytes)
    }
}

fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Read an unsigned LEB128 value; `offset` is its position in the input,
/// for error reporting. Returns the value and the number of bytes used.
fn read_varint(bytes: &[u8], offset: usize) -> RootResult<(u64, usize)> {
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate() {
        // The tenth byte only has room for bit 63.
        if i == 9 && byte > 0x01 {
            return Err(RootError::InvalidByte {
                offset: offset + i,
                byte,
            });
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(RootError::Truncated(offset + bytes.len()))
}

impl Serialize for Digits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Digits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_text(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::Positions;
    use crate::root::Root;

    fn digits_of(pairs: &[(usize, u8)]) -> Digits {
        let mut digits = Digits::default();
        for &(position, digit) in pairs {
            digits.push(position, digit);
        }
        digits
    }

    #[test]
    fn encodes_pairs_singles_and_gaps() {
        let digits = digits_of(&[(0, 1), (1, 4), (2, 1), (200, 7)]);
        // version, pair 14, single 1, gap 197, single 7
        assert_eq!(digits.to_bytes(), vec![1, 14, 101, 110, 197, 1, 107]);
    }

    #[test]
    fn empty_digits() {
        let digits = Digits::default();
        assert_eq!(digits.to_bytes(), vec![VERSION]);
        assert_eq!(Digits::from_bytes(&[VERSION]).unwrap(), digits);
    }

    #[test]
    fn root_selection_round_trips() {
        let root = Root::sqrt(2).unwrap();
        let selected = Positions::parse("0..17,40,41,1000..1003,5000").unwrap();
        let digits = Digits::from_sequence(&root, &selected);

        let decoded = Digits::from_bytes(&digits.to_bytes()).unwrap();
        assert_eq!(decoded, digits);

        let decoded = Digits::from_text(&digits.to_text()).unwrap();
        assert_eq!(decoded, digits);
    }

    #[test]
    fn serde_uses_text_form() {
        let digits = digits_of(&[(3, 9), (4, 0)]);
        let json = serde_json::to_string(&digits).unwrap();
        assert_eq!(json, format!("\"{}\"", digits.to_text()));
        let back: Digits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digits);
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            Digits::from_bytes(&[]),
            Err(RootError::EmptyEncoding)
        ));
        assert!(matches!(
            Digits::from_bytes(&[2, 14]),
            Err(RootError::UnsupportedVersion(2))
        ));
        assert!(matches!(
            Digits::from_bytes(&[1, 14, 110, 0x80]),
            Err(RootError::Truncated(_))
        ));
        assert!(matches!(
            Digits::from_bytes(&[1, 14, 111]),
            Err(RootError::InvalidByte { offset: 2, byte: 111 })
        ));
        let err = Digits::from_text("zz").unwrap_err();
        assert!(err.is_decode_error());
    }

    #[test]
    fn gap_to_end_of_range_is_rejected() {
        // A gap to usize::MAX leaves no room for the digits that follow.
        let mut bytes = vec![1, GAP];
        write_varint(&mut bytes, usize::MAX as u64);
        for token in [14, SINGLE + 4] {
            let mut malformed = bytes.clone();
            malformed.push(token);
            let err = Digits::from_bytes(&malformed).unwrap_err();
            assert!(
                matches!(err, RootError::InvalidByte { byte, .. } if byte == token),
                "token {}: {:?}",
                token,
                err
            );
        }

        // A pair needs two free positions.
        let mut malformed = vec![1, GAP];
        write_varint(&mut malformed, usize::MAX as u64 - 1);
        malformed.push(14);
        assert!(matches!(
            Digits::from_bytes(&malformed),
            Err(RootError::InvalidByte { byte: 14, .. })
        ));
    }

    #[test]
    fn overlong_gap_is_rejected() {
        let mut malformed = vec![1, GAP];
        malformed.extend([0x80; 9]);
        malformed.extend([0x7e, 14]);
        assert!(matches!(
            Digits::from_bytes(&malformed),
            Err(RootError::InvalidByte { offset: 11, byte: 0x7e })
        ));

        // Bit 63 alone still fits
        let mut bytes = vec![1, GAP];
        write_varint(&mut bytes, 1 << 63);
        assert_eq!(bytes.len(), 12);
        assert_eq!(bytes[11], 0x01);
    }

    #[test]
    fn text_decode_error_is_classified() {
        let err = Digits::from_text("zz").unwrap_err();
        assert!(err.is_decode_error());
        assert!(serde_json::from_str::<Digits>("\"02\"").is_err());
    }
}
