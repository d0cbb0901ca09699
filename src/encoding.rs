//! Key file encoding support.
//!
//! Keys are stored as newline-terminated `<tag> <decimal integer>` lines:
//!
//! ```text
//! d <private exponent>
//! e <public exponent>
//! n <modulus>
//! ```
//!
//! The `d` line is only present for private keys. Lines may come in any
//! order, each tag at most once, and every value must be strictly positive.

use core::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use num_bigint::{BigInt, BigUint, IntoBigUint};
use num_traits::Signed;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Error, KeyRole, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// The raw components found in a key file.
///
/// This is what the parser produces before any role check: every field that
/// is set is strictly positive, but any of them may be missing. Converting
/// into [`RsaPublicKey`] or [`RsaPrivateKey`] checks that the fields needed
/// for that role are present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyFields {
    /// Private exponent
    pub d: Option<BigUint>,
    /// Public exponent
    pub e: Option<BigUint>,
    /// Modulus
    pub n: Option<BigUint>,
}

impl KeyFields {
    /// Parse key lines from `reader` until end of input.
    ///
    /// Blank lines are skipped. An unknown tag, a malformed or non-positive
    /// integer, or a second line for the same tag fails with
    /// [`Error::ParseError`]. Which fields ended up present is not checked
    /// here.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self> {
        let mut fields = KeyFields::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = Zeroizing::new(line?);
            let lineno = idx + 1;

            let mut tokens = line.split_whitespace();
            let (tag, value) = match (tokens.next(), tokens.next(), tokens.next()) {
                (None, _, _) => continue,
                (Some(tag), Some(value), None) => (tag, value),
                _ => return Err(Error::parse(lineno, "expected `<tag> <integer>`")),
            };

            let slot = match tag {
                "d" => &mut fields.d,
                "e" => &mut fields.e,
                "n" => &mut fields.n,
                _ => return Err(Error::parse(lineno, format!("unknown tag `{tag}`"))),
            };

            if slot.is_some() {
                return Err(Error::parse(lineno, format!("duplicate `{tag}` line")));
            }

            let mut value = parse_decimal(value)
                .ok_or_else(|| Error::parse(lineno, format!("malformed integer for `{tag}`")))?;
            if !value.is_positive() {
                value.zeroize();
                return Err(Error::parse(lineno, format!("`{tag}` must be positive")));
            }

            *slot = value.into_biguint();
        }

        Ok(fields)
    }

    /// Write the present fields to `writer` in `d`, `e`, `n` order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{self}")?;
        Ok(())
    }
}

/// Parse an optionally signed run of ASCII decimal digits.
///
/// `BigInt::parse_bytes` also takes `_` separators, which the key format
/// does not allow.
fn parse_decimal(value: &str) -> Option<BigInt> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(value.as_bytes(), 10)
}

impl fmt::Display for KeyFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, value) in [('d', &self.d), ('e', &self.e), ('n', &self.n)] {
            if let Some(value) = value {
                writeln!(f, "{tag} {value}")?;
            }
        }
        Ok(())
    }
}

impl Drop for KeyFields {
    fn drop(&mut self) {
        if let Some(d) = self.d.as_mut() {
            d.zeroize();
        }
    }
}

impl From<&RsaPublicKey> for KeyFields {
    fn from(key: &RsaPublicKey) -> Self {
        KeyFields {
            d: None,
            e: Some(key.e().clone()),
            n: Some(key.n().clone()),
        }
    }
}

impl From<&RsaPrivateKey> for KeyFields {
    fn from(key: &RsaPrivateKey) -> Self {
        KeyFields {
            d: Some(key.d().clone()),
            e: Some(key.e().clone()),
            n: Some(key.n().clone()),
        }
    }
}

impl TryFrom<KeyFields> for RsaPublicKey {
    type Error = Error;

    /// A `d` field, if present, is discarded.
    fn try_from(mut fields: KeyFields) -> Result<Self> {
        match (fields.n.take(), fields.e.take()) {
            (Some(n), Some(e)) => RsaPublicKey::new(n, e),
            _ => Err(Error::InvalidKey(KeyRole::Public)),
        }
    }
}

impl TryFrom<KeyFields> for RsaPrivateKey {
    type Error = Error;

    fn try_from(mut fields: KeyFields) -> Result<Self> {
        match (fields.n.take(), fields.e.take(), fields.d.take()) {
            (Some(n), Some(e), Some(d)) => RsaPrivateKey::from_components(n, e, d),
            (_, _, Some(mut d)) => {
                d.zeroize();
                Err(Error::InvalidKey(KeyRole::Private))
            }
            _ => Err(Error::InvalidKey(KeyRole::Private)),
        }
    }
}

/// Decode an RSA key from the key file format.
pub trait DecodeRsaKey: TryFrom<KeyFields, Error = Error> {
    /// Parse a key from `reader` and check that it holds the fields this key
    /// type needs, failing with [`Error::InvalidKey`] otherwise.
    fn from_key_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::try_from(KeyFields::read_from(reader)?)
    }

    /// Parse a key from a string.
    fn from_key_str(s: &str) -> Result<Self> {
        Self::from_key_reader(s.as_bytes())
    }

    /// Load a key from the file at `path`.
    ///
    /// For [`RsaPrivateKey`] this requires `d`, `e` and `n`. For
    /// [`RsaPublicKey`] it requires `e` and `n` and accepts a private key file.
    fn read_key_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_key_reader(BufReader::new(file))
    }
}

impl DecodeRsaKey for RsaPublicKey {}
impl DecodeRsaKey for RsaPrivateKey {}

/// Encode an RSA key in the key file format.
pub trait EncodeRsaKey {
    /// The fields this key serializes.
    fn to_key_fields(&self) -> KeyFields;

    /// Write the key to `writer`.
    fn write_key<W: Write>(&self, writer: W) -> Result<()> {
        self.to_key_fields().write_to(writer)
    }

    /// Serialize the key to a string, which is wiped when dropped.
    fn to_key_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.to_key_fields().to_string())
    }

    /// Write the key to the file at `path`, replacing its contents.
    fn write_key_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_key(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl EncodeRsaKey for RsaPublicKey {
    fn to_key_fields(&self) -> KeyFields {
        self.into()
    }
}

impl EncodeRsaKey for RsaPrivateKey {
    fn to_key_fields(&self) -> KeyFields {
        self.into()
    }
}
