#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Usage
//!
//! ## Key generation and raw encryption
//!
//! ```
//! use textbook_rsa::{message, RsaPrivateKey, RsaPublicKey};
//!
//! let mut rng = rand_core::OsRng;
//!
//! let bits = 1024;
//! let private_key = RsaPrivateKey::new(&mut rng, bits).expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! // Encrypt
//! let m = message::encode(b"hello world");
//! let c = public_key.encrypt(&m);
//! assert_ne!(c, m);
//!
//! // Decrypt
//! let m = private_key.decrypt(&c);
//! assert_eq!(message::decode(&m), b"hello world");
//! ```
//!
//! ## Key files
//!
//! Keys are stored as `<tag> <decimal>` lines, see [`encoding`]. Decoding
//! as [`RsaPrivateKey`] requires the `d` line; decoding as [`RsaPublicKey`]
//! does not.
//!
//! ```
//! use textbook_rsa::{BigUint, DecodeRsaKey, EncodeRsaKey, RsaPrivateKey, RsaPublicKey};
//!
//! let private_key = RsaPrivateKey::from_key_str("d 2753\ne 17\nn 3233\n")?;
//! let public_key = private_key.to_public_key();
//! assert_eq!(public_key.to_key_string().as_str(), "e 17\nn 3233\n");
//!
//! let c = public_key.encrypt(&BigUint::from(65u8));
//! assert_eq!(c, BigUint::from(2790u16));
//! assert_eq!(private_key.decrypt(&c), BigUint::from(65u8));
//!
//! assert!(RsaPrivateKey::from_key_str("e 17\nn 3233\n").is_err());
//! # Ok::<(), textbook_rsa::Error>(())
//! ```
//!
//! No padding is applied anywhere in this crate; see [`hazmat`] for what that
//! implies.

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod encoding;
pub mod errors;
pub mod hazmat;
pub mod message;
pub mod prime;
pub mod traits;

mod key;

pub use crate::{
    encoding::{DecodeRsaKey, EncodeRsaKey, KeyFields},
    errors::{Error, KeyRole, Result},
    key::{RsaPrivateKey, RsaPublicKey, EXP},
    traits::{PrivateKeyParts, PublicKeyParts},
};
