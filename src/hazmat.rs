//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core encryption and decryption
//! primitives to raw integers without adding or removing any padding. Textbook
//! RSA is deterministic and malleable: equal messages give equal ciphertexts
//! and ciphertexts can be multiplied together. It is suitable for teaching and
//! for building well-reviewed higher-level constructions, not for protecting
//! data on its own.

pub use crate::algorithms::rsa::{rsa_decrypt, rsa_decrypt_and_check, rsa_encrypt};
