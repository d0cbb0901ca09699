//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use textbook_rsa::{
    message, BigUint, DecodeRsaKey, EncodeRsaKey, KeyFields, PublicKeyParts, RsaPrivateKey,
};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn private_key()(seed in any::<[u8; 32]>()) -> RsaPrivateKey {
        let mut rng = ChaCha8Rng::from_seed(seed);
        RsaPrivateKey::new(&mut rng, 256).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn encrypt_decrypt_roundtrip(private_key in private_key(), bytes in any::<Vec<u8>>()) {
        let public_key = private_key.to_public_key();
        let m = BigUint::from_bytes_be(&bytes) % public_key.n();

        let c = public_key.encrypt(&m);
        prop_assert!(&c < public_key.n());
        prop_assert_eq!(private_key.decrypt(&c), m);
    }

    #[test]
    fn short_message_roundtrip(private_key in private_key(), msg in proptest::collection::vec(1u8.., 0..31)) {
        // Up to 30 non-zero bytes always stay below a 256-bit modulus.
        let c = private_key.encrypt(&message::encode(&msg));
        prop_assert_eq!(message::decode(&private_key.decrypt(&c)), msg);
    }

    #[test]
    fn key_codec_roundtrip(d in 1u64.., e in 1u64.., n in 1u64..) {
        let key = RsaPrivateKey::from_components(n.into(), e.into(), d.into()).unwrap();
        let encoded = key.to_key_string();
        prop_assert_eq!(RsaPrivateKey::from_key_str(&encoded).unwrap(), key);
    }

    #[test]
    fn fields_roundtrip(d in proptest::option::of(1u64..), e in proptest::option::of(1u64..), n in proptest::option::of(1u64..)) {
        let fields = KeyFields {
            d: d.map(BigUint::from),
            e: e.map(BigUint::from),
            n: n.map(BigUint::from),
        };
        let encoded = fields.to_string();
        prop_assert_eq!(KeyFields::read_from(encoded.as_bytes()).unwrap(), fields);
    }
}
