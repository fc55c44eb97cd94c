//! Integration tests for the BIKE-1 key encapsulation mechanism

use bike::prelude::*;
use bike_kem::bike::nist;
use bike_kem::bike::Bike1L1Params;
use bike_tests::sha384_hex;
use bike_tests::vectors::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn round_trip<K: Kem>()
where
    K::SharedSecret: AsRef<[u8]>,
{
    let mut rng = OsRng;

    // Generate keypair
    let keypair = K::keypair(&mut rng).unwrap();
    let public_key = K::public_key(&keypair);
    let secret_key = K::secret_key(&keypair);

    // Encapsulate
    let (ciphertext, shared_secret_sender) = K::encapsulate(&mut rng, &public_key).unwrap();

    // Decapsulate
    let shared_secret_recipient = K::decapsulate(&secret_key, &ciphertext).unwrap();

    // Verify shared secrets match
    assert_eq!(
        shared_secret_sender.as_ref(),
        shared_secret_recipient.as_ref()
    );
}

#[test]
fn test_bike1_l1_kem() {
    round_trip::<Bike1L1>();
}

#[test]
fn test_bike1_l3_kem() {
    round_trip::<Bike1L3>();
}

#[test]
fn test_bike1_l5_kem() {
    round_trip::<Bike1L5>();
}

#[test]
fn test_known_answer_level1() {
    let [s0, s1, s2] = KEYGEN_SEEDS;
    let (pk, sk) = Bike1L1::keypair_from_seeds(&SeedTriple::new(s0, s1, s2)).unwrap();
    assert_eq!(sha384_hex(&pk.to_bytes()), PUBLIC_KEY_SHA384);
    assert_eq!(sha384_hex(&sk.to_bytes_zeroizing()), SECRET_KEY_SHA384);

    let [e0, e1] = ENCAPS_SEEDS;
    let (ct, ss) = Bike1L1::encapsulate_with_seeds(&pk, &SeedPair::new(e0, e1)).unwrap();
    assert_eq!(sha384_hex(&ct.to_bytes()), CIPHERTEXT_SHA384);
    assert_eq!(hex::encode(ss.as_bytes()), SHARED_SECRET);
}

#[test]
fn test_known_answer_through_serialized_keys() {
    // Keys survive a trip through their byte encodings
    let [s0, s1, s2] = KEYGEN_SEEDS;
    let (pk, sk) = Bike1L1::keypair_from_seeds(&SeedTriple::new(s0, s1, s2)).unwrap();
    let pk = BikePublicKey::<Bike1L1Params>::from_bytes(&pk.to_bytes()).unwrap();
    let sk = BikeSecretKey::<Bike1L1Params>::from_bytes(&sk.to_bytes_zeroizing()).unwrap();

    let [e0, e1] = ENCAPS_SEEDS;
    let (ct, _) = Bike1L1::encapsulate_with_seeds(&pk, &SeedPair::new(e0, e1)).unwrap();
    let ct = BikeCiphertext::<Bike1L1Params>::from_bytes(&ct.to_bytes()).unwrap();

    let ss = Bike1L1::decapsulate(&sk, &ct).unwrap();
    assert_eq!(hex::encode(ss.as_bytes()), SHARED_SECRET);
}

#[test]
fn test_nist_interface_rejection() {
    let [s0, s1, s2] = KEYGEN_SEEDS;
    let (pk, sk) = Bike1L1::keypair_from_seeds(&SeedTriple::new(s0, s1, s2)).unwrap();
    let [e0, e1] = ENCAPS_SEEDS;
    let (ct, _) = Bike1L1::encapsulate_with_seeds(&pk, &SeedPair::new(e0, e1)).unwrap();

    let r_size = pk.to_bytes().len() / 2;
    let mut ct_bytes = ct.to_bytes();
    for b in ct_bytes[..r_size].iter_mut() {
        *b ^= 0xFF;
    }
    // Level 1 has r = 11779, three valid bits in the last byte
    ct_bytes[r_size - 1] &= 0x07;

    let mut ss = [0u8; 32];
    nist::crypto_kem_dec::<Bike1L1Params>(&mut ss, &ct_bytes, &sk.to_bytes_zeroizing()).unwrap();
    assert_eq!(hex::encode(ss), REJECTION_SECRET_FLIPPED_C0);
}

#[test]
fn test_mismatched_keys_give_different_secrets() {
    let mut rng = ChaChaRng::seed_from_u64(99);
    let (pk, _) = Bike1L1::keypair(&mut rng).unwrap();
    let (_, other_sk) = Bike1L1::keypair(&mut rng).unwrap();

    let (ct, ss) = Bike1L1::encapsulate(&mut rng, &pk).unwrap();
    let wrong = Bike1L1::decapsulate(&other_sk, &ct).unwrap();
    assert_ne!(ss.as_bytes(), wrong.as_bytes());
}

#[test]
fn test_error_conversion_on_bad_input() {
    let err = BikeCiphertext::<Bike1L1Params>::from_bytes(&[0u8; 10]).unwrap_err();
    assert!(matches!(err, Error::InvalidCiphertext { .. }));
}
