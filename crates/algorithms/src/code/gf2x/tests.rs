use super::*;
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

const L1_R: usize = 11779;

fn random_element(ring: &CyclicRing, rng: &mut ChaChaRng) -> Vec<u8> {
    let mut bytes = vec![0u8; ring.r_size()];
    rng.fill_bytes(&mut bytes);
    ring.mask_padding(&mut bytes);
    bytes
}

fn bit(bytes: &[u8], i: usize) -> bool {
    (bytes[i / 8] >> (i % 8)) & 1 == 1
}

/// Bit-by-bit product, quadratic in r
fn reference_mul(r: usize, a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; (r + 7) / 8];
    for i in (0..r).filter(|&i| bit(a, i)) {
        for j in (0..r).filter(|&j| bit(b, j)) {
            let k = (i + j) % r;
            out[k / 8] ^= 1 << (k % 8);
        }
    }
    out
}

fn one(ring: &CyclicRing) -> Vec<u8> {
    let mut bytes = vec![0u8; ring.r_size()];
    bytes[0] = 1;
    bytes
}

#[test]
fn test_ring_sizes() {
    let ring = CyclicRing::new(L1_R);
    assert_eq!(ring.r_size(), 1473);
    assert_eq!(ring.r_qw(), 185);
    assert_eq!(ring.last_byte_mask(), 0x07);
    assert_eq!(ring.last_word_mask(), (1u64 << 3) - 1);
    assert_eq!(ring.dup_qw(), 371);

    let ring = CyclicRing::new(24821);
    assert_eq!(ring.r_size(), 3103);
    assert_eq!(ring.last_byte_mask(), 0x1F);

    let ring = CyclicRing::new(40597);
    assert_eq!(ring.r_size(), 5075);
    assert_eq!(ring.last_byte_mask(), 0x1F);
}

#[test]
fn test_wraparound_in_small_ring() {
    // (1 + x) * x^10 = x^10 + x^11 = x^10 + 1 mod x^11 - 1
    let ring = CyclicRing::new(11);
    let a = [0b0000_0011, 0];
    let b = [0, 0b0000_0100];

    let prod = ring.mod_mul(&a, &b).unwrap();
    assert_eq!(&prod[..], &[0b0000_0001, 0b0000_0100]);

    let sparse = ring.mod_mul_sparse(&a, &[10]).unwrap();
    assert_eq!(&sparse[..], &prod[..]);
}

#[test]
fn test_dense_mul_matches_reference() {
    // 1283 bits is 21 words, enough to take the Karatsuba path
    let ring = CyclicRing::new(1283);
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..3 {
        let a = random_element(&ring, &mut rng);
        let b = random_element(&ring, &mut rng);
        let prod = ring.mod_mul(&a, &b).unwrap();
        assert_eq!(&prod[..], &reference_mul(1283, &a, &b)[..]);
    }
}

#[test]
fn test_sparse_mul_matches_dense() {
    let ring = CyclicRing::new(L1_R);
    let mut rng = ChaChaRng::seed_from_u64(7);

    let a = random_element(&ring, &mut rng);
    let indices: Vec<u32> = (0..71).map(|_| rng.next_u32() % L1_R as u32).collect();

    let mut dense = vec![0u8; ring.r_size()];
    for &idx in &indices {
        dense[idx as usize / 8] ^= 1 << (idx % 8);
    }

    let expected = ring.mod_mul(&a, &dense).unwrap();
    let actual = ring.mod_mul_sparse(&a, &indices).unwrap();
    assert_eq!(&actual[..], &expected[..]);
}

#[test]
fn test_sparse_mul_extreme_positions() {
    let ring = CyclicRing::new(L1_R);
    let mut rng = ChaChaRng::seed_from_u64(3);
    let a = random_element(&ring, &mut rng);

    // Index zero is a full rotation
    let same = ring.mod_mul_sparse(&a, &[0]).unwrap();
    assert_eq!(&same[..], &a[..]);

    let last = (L1_R - 1) as u32;
    let rotated = ring.mod_mul_sparse(&a, &[last]).unwrap();
    for j in 0..L1_R {
        assert_eq!(bit(&rotated, j), bit(&a, (j + 1) % L1_R), "bit {}", j);
    }

    assert!(ring.mod_mul_sparse(&a, &[L1_R as u32]).is_err());
}

#[test]
fn test_rotate_right() {
    let ring = CyclicRing::new(L1_R);
    let mut rng = ChaChaRng::seed_from_u64(11);
    let a = random_element(&ring, &mut rng);
    let words = ring.to_words(&a).unwrap();
    let dup = ring.duplicate(&words);
    let mut out = vec![0u64; ring.dup_qw()];

    for shift in [0u32, 1, 63, 64, 65, 4097, 11778, 11779] {
        ring.rotate_right(&mut out, &dup, shift);
        let rotated = ring.to_bytes(&out);
        for j in 0..L1_R {
            let src = (j + shift as usize) % L1_R;
            assert_eq!(bit(&rotated, j), bit(&a, src), "shift {} bit {}", shift, j);
        }
    }
}

#[test]
fn test_add_and_weight() {
    let a = [0xFFu8, 0x01];
    let b = [0x0Fu8, 0x01];
    let sum = add(&a, &b).unwrap();
    assert_eq!(&sum[..], &[0xF0, 0x00]);
    assert_eq!(hamming_weight(&sum), 4);
    assert_eq!(hamming_weight_words(&[u64::MAX, 1]), 65);

    assert!(add(&a, &[0u8; 3]).is_err());
}

#[test]
fn test_length_and_padding_checks() {
    let ring = CyclicRing::new(L1_R);
    assert!(ring.to_words(&[0u8; 1472]).is_err());
    assert!(ring.mod_mul(&[0u8; 1473], &[0u8; 1474]).is_err());

    let mut bytes = vec![0u8; 1473];
    assert!(ring.is_canonical(&bytes));
    bytes[1472] = 0x08;
    assert!(!ring.is_canonical(&bytes));
    ring.mask_padding(&mut bytes);
    assert!(ring.is_canonical(&bytes));
}

#[test]
fn test_multiplicative_identity() {
    let ring = CyclicRing::new(L1_R);
    let mut rng = ChaChaRng::seed_from_u64(5);
    let a = random_element(&ring, &mut rng);

    let prod = ring.mod_mul(&a, &one(&ring)).unwrap();
    assert_eq!(&prod[..], &a[..]);
}

proptest! {
    #[test]
    fn prop_mul_commutes(seed in any::<u64>()) {
        let ring = CyclicRing::new(1283);
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let a = random_element(&ring, &mut rng);
        let b = random_element(&ring, &mut rng);

        prop_assert_eq!(&ring.mod_mul(&a, &b).unwrap()[..], &ring.mod_mul(&b, &a).unwrap()[..]);
    }

    #[test]
    fn prop_mul_distributes(seed in any::<u64>()) {
        let ring = CyclicRing::new(587);
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let a = random_element(&ring, &mut rng);
        let b = random_element(&ring, &mut rng);
        let c = random_element(&ring, &mut rng);

        let lhs = ring.mod_mul(&a, &add(&b, &c).unwrap()).unwrap();
        let rhs = add(&ring.mod_mul(&a, &b).unwrap(), &ring.mod_mul(&a, &c).unwrap()).unwrap();
        prop_assert_eq!(&lhs[..], &rhs[..]);
    }

    #[test]
    fn prop_sparse_matches_dense(seed in any::<u64>(), count in 1usize..20) {
        let r = 587usize;
        let ring = CyclicRing::new(r);
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let a = random_element(&ring, &mut rng);
        let indices: Vec<u32> = (0..count).map(|_| rng.next_u32() % r as u32).collect();

        let mut dense = vec![0u8; ring.r_size()];
        for &idx in &indices {
            dense[idx as usize / 8] ^= 1 << (idx % 8);
        }
        prop_assert_eq!(
            &ring.mod_mul_sparse(&a, &indices).unwrap()[..],
            &ring.mod_mul(&a, &dense).unwrap()[..]
        );
    }
}
