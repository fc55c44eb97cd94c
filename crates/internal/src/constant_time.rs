//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time equality check that returns a Choice (0 or 1)
///
/// Slices of different lengths compare unequal. Lengths are public, so the
/// early exit leaks nothing about the contents.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time comparison of two byte slices
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality of two 32-bit values
pub fn ct_eq_u32(a: u32, b: u32) -> Choice {
    a.ct_eq(&b)
}

/// Byte-wise constant-time selection
///
/// Writes `on_true[i]` into `dst[i]` when `choice` is set and `on_false[i]`
/// otherwise. All three slices must have the same length.
pub fn ct_select_bytes(dst: &mut [u8], on_true: &[u8], on_false: &[u8], choice: Choice) {
    assert_eq!(dst.len(), on_true.len());
    assert_eq!(dst.len(), on_false.len());

    for ((d, t), f) in dst.iter_mut().zip(on_true).zip(on_false) {
        *d = u8::conditional_select(f, t, choice);
    }
}

/// All-ones word when the lowest bit of `bit` is set, zero otherwise
#[inline(always)]
pub fn ct_mask_u64(bit: u64) -> u64 {
    0u64.wrapping_sub(bit & 1)
}
