//! Little-endian packing between byte buffers and machine words
//!
//! Bit vectors are stored as little-endian bytes on the wire and as `u64`
//! words during arithmetic. Bit `i` of a vector is bit `i % 8` of byte `i / 8`
//! and bit `i % 64` of word `i / 64` in both forms.

/// Read a little-endian `u32` from the first four bytes of `bytes`
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Number of `u64` words needed to hold `byte_len` bytes
pub const fn words_for_bytes(byte_len: usize) -> usize {
    (byte_len + 7) / 8
}

/// Pack little-endian bytes into words.
///
/// `words` must hold at least `words_for_bytes(bytes.len())` entries; words
/// past the end of the input are cleared.
pub fn load_le_words(words: &mut [u64], bytes: &[u8]) {
    for w in words.iter_mut() {
        *w = 0;
    }
    for (w, chunk) in words.iter_mut().zip(bytes.chunks(8)) {
        let mut buf = [0u8; 8];
        buf[..chunk.len()].copy_from_slice(chunk);
        *w = u64::from_le_bytes(buf);
    }
}

/// Unpack words into little-endian bytes, filling exactly `bytes.len()` bytes
pub fn store_le_words(bytes: &mut [u8], words: &[u64]) {
    for (chunk, w) in bytes.chunks_mut(8).zip(words.iter()) {
        let buf = w.to_le_bytes();
        let n = chunk.len();
        chunk.copy_from_slice(&buf[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_round_trip_partial_tail() {
        let bytes: Vec<u8> = (1..=11).collect();
        let mut words = [0xFFFF_FFFF_FFFF_FFFFu64; 3];
        load_le_words(&mut words, &bytes);

        assert_eq!(words[0], 0x0807_0605_0403_0201);
        assert_eq!(words[1], 0x0000_0000_000B_0A09);
        assert_eq!(words[2], 0);

        let mut back = [0u8; 11];
        store_le_words(&mut back, &words);
        assert_eq!(&back[..], &bytes[..]);
    }

    #[test]
    fn test_u32_from_le_bytes() {
        assert_eq!(u32_from_le_bytes(&[0x78, 0x56, 0x34, 0x12, 0xFF]), 0x1234_5678);
    }
}
