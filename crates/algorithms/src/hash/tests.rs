use super::*;

#[test]
fn test_sha384_empty() {
    // NIST test vector: Empty string
    let expected = "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b";
    assert_eq!(hex::encode(&Sha384::digest(&[])[..]), expected);
}

#[test]
fn test_sha384_abc() {
    // NIST test vector: "abc"
    let expected = "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7";
    assert_eq!(hex::encode(&Sha384::digest(b"abc")[..]), expected);
}

#[test]
fn test_sha384_parts_match_concatenation() {
    let whole = Sha384::digest(b"abcdefgh");
    let parts = Sha384::digest_parts(&[b"abc", b"", b"defgh"]);
    assert_eq!(whole[..], parts[..]);
}
