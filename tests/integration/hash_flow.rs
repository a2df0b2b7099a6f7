use std::io::Cursor;

use knotq::cmd::hash::run;
use knotq::engine::knot::knot_hash;

#[test]
fn hash_command_pins_reference_digests() {
    let cases: [(&[u8], &str); 4] = [
        (b"", "a2582a3a0e66e6e86e3812dcb672a272"),
        (b"AoC 2017", "33efeb34ea91902bb2f59c9920caa6cd"),
        (b"1,2,3", "3efbe78a8d82f29979031a4aa0b16a9d"),
        (b"1,2,4", "63960835bcdc130f0b66d7ff4f6a5a8e"),
    ];

    for (input, expected) in cases {
        let mut output = Vec::new();
        run(Cursor::new(input), &mut output).expect("hash command should succeed");
        assert_eq!(String::from_utf8(output).expect("utf-8 digest"), expected);
    }
}

#[test]
fn hash_command_is_deterministic() {
    let input = b"230,1,2,221,97,252,168,169,57,99,0,254,181,255,235,167\n";

    let mut first = Vec::new();
    run(Cursor::new(input), &mut first).expect("first run should succeed");
    let mut second = Vec::new();
    run(Cursor::new(input), &mut second).expect("second run should succeed");

    assert_eq!(first, second);
}

#[test]
fn command_digest_matches_engine_digest() {
    let mut output = Vec::new();
    let digest = run(Cursor::new(b"knot\n"), &mut output).expect("hash command should succeed");

    assert_eq!(digest, knot_hash(b"knot"));
    assert_eq!(output, digest.to_hex().into_bytes());
}

#[test]
fn high_bytes_hash_as_unsigned_lengths() {
    let digest = knot_hash(&[0xff, 0x80, 0x00]);
    let hex = digest.to_hex();
    assert_eq!(hex.len(), 32);
    assert_ne!(digest, knot_hash(b""));
}
