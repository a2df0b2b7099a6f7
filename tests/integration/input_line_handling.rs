use std::io::Cursor;

use knotq::cmd::hash::run;
use knotq::engine::knot::knot_hash;

fn hash_text(input: &str) -> String {
    let mut output = Vec::new();
    run(Cursor::new(input.as_bytes()), &mut output).expect("hash command should succeed");
    String::from_utf8(output).expect("utf-8 digest")
}

#[test]
fn trailing_newline_is_not_hashed() {
    assert_eq!(hash_text("AoC 2017\n"), hash_text("AoC 2017"));
    assert_eq!(hash_text("AoC 2017\r\n"), hash_text("AoC 2017"));
}

#[test]
fn surrounding_spaces_are_hashed() {
    assert_eq!(hash_text(" a"), "ab70244e5e1f07483e4bb8c8bc7bd4a9");
    assert_eq!(hash_text("a "), "6ffec46115671e05742b521256219ca9");
    assert_ne!(hash_text("a "), hash_text("a"));
}

#[test]
fn only_first_line_is_hashed() {
    assert_eq!(hash_text("1,2,3\n1,2,4\n"), knot_hash(b"1,2,3").to_hex());
}
