use knotq::engine::knot::knot_hash;
use knotq::engine::ring::{RING_SIZE, Ring};
use proptest::prelude::*;

fn scrambled_ring(cursor: usize, lengths: &[usize]) -> Ring {
    let mut ring = Ring::standard();
    for &length in lengths {
        ring.reverse_segment(length);
        ring.advance(length + 1);
    }
    ring.advance(cursor);
    ring
}

// Property 1: reversing the same segment twice restores the ring
proptest! {
    #[test]
    fn prop_reversal_is_self_inverse(
        cursor in 0usize..RING_SIZE,
        scramble in prop::collection::vec(0usize..=RING_SIZE, 0..16),
        length in 0usize..=RING_SIZE
    ) {
        let mut ring = scrambled_ring(cursor, &scramble);
        let before = ring.clone();

        ring.reverse_segment(length);
        ring.reverse_segment(length);

        prop_assert_eq!(ring, before);
    }
}

// Property 2: a wrapped reversal equals the same reversal on a rotated copy
proptest! {
    #[test]
    fn prop_wrapped_reversal_matches_rotation(
        cursor in 0usize..RING_SIZE,
        length in 0usize..=RING_SIZE
    ) {
        let mut ring = Ring::standard();
        ring.advance(cursor);
        ring.reverse_segment(length);

        let mut rotated: Vec<u32> = (0..RING_SIZE as u32).collect();
        rotated.rotate_left(cursor);
        rotated[..length].reverse();
        rotated.rotate_right(cursor);

        prop_assert_eq!(ring.snapshot(), rotated.as_slice());
        prop_assert_eq!(ring.cursor(), cursor);
    }
}

// Property 3: digests are always 32 lowercase hex characters and reproducible
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_digest_format_and_determinism(
        bytes in prop::collection::vec(any::<u8>(), 0..48)
    ) {
        let first = knot_hash(&bytes).to_hex();
        let second = knot_hash(&bytes).to_hex();

        prop_assert_eq!(first.len(), 32);
        prop_assert!(first.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert_eq!(first, second);
    }
}
