//! Property-based interning tests.
//!
//! The protocol invariant under test: for any sequence of strings, the
//! encode and decode dictionaries reach identical state from byte order
//! alone, and the decoded sequence matches the input exactly.

use internpack::{Decoder, Encoder, MIN_INTERN_LEN};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;

proptest! {
    /// Any string sequence round-trips through the interned entry points,
    /// and both dictionaries end at the count of distinct eligible strings.
    #[test]
    fn prop_interned_roundtrip(strings in vec("[a-d]{0,8}", 0..64)) {
        let mut enc = Encoder::new(Vec::new());
        for s in &strings {
            enc.encode_interned_str(s).unwrap();
        }

        let distinct_eligible: HashSet<&str> = strings
            .iter()
            .map(String::as_str)
            .filter(|s| s.len() >= MIN_INTERN_LEN)
            .collect();
        prop_assert_eq!(enc.dict_len(), distinct_eligible.len());

        let mut dec = Decoder::new(Cursor::new(enc.into_inner()));
        for s in &strings {
            prop_assert_eq!(&dec.decode_interned_str().unwrap(), s);
        }
        prop_assert_eq!(dec.dict_len(), distinct_eligible.len());
    }

    /// Repeats of one eligible string cost one literal plus fixed-size
    /// references: the wire grows by exactly 3 bytes per repeat.
    #[test]
    fn prop_repeat_cost_is_reference_sized(s in "[a-z]{3,20}", k in 2usize..20) {
        let mut enc = Encoder::new(Vec::new());
        for _ in 0..k {
            enc.encode_interned_str(&s).unwrap();
        }
        let wire = enc.into_inner();
        let literal_len = 1 + s.len(); // fixstr header + body
        prop_assert_eq!(wire.len(), literal_len + (k - 1) * 3);

        let mut dec = Decoder::new(Cursor::new(wire));
        for _ in 0..k {
            prop_assert_eq!(&dec.decode_interned_str().unwrap(), &s);
        }
        prop_assert_eq!(dec.dict_len(), 1);
    }
}
