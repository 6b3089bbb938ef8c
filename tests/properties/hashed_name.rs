//! Property tests for hash-embedded names.

use proptest::prelude::*;

use genesis::hashed_name::{has_embedded_hash, join, strip};
use genesis::ContentHash;

fn name_string() -> impl Strategy<Value = String> {
    // Slash-separated segments, dots and hyphens allowed anywhere.
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    (any::<bool>(), proptest::collection::vec(segment, 1..=4)).prop_map(|(rooted, segments)| {
        let joined = segments.join("/");
        if rooted {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

fn hash_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-f]{40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `strip(join(n, h)) == n` for any name and 40-hex hash.
    #[test]
    fn property_strip_reverses_join(name in name_string(), hash in hash_string()) {
        let joined = join(&name, &hash);
        prop_assert!(has_embedded_hash(&joined), "{joined}");
        prop_assert_eq!(strip(&joined), name);
    }

    /// PROPERTY: a real content hash always survives the round-trip.
    #[test]
    fn property_content_hash_round_trips(
        name in name_string(),
        data in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let hash = ContentHash::from_bytes(&data);
        prop_assert_eq!(strip(&join(&name, hash.as_str())), name);
    }

    /// PROPERTY: a suffix that is not 40 lowercase hex characters is left alone.
    #[test]
    fn property_non_hex_suffix_is_not_a_hash(
        name in name_string(),
        suffix in proptest::string::string_regex("[0-9a-zA-Z]{40}").unwrap(),
    ) {
        prop_assume!(!suffix.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        let joined = join(&name, &suffix);
        prop_assert!(!has_embedded_hash(&joined));
        prop_assert_eq!(strip(&joined), joined);
    }

    /// PROPERTY: `strip` is the identity on names without an embedded hash.
    #[test]
    fn property_strip_identity_without_hash(name in name_string()) {
        prop_assume!(!has_embedded_hash(&name));
        prop_assert_eq!(strip(&name), name);
    }

    /// PROPERTY: the helpers never panic on arbitrary input.
    #[test]
    fn property_helpers_never_panic(s in ".{0,96}") {
        let _ = strip(&s);
        let _ = has_embedded_hash(&s);
    }
}
