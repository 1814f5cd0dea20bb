//! Property tests for content fingerprints.

use proptest::prelude::*;

use precompress::domain::services::{fingerprint, sequence_fingerprint};
use precompress::{AssetBlock, AssetKind, Fingerprint};

fn kind() -> impl Strategy<Value = AssetKind> {
    prop_oneof![Just(AssetKind::Script), Just(AssetKind::Style)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Fingerprints are deterministic and always parse back.
    #[test]
    fn property_fingerprint_is_deterministic(
        kind in kind(),
        content in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let a = fingerprint(kind, &content);
        let b = fingerprint(kind, &content);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.as_str().len(), Fingerprint::LEN);
        prop_assert_eq!(Fingerprint::parse(a.as_str()).unwrap(), a);
    }

    /// PROPERTY: Changing one byte of the content changes the fingerprint.
    #[test]
    fn property_single_byte_change_changes_fingerprint(
        kind in kind(),
        content in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut changed = content.clone();
        let i = index.index(changed.len());
        changed[i] ^= flip;

        prop_assert_ne!(fingerprint(kind, &content), fingerprint(kind, &changed));
    }

    /// PROPERTY: The manifest key depends on how content is split into blocks.
    #[test]
    fn property_sequence_key_depends_on_block_boundaries(
        kind in kind(),
        left in "[a-z;{}]{1,40}",
        right in "[a-z;{}]{1,40}",
    ) {
        let joined = vec![AssetBlock::new(kind, format!("{}{}", left, right))];
        let split = vec![AssetBlock::new(kind, left), AssetBlock::new(kind, right)];

        prop_assert_ne!(sequence_fingerprint(&joined), sequence_fingerprint(&split));
    }
}
