//! Property-based tests for path algebra.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on the `Path` methods built on top of it.

use super::Path;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn suffix_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,5}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec("[a-z0-9_-]{1,8}(\\.[a-z0-9]{1,4})?", 1..6)).prop_map(
        |(rooted, parts)| {
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Replacing a suffix with itself changes nothing
    #[test]
    fn with_own_suffix_is_identity(raw in path_strategy()) {
        let path = Path::new(raw);
        prop_assert_eq!(path.with_suffix(path.suffix()), path.clone());
    }

    // Setting a suffix twice is the same as setting it once
    #[test]
    fn with_suffix_idempotent(raw in path_strategy(), suffix in suffix_strategy()) {
        let once = Path::new(raw).with_suffix(&suffix);
        prop_assert_eq!(once.with_suffix(&suffix), once.clone());
        let expected = format!(".{suffix}");
        prop_assert_eq!(once.suffix(), expected.as_str());
    }

    // with_suffix never touches anything before the final component
    #[test]
    fn with_suffix_keeps_parent(raw in path_strategy(), suffix in suffix_strategy()) {
        let path = Path::new(raw);
        prop_assert_eq!(path.with_suffix(&suffix).parent(), path.parent());
    }

    // The name of a joined path is the last joined component
    #[test]
    fn join_then_name(base in path_strategy(), last in component_strategy()) {
        let joined = Path::new(base).join_path([last.as_str()]);
        prop_assert_eq!(joined.name(), last.as_str());
    }

    // The parent of a joined path is the cleaned base
    #[test]
    fn join_then_parent(base in path_strategy(), last in component_strategy()) {
        let base = Path::new(base);
        let joined = base.join_path([last.as_str()]);
        prop_assert_eq!(joined.parent(), base.clean());
    }

    // stem + suffix reassemble the name
    #[test]
    fn stem_and_suffix_make_name(raw in path_strategy()) {
        let path = Path::new(raw);
        prop_assert_eq!(format!("{}{}", path.stem(), path.suffix()), path.name());
    }

    // absolute always produces an absolute path ending in the cleaned name
    #[test]
    fn absolute_is_absolute(raw in path_strategy()) {
        let path = Path::new(raw);
        let absolute = path.absolute().unwrap();
        prop_assert!(absolute.is_absolute());
        prop_assert_eq!(absolute.clone(), absolute.clean());
    }
}
