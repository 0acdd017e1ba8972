use crate::error::{GeneratorError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing token every registered iterator type name carries
pub const ITERATOR_SUFFIX: &str = "Iterator";

/// Regex for identifiers that are valid in every target language we render
static IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex pattern")
});

/// Returns true if `name` can be used verbatim as a type or package identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.is_match(name)
}

/// Converts a camel or Pascal case identifier to snake case.
///
/// An underscore goes before an uppercase letter that follows a lowercase
/// letter or digit, or that starts a new word after an acronym:
/// `beginIter` becomes `begin_iter`, `IRIBegin` becomes `iri_begin`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let word_start = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if word_start && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Derives the owning container type name from an iterator type name.
///
/// The trailing `Iterator` token is removed exactly once from the end:
/// `ActivityStreamsToPropertyIterator` becomes `ActivityStreamsToProperty`.
/// Occurrences of the token elsewhere in the name are left alone.
///
/// A name without the suffix, or one that is nothing but the suffix, is a
/// registry defect and is reported as such.
pub fn derive_container_name(iterator_name: &str) -> Result<&str> {
    match iterator_name.strip_suffix(ITERATOR_SUFFIX) {
        Some(container) if !container.is_empty() => Ok(container),
        Some(_) => Err(GeneratorError::registry(format!(
            "iterator type name '{}' has no container part",
            iterator_name
        ))),
        None => Err(GeneratorError::registry(format!(
            "iterator type name '{}' does not end with '{}'",
            iterator_name, ITERATOR_SUFFIX
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derive_container_name() {
        assert_eq!(
            derive_container_name("ActivityStreamsActorPropertyIterator").unwrap(),
            "ActivityStreamsActorProperty"
        );
        assert_eq!(
            derive_container_name("W3IDSecurityV1PublicKeyPropertyIterator").unwrap(),
            "W3IDSecurityV1PublicKeyProperty"
        );
        assert_eq!(derive_container_name("FooPropertyIterator").unwrap(), "FooProperty");
    }

    #[test]
    fn test_derive_strips_only_trailing_token() {
        assert_eq!(
            derive_container_name("IteratorCountPropertyIterator").unwrap(),
            "IteratorCountProperty"
        );
        assert_eq!(
            derive_container_name("FooIteratorIterator").unwrap(),
            "FooIterator"
        );
    }

    #[test]
    fn test_derive_rejects_missing_suffix() {
        let err = derive_container_name("ActivityStreamsActorProperty").unwrap_err();
        assert_eq!(err.category(), "registry");
        assert!(err.to_string().contains("does not end with 'Iterator'"));

        assert!(derive_container_name("Iterator").is_err());
        assert!(derive_container_name("").is_err());
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("ActivityStreamsActorPropertyIterator"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("W3IDSecurityV1"));
        assert!(!is_valid_identifier("1Leading"));
        assert!(!is_valid_identifier("has space"));
        assert!(!is_valid_identifier("vocab.Type"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("begin"), "begin");
        assert_eq!(to_snake_case("Begin"), "begin");
        assert_eq!(to_snake_case("beginIter"), "begin_iter");
        assert_eq!(to_snake_case("BeginIterator"), "begin_iterator");
        assert_eq!(to_snake_case("IRIBegin"), "iri_begin");
        assert_eq!(to_snake_case("beginV2Iter"), "begin_v2_iter");
        assert_eq!(to_snake_case("begin_iter"), "begin_iter");
        assert_eq!(to_snake_case("Begin_Iter"), "begin_iter");
    }

    proptest! {
        #[test]
        fn prop_derivation_is_left_inverse(container in "[A-Z][A-Za-z0-9]{0,40}") {
            let iterator_name = format!("{}{}", container, ITERATOR_SUFFIX);
            let derived = derive_container_name(&iterator_name).unwrap();
            prop_assert_eq!(format!("{}{}", derived, ITERATOR_SUFFIX), iterator_name.as_str());
            prop_assert_eq!(derived, container.as_str());
        }
    }
}
