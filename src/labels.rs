use std::collections::BTreeSet;

use crate::extractor::EntityTag;

/// Label emitted for tokens outside any entity
pub const OUTSIDE_LABEL: &str = "O";

/// Separator between a tagging-scheme prefix and the entity type ("B-per")
pub const SCHEME_SEPARATOR: char = '-';

/// Distinct normalized entity types, kept sorted
pub type EntitySet = BTreeSet<String>;

/// Strip a tagging-scheme prefix from a raw label.
///
/// `"B-org"` becomes `"org"`, `"I-geo"` becomes `"geo"`. Labels without a
/// separator, including [`OUTSIDE_LABEL`], are returned unchanged.
pub fn normalize_label(raw: &str) -> &str {
    match raw.rfind(SCHEME_SEPARATOR) {
        Some(idx) => &raw[idx + SCHEME_SEPARATOR.len_utf8()..],
        None => raw,
    }
}

/// Collect the entity types present in one sentence's tags, skipping "O"
pub fn entity_types(tags: &[EntityTag]) -> EntitySet {
    tags.iter()
        .map(|tag| normalize_label(&tag.label))
        .filter(|label| !label.is_empty() && *label != OUTSIDE_LABEL)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(label: &str) -> EntityTag {
        EntityTag::new(label, "w", 0.9)
    }

    #[test]
    fn test_normalize_strips_prefix() {
        assert_eq!(normalize_label("B-org"), "org");
        assert_eq!(normalize_label("I-geo"), "geo");
        assert_eq!(normalize_label("O"), "O");
        assert_eq!(normalize_label("per"), "per");
    }

    #[test]
    fn test_normalize_uses_last_separator() {
        assert_eq!(normalize_label("B-I-tim"), "tim");
        assert_eq!(normalize_label("B-"), "");
    }

    #[test]
    fn test_outside_only_sentence_has_no_entities() {
        let tags = vec![tag("O"), tag("O"), tag("O")];
        assert!(entity_types(&tags).is_empty());
    }

    #[test]
    fn test_entity_types_collapse_duplicates() {
        let tags = vec![tag("B-per"), tag("I-per"), tag("O"), tag("B-geo"), tag("B-")];
        let types: Vec<_> = entity_types(&tags).into_iter().collect();
        assert_eq!(types, vec!["geo", "per"]);
    }
}
