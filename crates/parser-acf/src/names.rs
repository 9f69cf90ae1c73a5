/// Formats a field or layout name into a generated type name: the first
/// character of every underscore-separated segment is upper-cased, the
/// segments are concatenated, and `prefix` is prepended. Casing inside a
/// segment is preserved. Deterministic and total; callers gate inputs
/// through [`is_field_name_valid`] first.
pub fn format_name(name: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + name.len());
    out.push_str(prefix);

    for segment in name.split('_') {
        push_capitalized(&mut out, segment);
    }

    out
}

/// A usable GraphQL field name is non-empty and not a number. Fields and
/// layouts failing this are dropped, never renamed.
pub fn is_field_name_valid(name: &str) -> bool {
    !name.is_empty() && !is_numeric(name)
}

// Numeric in the storage layer's sense: an optional sign followed by a
// digit-led integer, float or exponent literal. Word forms like `inf` stay
// usable names.
fn is_numeric(name: &str) -> bool {
    let unsigned = name.strip_prefix(['+', '-']).unwrap_or(name);

    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') && name.parse::<f64>().is_ok()
}

/// Type name carrying the compiled fields of one block kind: the block
/// identifier's `/`, `-` and `_` separated segments upper-cased and
/// concatenated, plus a `Fields` suffix. `acf/hero` becomes `AcfHeroFields`.
pub fn format_block_fields_type_name(block_kind: &str) -> String {
    let mut out = String::with_capacity(block_kind.len() + "Fields".len());

    for segment in block_kind.split(['/', '-', '_']) {
        push_capitalized(&mut out, segment);
    }

    out.push_str("Fields");
    out
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validity() {
        assert!(is_field_name_valid("headline"));
        assert!(is_field_name_valid("cta_2"));
        assert!(is_field_name_valid("1abc"));
        assert!(is_field_name_valid("inf"));
        assert!(is_field_name_valid("nan"));

        assert!(!is_field_name_valid(""));
        assert!(!is_field_name_valid("1"));
        assert!(!is_field_name_valid("42"));
        assert!(!is_field_name_valid("1.5"));
        assert!(!is_field_name_valid("-2"));
        assert!(!is_field_name_valid("+3"));
        assert!(!is_field_name_valid(".5"));
        assert!(!is_field_name_valid("1e3"));
    }

    #[test]
    fn format_name_concatenates_upper_cased_segments() {
        assert_eq!(format_name("hero_cta", "Acf"), "AcfHeroCta");
        assert_eq!(format_name("headline", "AcfHeroFields"), "AcfHeroFieldsHeadline");
        assert_eq!(format_name("already_Mixed_case", ""), "AlreadyMixedCase");
        assert_eq!(format_name("", "Prefix"), "Prefix");
    }

    #[test]
    fn format_name_is_deterministic() {
        let first = format_name("my_field", "SomeBase");
        let second = format_name("my_field", "SomeBase");
        assert_eq!(first, second);
    }

    #[test]
    fn block_fields_type_name() {
        assert_eq!(format_block_fields_type_name("acf/hero"), "AcfHeroFields");
        assert_eq!(format_block_fields_type_name("acf/media-text"), "AcfMediaTextFields");
    }
}
