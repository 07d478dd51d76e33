use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::from(DnaFormatError::Empty)
            .to_string()
            .contains("format error:")
    );
    assert!(
        AvatarError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AvatarError::asset("x").to_string().contains("asset error:"));
    assert!(
        AvatarError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn format_errors_name_the_offending_segment() {
    let err = DnaFormatError::NotANumber {
        position: 1,
        category: Category::Hair,
        segment: "a".to_string(),
    };
    assert_eq!(err.segment(), Some("a"));
    assert_eq!(err.category(), Some(Category::Hair));
    let msg = err.to_string();
    assert!(msg.contains("segment 1"));
    assert!(msg.contains("hair"));
    assert!(msg.contains("\"a\""));

    let err = DnaFormatError::SegmentCount { found: 5 };
    assert_eq!(err.segment(), None);
    assert!(err.to_string().contains("found 5"));
}

#[test]
fn as_format_only_matches_format_variant() {
    let err = AvatarError::from(DnaFormatError::Empty);
    assert_eq!(err.as_format(), Some(&DnaFormatError::Empty));
    assert!(AvatarError::validation("x").as_format().is_none());
}
