use cldr_layout::{
    ResourceKind, RichType, accepted_rich_tags, extension_of, kind_for_extension,
    recognized_extensions, resolve_rich_type,
};

#[test]
fn extension_resolution_matrix() {
    assert_eq!(kind_for_extension(".yml"), Some(ResourceKind::Structured));
    assert_eq!(kind_for_extension(".yaml"), Some(ResourceKind::Structured));
    assert_eq!(kind_for_extension(".dump"), Some(ResourceKind::Binary));
    assert_eq!(kind_for_extension(".txt"), None);
    assert_eq!(kind_for_extension("yml"), None);
}

#[test]
fn extension_of_uses_last_component() {
    assert_eq!(extension_of("locales/en/numbers.yml"), Some(".yml"));
    assert_eq!(extension_of("shared/segments/root.dump"), Some(".dump"));
    assert_eq!(extension_of("locales/en.us/numbers"), None);
    assert_eq!(extension_of("shared/.hidden"), None);
    assert_eq!(extension_of("plain"), None);
}

#[test]
fn only_structured_kind_merges_custom() {
    assert!(ResourceKind::Structured.merges_custom());
    assert!(!ResourceKind::Binary.merges_custom());
    assert!(!ResourceKind::Raw.merges_custom());
}

#[test]
fn every_recognized_extension_resolves() {
    for ext in recognized_extensions() {
        assert!(kind_for_extension(ext).is_some(), "{ext} should resolve");
    }
}

#[test]
fn rich_tag_resolution() {
    assert_eq!(resolve_rich_type("!range"), Some(RichType::Range));
    assert_eq!(resolve_rich_type("regexp"), Some(RichType::Regexp));
    assert_eq!(resolve_rich_type("!symbol"), Some(RichType::Symbol));
    assert_eq!(resolve_rich_type("!timestamp"), Some(RichType::Timestamp));
    assert_eq!(resolve_rich_type("!ruby/object:Kernel"), None);
    assert_eq!(resolve_rich_type("!binary"), None);
}

#[test]
fn ruby_tags_resolve_to_rich_types() {
    assert_eq!(resolve_rich_type("!ruby/range"), Some(RichType::Range));
    assert_eq!(resolve_rich_type("!ruby/regexp"), Some(RichType::Regexp));
    assert_eq!(resolve_rich_type("!ruby/symbol"), Some(RichType::Symbol));
    assert_eq!(resolve_rich_type("!ruby/sym"), Some(RichType::Symbol));
    assert_eq!(resolve_rich_type("!ruby/struct"), None);
}

#[test]
fn only_one_leading_bang_is_stripped() {
    assert_eq!(resolve_rich_type("!!range"), None);
    assert_eq!(resolve_rich_type("!!!symbol"), None);
    assert_eq!(resolve_rich_type("!!ruby/range"), None);
}

#[test]
fn accepted_tags_all_resolve() {
    for tag in accepted_rich_tags() {
        assert!(resolve_rich_type(tag).is_some(), "{tag} should resolve");
    }
}
