use super::*;

#[test]
fn new_field_starts_empty_with_its_kind() {
    let field = Field::new(FieldKind::Url);
    assert_eq!(field.value(), "");
    assert!(field.is_empty());
    assert_eq!(field.kind(), FieldKind::Url);
    assert_eq!(field.kind().as_str(), "url");
    assert_eq!(Field::default().kind().as_str(), "text");
}

#[test]
fn on_change_replaces_the_value_unconditionally() {
    let mut field = Field::text();
    field.on_change("first");
    field.on_change(String::from("  second  "));
    assert_eq!(field.value(), "  second  ");

    field.on_change("");
    assert!(field.is_empty());
}

#[test]
fn reset_always_yields_an_empty_value() {
    for prior in ["", "x", "a much longer value with spaces", "ünïcödé"] {
        let mut field = Field::text();
        field.on_change(prior);
        field.reset();
        assert_eq!(field.value(), "");
    }
}

#[test]
fn binding_exposes_value_and_kind_and_writes_edits_back() {
    let mut field = Field::url();
    field.on_change("http://x");

    let mut binding = field.binding();
    assert_eq!(binding.value(), "http://x");
    assert_eq!(binding.kind(), FieldKind::Url);

    binding.on_change("http://x/y");
    assert_eq!(binding.value(), "http://x/y");
    assert_eq!(field.value(), "http://x/y");
}
