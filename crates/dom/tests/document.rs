#![allow(clippy::unwrap_used)]

use dom::Document;

/// Body with two panes, only one of which is the content pane.
fn page_document() -> Document {
    let mut document = Document::new();
    let body = document.append_element(document.root(), "body");
    let nav = document.append_element(body, "div");
    document.set_attr(nav, "id", "nav");
    let content = document.append_element(body, "div");
    document.set_attr(content, "id", "content");
    document
}

#[test]
fn element_by_id_finds_nested_elements() {
    let document = page_document();
    let content = document.element_by_id("content").unwrap();
    assert_eq!(document.attr(content, "id"), Some("content"));
    assert!(document.element_by_id("nav").is_some());
    assert!(document.element_by_id("sidebar").is_none());
}

#[test]
fn element_by_id_prefers_the_earliest_match() {
    let mut document = Document::new();
    let body = document.append_element(document.root(), "body");
    let first = document.append_element(body, "div");
    document.set_attr(first, "id", "content");
    let second = document.append_element(body, "div");
    document.set_attr(second, "id", "content");
    assert_eq!(document.element_by_id("content"), Some(first));
}

#[test]
fn set_attr_replaces_existing_values() {
    let mut document = page_document();
    let content = document.element_by_id("content").unwrap();
    document.set_attr(content, "class", "pane");
    document.set_attr(content, "class", "pane wide");
    assert_eq!(document.attr(content, "class"), Some("pane wide"));
    assert_eq!(document.attr(content, "id"), Some("content"));
}

#[test]
fn style_edits_preserve_unrelated_declarations() {
    let mut document = page_document();
    let content = document.element_by_id("content").unwrap();
    document.set_attr(content, "style", "margin: 0; height: auto; overflow: hidden");

    document.set_style_property(content, "height", "940px");

    assert_eq!(
        document.attr(content, "style"),
        Some("margin: 0; height: 940px; overflow: hidden")
    );
    assert_eq!(document.style_property(content, "height"), Some("940px".to_owned()));
    assert_eq!(document.style_property(content, "margin"), Some("0".to_owned()));
}

#[test]
fn style_edit_on_a_bare_element_creates_the_attribute() {
    let mut document = page_document();
    let content = document.element_by_id("content").unwrap();
    assert_eq!(document.attr(content, "style"), None);

    document.set_style_property(content, "height", "1200px");

    assert_eq!(document.attr(content, "style"), Some("height: 1200px"));
}
