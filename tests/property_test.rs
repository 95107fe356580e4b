use dom_facade::{Document, Error, PropertyValue};

#[test]
fn innertext_round_trip_reads_outer_markup() {
    let doc = Document::new(r#"<div id="x">old</div>"#);
    let div = doc.get_element_by_id("x").expect("x");

    let div = div.set("innertext", "<span>new</span>").expect("set innertext");
    assert_eq!(
        div.get("innertext").as_str(),
        Some(r#"<div id="x"><span>new</span></div>"#)
    );
    assert_eq!(div.get("outertext").as_str(), Some("<span>new</span>"));
}

#[test]
fn outertext_write_replaces_in_place() {
    let doc = Document::new(r#"<section><em>a</em><b id="target">old</b><em>c</em></section>"#);
    let target = doc.get_element_by_id("target").expect("target");
    let section = target.parent();

    let replacement = target.set("outertext", "<p>hi</p>").expect("set outertext");

    assert_eq!(replacement.html(), "<p>hi</p>");
    assert_eq!(section.child_node(1).map(|e| e.html()).as_deref(), Some("<p>hi</p>"));
    assert_eq!(section.child_nodes().len(), 3);
}

#[test]
fn outertext_write_without_parent_is_an_error() {
    let doc = Document::new("<p>x</p>");

    match doc.root().set("outertext", "<p>hi</p>") {
        Err(Error::DetachedNode(_)) => {}
        other => panic!("expected Err(DetachedNode), got {other:?}"),
    }
    assert_eq!(doc.find("p").len(), 1);
}

#[test]
fn plaintext_and_tag_are_read_only_names() {
    let doc = Document::new("<h1>Title <small>sub</small></h1>");
    let h1 = doc.find_at("h1", 0).expect("h1");

    assert_eq!(h1.get("plaintext"), PropertyValue::Text("Title sub".to_string()));
    assert_eq!(h1.get("tag"), PropertyValue::Text("h1".to_string()));

    let h1 = h1.set("plaintext", "ignored").expect("write goes to attribute");
    assert_eq!(h1.text(), "Title sub");
    assert_eq!(h1.get_attribute("plaintext").as_deref(), Some("ignored"));
}

#[test]
fn arbitrary_attributes_are_properties() {
    let doc = Document::new(r#"<img src="a.png">"#);
    let img = doc.find_at("img", 0).expect("img");

    assert_eq!(img.get("src").as_str(), Some("a.png"));
    assert!(img.has("src"));
    assert!(!img.has("alt"));

    let img = img.set("alt", "A picture").expect("set alt");
    assert_eq!(img.get("alt").into_string().as_deref(), Some("A picture"));

    let img = img.set("src", "").expect("clear src");
    assert!(!img.has("src"));
    assert_eq!(img.get("src"), PropertyValue::Attribute(None));
}

#[test]
fn attr_property_reports_absence() {
    let doc = Document::new(r#"<p>bare</p><p lang="en">with</p>"#);
    let bare = doc.find_at("p", 0).expect("bare");
    let with = doc.find_at("p", 1).expect("with");

    assert_eq!(bare.get("attr"), PropertyValue::Attributes(None));
    let attrs = with.get("attr").into_attributes().expect("attributes");
    assert_eq!(attrs.get("lang"), Some("en"));
}

#[test]
fn computed_names_are_always_present() {
    let doc = Document::new("<p>x</p>");
    let text = doc
        .find_at("p", 0)
        .and_then(|p| p.first_child())
        .expect("text node");

    for name in ["outertext", "innertext", "plaintext", "tag"] {
        assert!(text.has(name), "{name} should be present");
    }
    assert_eq!(text.get("tag").as_str(), Some("#text"));
}
