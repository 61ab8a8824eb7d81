//! End-to-end element construction through the declarative builder.

use vizdom::{bumpalo::Bump, Attribute, Child, Document, TAG_NAMES};

#[test]
fn builds_a_nested_fragment_in_one_expression() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let selected = 1;
    let items: Vec<Child<'_>> = (0..3)
        .map(|i| {
            doc.li(
                [("class", (i == selected).then_some("selected")).into()],
                [format!("item {i}").into()],
            )
            .map(Child::from)
            .unwrap()
        })
        .collect();
    let menu = doc
        .ul([("class", vec!["menu"]).into()], [items.into()])
        .unwrap();

    assert_eq!(
        menu.outer_html().unwrap(),
        concat!(
            r#"<ul class="menu">"#,
            r#"<li>item 0</li>"#,
            r#"<li class="selected">item 1</li>"#,
            r#"<li>item 2</li>"#,
            "</ul>"
        )
    );
}

#[test]
fn attributes_apply_in_order_and_skips_leave_no_trace() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let el = doc
        .input(
            [
                ("type", "text").into(),
                ("placeholder", Some("name")).into(),
                ("autofocus", true).into(),
                ("readonly", false).into(),
                ("maxlength", None::<i64>).into(),
            ],
            [],
        )
        .unwrap();

    assert_eq!(
        el.attribute_names(),
        vec!["type", "placeholder", "autofocus"]
    );
    assert_eq!(el.outer_html().unwrap(), r#"<input type="text" placeholder="name" autofocus>"#);
}

#[test]
fn later_entries_overwrite_earlier_ones() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let el = doc
        .div([("title", "first").into(), ("title", "second").into()], [])
        .unwrap();
    assert_eq!(el.get_attribute("title").as_deref(), Some("second"));
    assert_eq!(el.attribute_names(), vec!["title"]);
}

#[test]
fn attribute_helpers_compose_with_tuples() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let el = doc
        .select(
            [
                Attribute::new("name", "choice"),
                Attribute::boolean("multiple"),
            ],
            [
                doc.option([("value", 1).into()], ["one".into()])
                    .unwrap()
                    .into(),
                doc.option([("value", 2).into()], ["two".into()])
                    .unwrap()
                    .into(),
            ],
        )
        .unwrap();

    assert_eq!(
        el.outer_html().unwrap(),
        concat!(
            r#"<select name="choice" multiple>"#,
            r#"<option value="1">one</option>"#,
            r#"<option value="2">two</option>"#,
            "</select>"
        )
    );
}

#[test]
fn invalid_children_fail_and_leave_the_tree_untouched() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let root = doc.div([], []).unwrap();
    let child = doc.span([], []).unwrap();
    root.append_child(child);

    // A failing build must not steal `child` into a reachable tree.
    let err = doc
        .p([], [child.into(), Child::from(3.5)])
        .unwrap_err();
    assert_eq!(err.value, "3.5");
    assert_eq!(root.child_count(), 0);
    assert!(child.parent().is_some());
    assert_eq!(child.parent().unwrap().parent(), None);
}

#[test]
fn nbsp_spaces_out_inline_content() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let el = doc
        .span([], ["a".into(), doc.nbsp().into(), "b".into()])
        .unwrap();
    assert_eq!(el.text_content(), "a\u{a0}b");
    assert_eq!(el.outer_html().unwrap(), "<span>a\u{a0}b</span>");
}

#[test]
fn matches_answers_for_built_elements() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    let el = doc
        .button(
            [("class", vec!["btn", "primary"]).into(), ("id", "go").into()],
            ["Go".into()],
        )
        .unwrap();

    assert!(el.matches("button.btn#go").unwrap());
    assert!(el.matches(".primary, .secondary").unwrap());
    assert!(!el.matches("a.btn").unwrap());
    assert!(el.matches("button > .btn").is_err());
}

#[test]
fn every_supported_tag_builds_through_create_element() {
    let bump = Bump::new();
    let doc = Document::new(&bump);
    for tag in TAG_NAMES {
        let el = doc.create_element(tag, [], []).unwrap();
        assert_eq!(el.tag_name(), *tag);
    }
}
