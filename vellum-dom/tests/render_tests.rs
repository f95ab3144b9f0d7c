use vellum_dom::{
    attr, bool_attr, document_type, element, group, raw, render_to_string, text, text_fmt, when,
    when_with,
};

#[test]
fn element_with_attrs_and_text() {
    let node = element("div", vec![attr("id", "a"), attr("class", "b"), text("x")]);
    assert_eq!(render_to_string(&node), r#"<div id="a" class="b">x</div>"#);
}

#[test]
fn empty_element() {
    let node = element("div", vec![]);
    assert_eq!(render_to_string(&node), "<div></div>");
}

#[test]
fn custom_tag_names_pass_through() {
    let node = element("x-widget", vec![text("hi")]);
    assert_eq!(render_to_string(&node), "<x-widget>hi</x-widget>");
}

#[test]
fn attributes_precede_content_regardless_of_input_order() {
    let node = element("div", vec![text("x"), attr("id", "a")]);
    assert_eq!(render_to_string(&node), r#"<div id="a">x</div>"#);
}

#[test]
fn attribute_order_is_input_order() {
    let ab = element("p", vec![attr("a", "1"), attr("b", "2"), text("x")]);
    let ba = element("p", vec![attr("b", "2"), attr("a", "1"), text("x")]);
    assert_eq!(render_to_string(&ab), r#"<p a="1" b="2">x</p>"#);
    assert_eq!(render_to_string(&ba), r#"<p b="2" a="1">x</p>"#);
}

#[test]
fn boolean_attribute_has_no_value() {
    let node = element("input", vec![attr("type", "text"), bool_attr("required")]);
    assert_eq!(render_to_string(&node), r#"<input type="text" required>"#);
}

#[test]
fn attribute_values_are_escaped() {
    let node = element("a", vec![attr("title", r#"say "hi" & <go>"#)]);
    assert_eq!(
        render_to_string(&node),
        r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;"></a>"#
    );
}

#[test]
fn text_is_escaped() {
    let node = element("p", vec![text("1 < 2 & 'three'")]);
    assert_eq!(
        render_to_string(&node),
        "<p>1 &lt; 2 &amp; &#39;three&#39;</p>"
    );
}

#[test]
fn raw_is_verbatim() {
    let node = element("div", vec![raw("<b>bold & proud</b>")]);
    assert_eq!(render_to_string(&node), "<div><b>bold & proud</b></div>");
}

#[test]
fn group_splices_like_inline_children() {
    let grouped = element("div", vec![group(vec![attr("id", "a"), text("x")])]);
    let inline = element("div", vec![attr("id", "a"), text("x")]);
    assert_eq!(render_to_string(&grouped), render_to_string(&inline));
    assert_eq!(render_to_string(&grouped), r#"<div id="a">x</div>"#);
}

#[test]
fn nested_groups_flatten_transitively() {
    let node = element(
        "div",
        vec![group(vec![
            attr("a", "1"),
            group(vec![attr("b", "2"), group(vec![attr("c", "3")])]),
        ])],
    );
    assert_eq!(
        render_to_string(&node),
        r#"<div a="1" b="2" c="3"></div>"#
    );
}

#[test]
fn grouped_attrs_reusable_across_elements() {
    let shared = group(vec![attr("class", "btn"), attr("role", "button")]);
    let one = element("a", vec![shared.clone(), text("one")]);
    let two = element("span", vec![shared, text("two")]);
    assert_eq!(
        render_to_string(&one),
        r#"<a class="btn" role="button">one</a>"#
    );
    assert_eq!(
        render_to_string(&two),
        r#"<span class="btn" role="button">two</span>"#
    );
}

#[test]
fn top_level_group_renders_members_in_order() {
    let node = group(vec![
        element("li", vec![text("a")]),
        element("li", vec![text("b")]),
    ]);
    assert_eq!(render_to_string(&node), "<li>a</li><li>b</li>");
}

#[test]
fn void_element_drops_content_and_closing_tag() {
    let node = element("img", vec![attr("src", "a.png"), text("ignored")]);
    assert_eq!(render_to_string(&node), r#"<img src="a.png">"#);
}

#[test]
fn void_element_without_attrs() {
    assert_eq!(render_to_string(&element("br", vec![])), "<br>");
}

#[test]
fn doctype_prefixes_root_with_no_separator() {
    let node = document_type(element("html", vec![element("body", vec![text("hi")])]));
    assert_eq!(
        render_to_string(&node),
        "<!DOCTYPE html><html><body>hi</body></html>"
    );
}

#[test]
fn when_true_renders_node() {
    let node = element("div", vec![when(true, text("shown"))]);
    assert_eq!(render_to_string(&node), "<div>shown</div>");
}

#[test]
fn when_false_contributes_to_neither_pass() {
    let node = element(
        "div",
        vec![when(false, attr("id", "a")), when(false, text("hidden"))],
    );
    assert_eq!(render_to_string(&node), "<div></div>");
}

#[test]
fn when_false_at_top_level_renders_empty() {
    assert_eq!(render_to_string(&when(false, text("x"))), "");
}

#[test]
fn when_with_builds_only_on_true() {
    let node = element(
        "ul",
        vec![
            when_with(true, || element("li", vec![text("yes")])),
            when_with(false, || element("li", vec![text("no")])),
        ],
    );
    assert_eq!(render_to_string(&node), "<ul><li>yes</li></ul>");
}

#[test]
fn text_fmt_formats_then_escapes() {
    let node = element("p", vec![text_fmt!("{} < {}", 1, 2)]);
    assert_eq!(render_to_string(&node), "<p>1 &lt; 2</p>");
}

#[test]
fn bare_attribute_renders_opening_tag_form() {
    assert_eq!(render_to_string(&attr("id", "a")), r#" id="a""#);
    assert_eq!(render_to_string(&bool_attr("required")), " required");
}

#[test]
fn deeply_nested_elements() {
    let node = element(
        "ul",
        vec![
            attr("class", "menu"),
            element("li", vec![element("a", vec![attr("href", "/"), text("home")])]),
            element("li", vec![element("a", vec![attr("href", "/about"), text("about")])]),
        ],
    );
    assert_eq!(
        render_to_string(&node),
        r#"<ul class="menu"><li><a href="/">home</a></li><li><a href="/about">about</a></li></ul>"#
    );
}

#[test]
fn render_writes_into_caller_sink() {
    let mut out = String::from("prefix:");
    vellum_dom::render(&element("i", vec![text("x")]), &mut out).unwrap();
    assert_eq!(out, "prefix:<i>x</i>");
}
