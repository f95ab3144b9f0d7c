//! Attribute wrappers, generated from a name table the same way as
//! [`crate::tags`]. Names that collide with Rust keywords take a
//! trailing underscore (`type_`, `for_`, `loop_`, `async_`).

use vellum_dom::{Node, attr, bool_attr};

macro_rules! attributes {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            pub fn $name(value: impl Into<String>) -> Node {
                attr($attr, value)
            }
        )*
    };
}

macro_rules! boolean_attributes {
    ($($name:ident => $attr:literal),* $(,)?) => {
        $(
            pub fn $name() -> Node {
                bool_attr($attr)
            }
        )*
    };
}

attributes! {
    id => "id",
    class => "class",
    style => "style",
    title => "title",
    lang => "lang",
    dir => "dir",
    role => "role",
    tabindex => "tabindex",
    href => "href",
    target => "target",
    rel => "rel",
    download => "download",
    src => "src",
    srcset => "srcset",
    sizes => "sizes",
    alt => "alt",
    width => "width",
    height => "height",
    loading => "loading",
    charset => "charset",
    name => "name",
    content => "content",
    http_equiv => "http-equiv",
    property => "property",
    media => "media",
    integrity => "integrity",
    crossorigin => "crossorigin",
    action => "action",
    method => "method",
    enctype => "enctype",
    autocomplete => "autocomplete",
    type_ => "type",
    value => "value",
    placeholder => "placeholder",
    for_ => "for",
    min => "min",
    max => "max",
    step => "step",
    maxlength => "maxlength",
    minlength => "minlength",
    pattern => "pattern",
    accept => "accept",
    rows => "rows",
    cols => "cols",
    colspan => "colspan",
    rowspan => "rowspan",
    datetime => "datetime",
    cite => "cite",
}

boolean_attributes! {
    required => "required",
    disabled => "disabled",
    checked => "checked",
    readonly => "readonly",
    selected => "selected",
    multiple => "multiple",
    autofocus => "autofocus",
    autoplay => "autoplay",
    controls => "controls",
    loop_ => "loop",
    muted => "muted",
    hidden => "hidden",
    open => "open",
    defer => "defer",
    async_ => "async",
    novalidate => "novalidate",
    reversed => "reversed",
}

/// `data-*` attribute: `data("count", "3")` is `data-count="3"`.
pub fn data(suffix: &str, value: impl Into<String>) -> Node {
    attr(format!("data-{suffix}"), value)
}

/// `aria-*` attribute: `aria("label", "Close")` is `aria-label="Close"`.
pub fn aria(suffix: &str, value: impl Into<String>) -> Node {
    attr(format!("aria-{suffix}"), value)
}
