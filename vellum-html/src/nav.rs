use vellum_dom::{Node, text, when};

use crate::{attrs, tags};

/// Navigation `<a>` that marks itself active on its own page.
///
/// When `href` equals `current_path`, a `class="active"` attribute is
/// attached; otherwise the link renders without a class.
pub fn nav_link(current_path: &str, href: impl Into<String>, label: impl Into<String>) -> Node {
    let href = href.into();
    let active = current_path == href;
    tags::a(vec![
        when(active, attrs::class("active")),
        attrs::href(href),
        text(label),
    ])
}
