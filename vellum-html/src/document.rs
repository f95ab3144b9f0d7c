use vellum_dom::{Node, document_type, text};

use crate::{attrs, tags};

/// Configuration for a full HTML document.
///
/// `head` carries extra head nodes appended after the generated meta and
/// title tags; `body` becomes the children of `<body>`.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    pub description: Option<String>,
    pub lang: Option<String>,
    pub head: Vec<Node>,
    pub body: Vec<Node>,
}

/// Assemble a doctype-wrapped `<html>` tree from `cfg`.
///
/// The head always gets a UTF-8 charset meta, a viewport meta, and the
/// title; description and the `lang` attribute are emitted only when
/// configured.
pub fn document(cfg: Document) -> Node {
    let Document {
        title,
        description,
        lang,
        head,
        body,
    } = cfg;

    let mut head_children = vec![
        tags::meta(vec![attrs::charset("utf-8")]),
        tags::meta(vec![
            attrs::name("viewport"),
            attrs::content("width=device-width, initial-scale=1"),
        ]),
        tags::title(vec![text(title)]),
    ];
    if let Some(description) = description {
        head_children.push(tags::meta(vec![
            attrs::name("description"),
            attrs::content(description),
        ]));
    }
    head_children.extend(head);

    let mut html_children = Vec::with_capacity(3);
    if let Some(lang) = lang {
        html_children.push(attrs::lang(lang));
    }
    html_children.push(tags::head(head_children));
    html_children.push(tags::body(body));

    document_type(tags::html(html_children))
}
