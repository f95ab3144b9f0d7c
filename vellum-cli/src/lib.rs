use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use vellum_dom::{render_to_string, text, text_fmt, when, Node};
use vellum_html::{attrs, document, nav_link, tags, Document};

/// Build the sample document rendered by the `demo` subcommand.
///
/// Exercises the whole public surface: the document assembler, nav
/// links, grouped attributes, conditionals and formatted text.
pub fn demo_page(title: &str, lang: Option<&str>) -> Node {
    let features = ["typed constructors", "two-pass rendering", "transparent groups"];
    let items: Vec<Node> = features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            tags::li(vec![
                when(i == 0, attrs::class("first")),
                text_fmt!("{}. {}", i + 1, feature),
            ])
        })
        .collect();

    document(Document {
        title: title.to_string(),
        description: Some("A page assembled from typed constructor calls".into()),
        lang: lang.map(str::to_string),
        head: vec![],
        body: vec![
            tags::header(vec![tags::nav(vec![
                nav_link("/", "/", "Home"),
                nav_link("/", "/features", "Features"),
            ])]),
            tags::main(vec![
                tags::h1(vec![text(title)]),
                tags::p(vec![text("Markup built from plain function calls — no template language.")]),
                tags::ul(vec![attrs::class("features"), vellum_dom::group(items)]),
            ]),
            tags::footer(vec![tags::small(vec![text("rendered by vellum")])]),
        ],
    })
}

/// Render the sample document to `out`, or to stdout when `out` is None.
pub fn demo_cmd(title: &str, lang: Option<&str>, out: Option<&Path>) -> Result<()> {
    let page = demo_page(title, lang);
    let html = render_to_string(&page);
    match out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Generated: {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
