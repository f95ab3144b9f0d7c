use vellum_dom::{group, raw, render_to_string, text, text_fmt, when, Node};
use vellum_html::{attrs, document, nav_link, tags, Document};

struct Post {
    slug: &'static str,
    title: &'static str,
    words: usize,
    draft: bool,
}

const POSTS: &[Post] = &[
    Post { slug: "hello-world", title: "Hello, world", words: 420, draft: false },
    Post { slug: "trees-not-templates", title: "Trees, not templates", words: 980, draft: false },
    Post { slug: "escaping-by-default", title: "Escaping by default", words: 150, draft: true },
];

fn post_card(post: &Post) -> Node {
    tags::article(vec![
        attrs::class("post"),
        attrs::data("slug", post.slug),
        tags::h2(vec![
            tags::a(vec![
                attrs::href(format!("/posts/{}", post.slug)),
                text(post.title),
            ]),
            when(post.draft, tags::span(vec![attrs::class("badge"), text("draft")])),
        ]),
        tags::p(vec![text_fmt!("{} words", post.words)]),
    ])
}

fn main() {
    let current_path = "/";
    let page = document(Document {
        title: "vellum blog".into(),
        description: Some("Posts about building HTML in plain code".into()),
        lang: Some("en".into()),
        head: vec![tags::link(vec![
            attrs::rel("stylesheet"),
            attrs::href("/blog.css"),
        ])],
        body: vec![
            tags::header(vec![tags::nav(vec![
                nav_link(current_path, "/", "Home"),
                nav_link(current_path, "/archive", "Archive"),
                nav_link(current_path, "/about", "About"),
            ])]),
            tags::main(vec![
                tags::h1(vec![text("Latest posts")]),
                group(POSTS.iter().map(post_card).collect()),
            ]),
            tags::footer(vec![
                // Trusted static markup; everything dynamic goes through text().
                raw("&copy; 2026 the vellum authors"),
            ]),
        ],
    });

    println!("{}", render_to_string(&page));
}
