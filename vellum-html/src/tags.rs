//! Element wrappers, one per tag, generated from a name table.
//!
//! Wrapper names follow the tag names; none of the common tags collide
//! with Rust keywords, so no renaming is needed here.

use vellum_dom::{Node, element};

macro_rules! tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            pub fn $name(children: Vec<Node>) -> Node {
                element($tag, children)
            }
        )*
    };
}

// Document structure
tags! {
    html => "html",
    head => "head",
    body => "body",
    title => "title",
    meta => "meta",
    link => "link",
    script => "script",
    style => "style",
    base => "base",
    noscript => "noscript",
}

// Sectioning and grouping
tags! {
    div => "div",
    span => "span",
    p => "p",
    main => "main",
    header => "header",
    footer => "footer",
    nav => "nav",
    section => "section",
    article => "article",
    aside => "aside",
    address => "address",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    blockquote => "blockquote",
    pre => "pre",
    figure => "figure",
    figcaption => "figcaption",
    hr => "hr",
    br => "br",
}

// Lists
tags! {
    ul => "ul",
    ol => "ol",
    li => "li",
    dl => "dl",
    dt => "dt",
    dd => "dd",
}

// Inline text
tags! {
    a => "a",
    em => "em",
    strong => "strong",
    small => "small",
    s => "s",
    cite => "cite",
    q => "q",
    code => "code",
    kbd => "kbd",
    samp => "samp",
    var => "var",
    sub => "sub",
    sup => "sup",
    i => "i",
    b => "b",
    u => "u",
    mark => "mark",
    abbr => "abbr",
    time => "time",
    wbr => "wbr",
    del => "del",
    ins => "ins",
}

// Embedded content
tags! {
    img => "img",
    iframe => "iframe",
    embed => "embed",
    object => "object",
    video => "video",
    audio => "audio",
    source => "source",
    track => "track",
    canvas => "canvas",
    picture => "picture",
    map => "map",
    area => "area",
}

// Tables
tags! {
    table => "table",
    caption => "caption",
    colgroup => "colgroup",
    col => "col",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    tr => "tr",
    th => "th",
    td => "td",
}

// Forms
tags! {
    form => "form",
    fieldset => "fieldset",
    legend => "legend",
    label => "label",
    input => "input",
    button => "button",
    select => "select",
    optgroup => "optgroup",
    option => "option",
    textarea => "textarea",
    datalist => "datalist",
    output => "output",
    progress => "progress",
    meter => "meter",
}

// Interactive
tags! {
    details => "details",
    summary => "summary",
    dialog => "dialog",
    template => "template",
}
