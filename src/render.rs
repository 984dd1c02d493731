use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to an HTML fragment. CommonMark plus the GFM extensions
/// the content pipeline relies on (tables, strikethrough, task lists).
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
