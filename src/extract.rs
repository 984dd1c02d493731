use scraper::{Html, Selector};

/// Fallback metadata pulled out of a raw HTML document. Fields are `None` /
/// empty when the document does not carry them; extraction never fails.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub keywords: Vec<String>,
    pub description: Option<String>,
}

/// Parse a document leniently and pull out title / keywords / description
/// candidates. Malformed HTML degrades to empty fields rather than erroring.
pub fn extract_meta(html: &str) -> PageMeta {
    let doc = Html::parse_document(html);

    // Title: <title> text, else first <h1> text
    let title_sel = Selector::parse("title").unwrap();
    let h1_sel = Selector::parse("h1").unwrap();
    let title = doc
        .select(&title_sel)
        .next()
        .map(|n| n.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            doc.select(&h1_sel)
                .next()
                .map(|n| n.text().collect::<String>().trim().to_string())
                .filter(|s| !s.is_empty())
        });

    // Keywords: comma-separated <meta name=keywords> content
    let kw_sel = Selector::parse("meta[name=keywords]").unwrap();
    let keywords = doc
        .select(&kw_sel)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(|content| {
            content
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default();

    // Meta description
    let desc_sel = Selector::parse("meta[name=description]").unwrap();
    let description = doc
        .select(&desc_sel)
        .next()
        .and_then(|m| m.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    PageMeta {
        title,
        keywords,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_tag_preferred_over_h1() {
        let meta = extract_meta(
            "<html><head><title>From Title</title></head>\
             <body><h1>From H1</h1></body></html>",
        );
        assert_eq!(meta.title.as_deref(), Some("From Title"));
    }

    #[test]
    fn h1_used_when_title_missing() {
        let meta = extract_meta("<html><body><h1>Only Heading</h1></body></html>");
        assert_eq!(meta.title.as_deref(), Some("Only Heading"));
    }

    #[test]
    fn empty_title_tag_falls_through_to_h1() {
        let meta =
            extract_meta("<html><head><title>  </title></head><body><h1>H</h1></body></html>");
        assert_eq!(meta.title.as_deref(), Some("H"));
    }

    #[test]
    fn no_title_candidates_yields_none() {
        let meta = extract_meta("<p>plain paragraph</p>");
        assert_eq!(meta.title, None);
    }

    #[test]
    fn keywords_split_and_trimmed() {
        let meta = extract_meta(
            r#"<head><meta name="keywords" content="rust, web , seo,,"></head>"#,
        );
        assert_eq!(meta.keywords, vec!["rust", "web", "seo"]);
    }

    #[test]
    fn description_extracted() {
        let meta = extract_meta(
            r#"<head><meta name="description" content=" a short description "></head>"#,
        );
        assert_eq!(meta.description.as_deref(), Some("a short description"));
    }

    #[test]
    fn malformed_html_degrades_to_defaults() {
        let meta = extract_meta("<div><<<not really html");
        assert_eq!(meta.title, None);
        assert!(meta.keywords.is_empty());
        assert_eq!(meta.description, None);
    }
}
