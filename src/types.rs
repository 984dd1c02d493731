use serde::{Deserialize, Serialize};

use crate::extract::PageMeta;

/// Analyzer locale; fixed for this deployment, not configurable per request.
pub const LANGUAGE_CODE: &str = "en";
pub const COUNTRY_CODE: &str = "us";

/// Title used when neither the request nor the document yields one.
pub const NO_TITLE_FALLBACK: &str = "No Title Found";

/// `POST /` body: Markdown submission. Title and keyword are required here
/// since there is no document to derive them from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownRequest {
    pub markdown: String,
    pub title: String,
    pub keyword: String,
    #[serde(default)]
    pub sub_keywords: Vec<String>,
    #[serde(default)]
    pub meta_description: String,
}

/// `POST /html` body: raw HTML submission. Title/sub-keywords/description
/// fall back to values extracted from the document itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlRequest {
    pub document: String,
    pub title: Option<String>,
    pub keyword: String,
    pub sub_keywords: Option<Vec<String>>,
    pub meta_description: Option<String>,
}

/// Canonical record handed to the analyzer. Built fresh per request,
/// fully populated, discarded after the response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    pub html_text: String,
    pub keyword: String,
    pub sub_keywords: Vec<String>,
    pub meta_description: String,
    pub language_code: String,
    pub country_code: String,
}

impl ContentRecord {
    /// Markdown path: every field comes from the request; `html_text` is the
    /// rendered document.
    pub fn from_markdown(req: MarkdownRequest, html_text: String) -> Self {
        Self {
            title: req.title,
            html_text,
            keyword: req.keyword,
            sub_keywords: req.sub_keywords,
            meta_description: req.meta_description,
            language_code: LANGUAGE_CODE.to_string(),
            country_code: COUNTRY_CODE.to_string(),
        }
    }

    /// HTML path: explicit request field wins, then the value derived from
    /// the document, then a hardcoded fallback. The raw document is kept as
    /// `html_text` unchanged.
    pub fn from_html(req: HtmlRequest, meta: PageMeta) -> Self {
        let title = req
            .title
            .filter(|t| !t.trim().is_empty())
            .or(meta.title)
            .unwrap_or_else(|| NO_TITLE_FALLBACK.to_string());

        let sub_keywords = req.sub_keywords.unwrap_or(meta.keywords);

        let meta_description = req
            .meta_description
            .filter(|d| !d.trim().is_empty())
            .or(meta.description)
            .unwrap_or_default();

        Self {
            title,
            html_text: req.document,
            keyword: req.keyword,
            sub_keywords,
            meta_description,
            language_code: LANGUAGE_CODE.to_string(),
            country_code: COUNTRY_CODE.to_string(),
        }
    }
}
