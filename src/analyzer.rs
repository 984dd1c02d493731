use std::collections::HashSet;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::types::ContentRecord;

/// Analysis report returned to the caller. Densities are percentages of the
/// visible word count, rounded to two decimals; scores are 0-100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    pub seo_score: f64,
    pub keyword_seo_score: f64,
    pub keyword_frequency: usize,
    pub keyword_density: f64,
    pub sub_keyword_density: Vec<KeywordDensity>,
    pub word_count: usize,
    pub total_links: usize,
    pub internal_links: usize,
    pub outbound_links: usize,
    pub duplicate_links: usize,
    pub messages: Messages,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub density: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub warnings: Vec<String>,
    pub minor_warnings: Vec<String>,
    pub good_points: Vec<String>,
}

struct LinkAudit {
    total: usize,
    internal: usize,
    outbound: usize,
    duplicate: usize,
}

/// Score a fully populated content record against the site identity.
/// Pure and deterministic: identical input yields an identical report.
pub fn analyze(content: &ContentRecord, site_domain: &str) -> SeoAnalysis {
    let doc = Html::parse_document(&content.html_text);

    let body_text = visible_text(&doc);
    let body_lower = body_text.to_lowercase();
    let word_count = body_text.split_whitespace().count();

    let keyword = content.keyword.to_lowercase();
    let keyword_frequency = count_phrase(&body_lower, &keyword);
    let keyword_density = density(keyword_frequency, word_count);

    let sub_keyword_density: Vec<KeywordDensity> = content
        .sub_keywords
        .iter()
        .map(|kw| KeywordDensity {
            keyword: kw.clone(),
            density: density(count_phrase(&body_lower, &kw.to_lowercase()), word_count),
        })
        .collect();

    let links = audit_links(&doc, site_domain);
    let headings = heading_text(&doc);

    let mut messages = Messages::default();

    // Content length
    if word_count < 300 {
        messages.warnings.push(format!(
            "Content is {word_count} words long; aim for at least 300 words."
        ));
    } else {
        messages
            .good_points
            .push(format!("Content length is good ({word_count} words)."));
    }

    // Keyword density
    if keyword_frequency == 0 {
        messages.warnings.push(format!(
            "Keyword \"{}\" was not found in the content.",
            content.keyword
        ));
    } else if keyword_density < 1.0 {
        messages.warnings.push(format!(
            "Keyword density is too low: {keyword_density}%."
        ));
    } else if keyword_density > 5.0 {
        messages.warnings.push(format!(
            "Keyword density is too high: {keyword_density}%. This may be seen as keyword stuffing."
        ));
    } else {
        messages
            .good_points
            .push(format!("Keyword density is good: {keyword_density}%."));
    }

    // Title
    if content.title.to_lowercase().contains(&keyword) {
        messages
            .good_points
            .push("Keyword found in the title.".to_string());
    } else {
        messages
            .warnings
            .push("Keyword not found in the title.".to_string());
    }
    let title_len = content.title.chars().count();
    if title_len > 60 {
        messages.minor_warnings.push(format!(
            "Title is {title_len} characters; keep it at 60 or fewer."
        ));
    } else {
        messages
            .good_points
            .push("Title length is good.".to_string());
    }

    // Meta description
    if content.meta_description.is_empty() {
        messages
            .minor_warnings
            .push("No meta description provided.".to_string());
    } else {
        if content.meta_description.to_lowercase().contains(&keyword) {
            messages
                .good_points
                .push("Keyword found in the meta description.".to_string());
        } else {
            messages
                .minor_warnings
                .push("Keyword not found in the meta description.".to_string());
        }
        let desc_len = content.meta_description.chars().count();
        if (50..=160).contains(&desc_len) {
            messages
                .good_points
                .push("Meta description length is good.".to_string());
        } else {
            messages.minor_warnings.push(format!(
                "Meta description should be 50-160 characters (currently {desc_len})."
            ));
        }
    }

    // Headings
    if headings.iter().any(|h| h.contains(&keyword)) {
        messages
            .good_points
            .push("Keyword found in headings.".to_string());
    } else if !headings.is_empty() {
        messages
            .minor_warnings
            .push("Keyword not found in any heading.".to_string());
    }

    // Links
    if links.internal == 0 {
        messages
            .warnings
            .push("No internal links found.".to_string());
    } else {
        messages
            .good_points
            .push(format!("Found {} internal links.", links.internal));
    }
    if links.outbound == 0 {
        messages
            .minor_warnings
            .push("No outbound links found.".to_string());
    } else {
        messages
            .good_points
            .push(format!("Found {} outbound links.", links.outbound));
    }
    if links.duplicate > 0 {
        messages.minor_warnings.push(format!(
            "Found {} duplicate link targets.",
            links.duplicate
        ));
    }

    // Sub-keywords
    let mut sub_keywords_ok = !sub_keyword_density.is_empty();
    for sub in &sub_keyword_density {
        if sub.density == 0.0 {
            sub_keywords_ok = false;
            messages.minor_warnings.push(format!(
                "Sub-keyword \"{}\" was not found in the content.",
                sub.keyword
            ));
        } else if sub.density > 3.0 {
            sub_keywords_ok = false;
            messages.minor_warnings.push(format!(
                "Sub-keyword \"{}\" density is too high: {}%.",
                sub.keyword, sub.density
            ));
        }
    }
    if sub_keywords_ok {
        messages
            .good_points
            .push("Sub-keyword usage is good.".to_string());
    }

    SeoAnalysis {
        seo_score: seo_score(&messages),
        keyword_seo_score: keyword_score(keyword_density),
        keyword_frequency,
        keyword_density,
        sub_keyword_density,
        word_count,
        total_links: links.total,
        internal_links: links.internal,
        outbound_links: links.outbound,
        duplicate_links: links.duplicate,
        messages,
    }
}

/// Visible body text, whitespace-normalized per text node.
fn visible_text(doc: &Html) -> String {
    let body_sel = Selector::parse("body").unwrap();
    doc.select(&body_sel)
        .flat_map(|b| b.text())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn heading_text(doc: &Html) -> Vec<String> {
    let sel = Selector::parse("h1, h2, h3, h4, h5, h6").unwrap();
    doc.select(&sel)
        .map(|h| h.text().collect::<String>().to_lowercase())
        .collect()
}

/// Non-overlapping occurrences of a lowercased phrase in lowercased text.
fn count_phrase(text: &str, phrase: &str) -> usize {
    if phrase.is_empty() {
        return 0;
    }
    text.match_indices(phrase).count()
}

fn density(frequency: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    round2(frequency as f64 * 100.0 / word_count as f64)
}

fn audit_links(doc: &Html, site_domain: &str) -> LinkAudit {
    let sel = Selector::parse("a[href]").unwrap();
    let mut audit = LinkAudit {
        total: 0,
        internal: 0,
        outbound: 0,
        duplicate: 0,
    };
    let mut seen = HashSet::new();

    for href in doc.select(&sel).filter_map(|a| a.value().attr("href")) {
        let href = href.trim();
        if href.is_empty() {
            continue;
        }
        audit.total += 1;
        if !seen.insert(href.to_string()) {
            audit.duplicate += 1;
        }
        if is_internal(href, site_domain) {
            audit.internal += 1;
        } else {
            audit.outbound += 1;
        }
    }
    audit
}

/// Relative links and links into the site's own domain count as internal;
/// any other absolute link is outbound.
fn is_internal(href: &str, site_domain: &str) -> bool {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href
            .splitn(4, '/')
            .nth(2)
            .map(|host| host.ends_with(site_domain))
            .unwrap_or(false);
    }
    !href.starts_with("//")
}

/// Overall score: the share of good points among all emitted messages.
fn seo_score(messages: &Messages) -> f64 {
    let good = messages.good_points.len();
    let total = good + messages.warnings.len() + messages.minor_warnings.len();
    if total == 0 {
        return 0.0;
    }
    round2(good as f64 * 100.0 / total as f64)
}

/// Density-band score: 1-3% is ideal, tapering off on both sides.
fn keyword_score(density: f64) -> f64 {
    if density <= 0.0 {
        0.0
    } else if density < 1.0 {
        round2(density * 80.0)
    } else if density <= 3.0 {
        100.0
    } else {
        round2((100.0 - (density - 3.0) * 20.0).max(0.0))
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
