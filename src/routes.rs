use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::info;

use crate::analyzer;
use crate::error::ApiError;
use crate::extract::extract_meta;
use crate::render::markdown_to_html;
use crate::types::{ContentRecord, HtmlRequest, MarkdownRequest};

/// Site identity handed to the analyzer; per-deployment constant.
pub const SITE_DOMAIN: &str = "liveinabroad.com";

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

/* ------------------------ POST / (markdown) ------------------------ */

#[post("/")]
async fn analyze_markdown(
    payload: web::Json<MarkdownRequest>,
) -> actix_web::Result<impl Responder> {
    let req = payload.into_inner();
    require_keyword(&req.keyword)?;

    let html_text = markdown_to_html(&req.markdown);
    let content = ContentRecord::from_markdown(req, html_text);
    let report = analyzer::analyze(&content, SITE_DOMAIN);

    info!(keyword = %content.keyword, score = report.seo_score, "analyzed markdown submission");
    Ok(HttpResponse::Ok().json(report))
}

/* ------------------------ POST /html ------------------------ */

#[post("/html")]
async fn analyze_html(payload: web::Json<HtmlRequest>) -> actix_web::Result<impl Responder> {
    let req = payload.into_inner();
    require_keyword(&req.keyword)?;

    let meta = extract_meta(&req.document);
    let content = ContentRecord::from_html(req, meta);
    let report = analyzer::analyze(&content, SITE_DOMAIN);

    info!(keyword = %content.keyword, title = %content.title, score = report.seo_score, "analyzed html submission");
    Ok(HttpResponse::Ok().json(report))
}

fn require_keyword(keyword: &str) -> Result<(), ApiError> {
    if keyword.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "keyword must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Route table, shared between the binary and integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(analyze_markdown)
        .service(analyze_html);
}

/// Malformed JSON and missing required fields become a typed
/// `InvalidRequest` instead of actix's default 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidRequest(err.to_string()).into())
}
