use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::analysis::PanelSummary;

use super::state::AppState;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

/// Payload backing the dropdown: sorted country names, the target, and the
/// panel-level aggregates for the summary strip.
#[derive(Serialize)]
struct CountriesResponse<'a> {
    countries: Vec<String>,
    target_pct: f64,
    summary: &'a PanelSummary,
}

pub async fn countries(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(CountriesResponse {
        countries: state.panel.country_names(),
        target_pct: state.panel.target_pct,
        summary: &state.summary,
    })
}

pub async fn country_detail(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    match state.panel.get(&name) {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(ErrorBody {
            error: "Not Found".to_string(),
            details: format!("no country named '{name}' in the panel"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Static file handlers
// ---------------------------------------------------------------------------

pub async fn index_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("../../static/app.js"))
}

pub async fn style_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/style.css"))
}
