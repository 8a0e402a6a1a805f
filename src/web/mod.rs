mod handlers;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::models::Panel;
use state::AppState;

/// Serve the dashboard over the finished panel. The panel is moved into
/// shared state once; request handlers only ever read it.
pub async fn start_server(panel: Panel, port: u16) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(panel));

    println!("Starting grid interconnection dashboard on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            // Static files
            .route("/", web::get().to(handlers::index_html))
            .route("/app.js", web::get().to(handlers::app_js))
            .route("/style.css", web::get().to(handlers::style_css))
            // API routes
            .route("/api/countries", web::get().to(handlers::countries))
            .route("/api/countries/{name}", web::get().to(handlers::country_detail))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
