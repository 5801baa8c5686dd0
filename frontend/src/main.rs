//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route("/api/enroll", axum::routing::post(backend::server_extra::enroll_endpoint::enroll))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    if path.starts_with("/api/") {
                        dioxus::logger::tracing::info!("{} {} -> {}", method, path, res.status());
                    }
                    res
                },
            )))
    });
}
