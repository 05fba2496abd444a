use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::Key, Expiry, MemoryStore, SessionManagerLayer};

use crate::state::AppState;
use crate::{auth, feed};

pub fn build_app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(
            state.config.session.ttl_hours,
        )))
        .with_signed(Key::from(state.config.session.secret.as_bytes()));

    Router::new()
        .merge(feed::router())
        .merge(auth::router())
        .with_state(state)
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "3000".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::util::ServiceExt;

    async fn body_text(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn signup_form_renders() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/signup")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"action="/signup""#));
        assert!(body.contains(r#"name="user_id""#));
        assert!(body.contains(r#"name="password""#));
        assert!(body.contains(r#"name="name""#));
    }

    #[tokio::test]
    async fn signin_form_renders() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/signin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains(r#"action="/signin""#));
    }

    #[tokio::test]
    async fn signup_with_missing_fields_is_rejected_before_any_query() {
        // The fake state's pool cannot reach a database; getting the
        // validation message back proves the handler returned first.
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signup")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("user_id=&password=&name="))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("All fields required"));
    }

    #[tokio::test]
    async fn signup_with_absent_fields_is_rejected_before_any_query() {
        let app = build_app(AppState::fake());
        let res = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/signup")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("user_id=alice"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_text(res).await;
        assert!(body.contains("All fields required"));
    }

    #[tokio::test]
    async fn logout_redirects_to_signin_and_is_idempotent() {
        let app = build_app(AppState::fake());
        for _ in 0..2 {
            let res = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/logout")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::SEE_OTHER);
            assert_eq!(res.headers()[header::LOCATION], "/signin");
        }
    }
}
