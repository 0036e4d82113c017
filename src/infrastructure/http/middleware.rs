//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// HTTP 状态码错误日志中间件
///
/// 4xx 记 warn，5xx 记 error，附带耗时
/// 注意：错误原因在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{delete, get},
        Router,
    };
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;

    /// 收集日志输出
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/stories", get(|| async { "[]" }))
            .route("/stories/1", delete(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/broken",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    /// 发送请求并返回状态码和期间产生的日志
    async fn send(method: &str, uri: &str) -> (StatusCode, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let status = create_test_router().oneshot(request).await.unwrap().status();

        (status, logs.contents())
    }

    #[tokio::test]
    async fn test_success_is_not_logged() {
        let (status, logs) = send("GET", "/stories").await;
        assert_eq!(status, StatusCode::OK);
        assert!(logs.is_empty(), "unexpected log output: {}", logs);
    }

    #[tokio::test]
    async fn test_client_error_logged_as_warn() {
        let (status, logs) = send("DELETE", "/stories/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("HTTP client error"));
        assert!(logs.contains("method=DELETE"));
        assert!(logs.contains("uri=/stories/1"));
        assert!(logs.contains("status=404"));
        assert!(logs.contains("elapsed_ms="));
    }

    #[tokio::test]
    async fn test_server_error_logged_as_error() {
        let (status, logs) = send("GET", "/broken").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("HTTP server error"));
        assert!(logs.contains("status=500"));
        assert!(!logs.contains("WARN"));
    }
}
