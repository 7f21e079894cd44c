pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{ui, uploads, workforce};

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(ui::workforce_page))
        .route("/hr", get(ui::hr_page))
        // Workforce dashboard
        .route(
            "/api/v1/workforce/filters",
            get(workforce::handlers::handle_filters),
        )
        .route(
            "/api/v1/workforce/dashboard",
            post(workforce::handlers::handle_dashboard),
        )
        .route(
            "/api/v1/workforce/export",
            post(workforce::handlers::handle_export),
        )
        // HR analytics upload
        .route(
            "/api/v1/hr/upload",
            post(uploads::handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::workforce::source::WorkforceSource;

    const GEO_CSV: &str = "Division,NIC Name,Main Workers Total\n\
                           North,Poultry farm,10\n\
                           South,Retail trade,5\n\
                           North,Coal mining,7\n";

    fn app(data: &Path) -> Router {
        build_router(AppState {
            config: Config::default(),
            workforce: Arc::new(WorkforceSource::new(data)),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart(filename: &str, content: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let mut body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::post("/api/v1/hr/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn fixture() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ihr_geo_data.csv");
        std::fs::write(&path, GEO_CSV).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_everything() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(post_json("/api/v1/workforce/dashboard", json!({})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let view = body_json(res).await;
        assert_eq!(view["metrics"]["total_workers"], 22);
        assert_eq!(view["metrics"]["largest_sector"], "Poultry");
        assert_eq!(view["metrics"]["top_geography"], "North");
        assert_eq!(view["aggregate"].as_array().unwrap().len(), 3);
        assert_eq!(view["columns"]["workers"], "Main_Workers_Total");
    }

    #[tokio::test]
    async fn test_dashboard_with_nothing_selected() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(post_json(
                "/api/v1/workforce/dashboard",
                json!({ "geographies": [] }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let view = body_json(res).await;
        assert_eq!(view["metrics"]["total_workers"], 0);
        assert!(view["metrics"]["largest_sector"].is_null());
        assert!(view["aggregate"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filters_lists_options() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(
                Request::get("/api/v1/workforce/filters")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let options = body_json(res).await;
        assert_eq!(options["geographies"], json!(["North", "South"]));
        assert_eq!(options["industries"], json!(["Mining", "Poultry", "Retail"]));
    }

    #[tokio::test]
    async fn test_missing_data_file_is_503() {
        let dir = tempfile::tempdir().unwrap();
        let res = app(&dir.path().join("nope.csv"))
            .oneshot(post_json("/api/v1/workforce/dashboard", json!({})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(res).await["error"]["code"], "DATA_SOURCE_ERROR");
    }

    #[tokio::test]
    async fn test_missing_worker_column_is_422() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geo.csv");
        std::fs::write(&path, "Division,NIC Name,Total\nNorth,Poultry farm,10\n").unwrap();
        let res = app(&path)
            .oneshot(post_json("/api/v1/workforce/dashboard", json!({})))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(res).await;
        assert!(body.get("bar_chart").is_none());
        assert_eq!(
            body["error"]["message"],
            crate::workforce::detect::MISSING_WORKER_COLUMN
        );
    }

    #[tokio::test]
    async fn test_export_is_a_csv_attachment() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(post_json(
                "/api/v1/workforce/export",
                json!({ "geographies": ["South"] }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"filtered_data.csv\""
        );
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            "Division,NIC_Name,Main_Workers_Total,Business_Category\nSouth,Retail trade,5,Retail\n"
        );
    }

    #[tokio::test]
    async fn test_upload_reports_counts() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(multipart("staff.csv", b"Name ,Dept\nAsha,Ops\n"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["status"]["kind"], "success");
        assert_eq!(body["status"]["message"], "Loaded: 1 rows, 2 columns");
        assert_eq!(body["status"]["strategy"], "utf8_comma");
        assert_eq!(body["table"]["columns"], json!(["Name", "Dept"]));
        assert_eq!(body["filename"], "staff.csv");
    }

    #[tokio::test]
    async fn test_upload_unreadable_file_keeps_session() {
        let (_dir, path) = fixture();
        let res = app(&path).oneshot(multipart("empty.xlsx", b"")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["status"]["kind"], "error");
        assert_eq!(body["table"]["rows"], json!([]));
    }

    #[tokio::test]
    async fn test_upload_rejects_other_extensions() {
        let (_dir, path) = fixture();
        let res = app(&path)
            .oneshot(multipart("notes.txt", b"a,b\n"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pages_are_html() {
        let (_dir, path) = fixture();
        for uri in ["/", "/hr"] {
            let res = app(&path)
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            assert!(res.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html"));
        }
    }
}
