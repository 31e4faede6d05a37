//! Unit tests for leads crate
//! Router tests post real form bodies through the axum router.

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = LeadConfig::default();

        assert_eq!(config.log_path, PathBuf::from("leads.csv"));
        assert!(config.webhook_url.is_none());
        assert_eq!(config.webhook_timeout, Duration::from_secs(2));
        assert!(!config.redirect_includes_email);
    }
}

#[cfg(test)]
mod models_tests {
    use crate::application::submit_reservation::ReservationInput;
    use crate::presentation::dto::*;

    #[test]
    fn test_reserve_form_into_input() {
        let form = ReserveForm {
            email: "a@b.com".into(),
            item_id: Some("3".into()),
        };

        let input: ReservationInput = form.into();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.item_id.as_deref(), Some("3"));
    }
}

#[cfg(test)]
mod router_tests {
    use crate::application::config::LeadConfig;
    use crate::infra::csv_log::CsvLeadLog;
    use crate::infra::webhook::HttpLeadNotifier;
    use crate::presentation::router::{leads_router, leads_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use std::path::Path;
    use tower::ServiceExt;

    fn app(config: LeadConfig) -> Router {
        let lead_log = CsvLeadLog::new(config.log_path.clone());
        let routes = leads_router_generic::<_, HttpLeadNotifier>(lead_log, None, config);
        Router::new().nest("/api", routes)
    }

    fn config_in(dir: &Path) -> LeadConfig {
        LeadConfig {
            log_path: dir.join("leads.csv"),
            ..Default::default()
        }
    }

    async fn post_form(app: &Router, content_type: &str, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/api/reserve")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn reserve(app: &Router, body: &str) -> Response {
        post_form(app, "application/x-www-form-urlencoded", body).await
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_reserve_redirects_to_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let log_path = config.log_path.clone();
        let app = app(config);

        let response = reserve(&app, "item_id=3&email=a%40b.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/items/item_3.html?reserved=true");

        let contents = std::fs::read_to_string(log_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "email,item_id,submitted_at");
        assert!(lines[1].starts_with("a@b.com,3,"));
    }

    #[tokio::test]
    async fn test_every_submission_is_a_new_row() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let log_path = config.log_path.clone();
        let app = app(config);

        for _ in 0..3 {
            reserve(&app, "item_id=3&email=a%40b.com").await;
        }

        let contents = std::fs::read_to_string(log_path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_missing_item_id_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let log_path = config.log_path.clone();
        let app = app(config);

        for body in ["email=a%40b.com", "email=a%40b.com&item_id=", "email=a%40b.com&item_id=x"] {
            let response = reserve(&app, body).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/?reserved=true", "{body}");
        }

        let contents = std::fs::read_to_string(log_path).unwrap();
        assert!(contents.lines().skip(1).all(|line| line.starts_with("a@b.com,,")));
    }

    #[tokio::test]
    async fn test_unreadable_body_still_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let log_path = config.log_path.clone();
        let app = app(config);

        let response = post_form(&app, "application/json", r#"{"item_id": 3}"#).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/?reserved=true");
        assert!(!log_path.exists());
    }

    #[tokio::test]
    async fn test_log_failure_still_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let config = LeadConfig {
            log_path: dir.path().join("missing_dir").join("leads.csv"),
            ..Default::default()
        };
        let app = app(config);

        let response = reserve(&app, "item_id=3&email=a%40b.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/items/item_3.html?reserved=true");
    }

    #[tokio::test]
    async fn test_webhook_failure_still_redirects() {
        let dir = tempfile::tempdir().unwrap();

        // Nobody listens on a port freed right after binding
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = LeadConfig {
            webhook_url: Some(format!("http://{addr}/hook")),
            ..config_in(dir.path())
        };
        let log_path = config.log_path.clone();
        let app = Router::new().nest("/api", leads_router(config).unwrap());

        let response = reserve(&app, "item_id=5&email=a%40b.com").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/items/item_5.html?reserved=true");

        // The local log is written regardless
        let contents = std::fs::read_to_string(log_path).unwrap();
        assert!(contents.contains("a@b.com,5,"));
    }

    #[tokio::test]
    async fn test_redirect_with_email_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let config = LeadConfig {
            redirect_includes_email: true,
            ..config_in(dir.path())
        };
        let app = app(config);

        let response = reserve(&app, "item_id=3&email=a%40b.com").await;
        assert_eq!(
            location(&response),
            "/items/item_3.html?reserved=true&email=a%40b.com"
        );
    }
}
