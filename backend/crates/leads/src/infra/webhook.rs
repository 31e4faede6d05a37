//! Marketing Webhook
//!
//! Form-encoded POST of each lead. Bounded by the client timeout, never
//! retried.

use crate::domain::entities::LeadRecord;
use crate::domain::repository::LeadNotifier;
use crate::error::LeadResult;
use std::time::Duration;

/// HTTP lead notifier
#[derive(Debug, Clone)]
pub struct HttpLeadNotifier {
    client: reqwest::Client,
    url: String,
}

impl HttpLeadNotifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> LeadResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LeadNotifier for HttpLeadNotifier {
    async fn notify(&self, lead: &LeadRecord) -> LeadResult<()> {
        let mut form = vec![("email", lead.email.clone())];
        if let Some(id) = lead.item_id {
            form.push(("item_id", id.to_string()));
        }

        let response = self.client.post(&self.url).form(&form).send().await?;
        let status = response.status();
        response.error_for_status()?;

        tracing::debug!(status = status.as_u16(), "Lead webhook accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Form, State};
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use chrono::Utc;
    use kernel::VehicleId;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Local endpoint answering with `status` after `delay`
    async fn spawn_endpoint(status: StatusCode, delay: Duration) -> (String, Received) {
        let received: Received = Arc::default();

        let app = Router::new()
            .route(
                "/hook",
                post(
                    move |State(received): State<Received>,
                          Form(form): Form<HashMap<String, String>>| async move {
                        received.lock().unwrap().push(form);
                        tokio::time::sleep(delay).await;
                        status
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/hook"), received)
    }

    fn lead(item_id: Option<i64>) -> LeadRecord {
        LeadRecord::new("a@b.com", item_id.map(VehicleId::new), Utc::now())
    }

    #[tokio::test]
    async fn test_posts_form_fields() {
        let (url, received) = spawn_endpoint(StatusCode::OK, Duration::ZERO).await;
        let notifier = HttpLeadNotifier::new(url, Duration::from_secs(2)).unwrap();

        notifier.notify(&lead(Some(3))).await.unwrap();
        notifier.notify(&lead(None)).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received[0]["email"], "a@b.com");
        assert_eq!(received[0]["item_id"], "3");
        assert_eq!(received[1]["email"], "a@b.com");
        assert!(!received[1].contains_key("item_id"));
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let (url, _) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
        let notifier = HttpLeadNotifier::new(url, Duration::from_secs(2)).unwrap();

        let err = notifier.notify(&lead(Some(3))).await.unwrap_err();
        assert!(!err.is_timeout());
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let (url, _) = spawn_endpoint(StatusCode::OK, Duration::from_secs(5)).await;
        let notifier = HttpLeadNotifier::new(url, Duration::from_millis(100)).unwrap();

        let started = std::time::Instant::now();
        let err = notifier.notify(&lead(Some(3))).await.unwrap_err();

        assert!(err.is_timeout());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let notifier =
            HttpLeadNotifier::new(format!("http://{addr}/hook"), Duration::from_secs(2)).unwrap();
        assert!(notifier.notify(&lead(Some(3))).await.is_err());
    }
}
