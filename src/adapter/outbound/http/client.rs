//! Betline REST client.
//!
//! One shared [`reqwest::Client`] per data source. Every request is a single
//! attempt; failures are classified and handed back to the orchestrator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{EventDetailDto, EventsResponse, SportDto};
use crate::config::{ApiConfig, HttpConfig};
use crate::domain::{Event, EventDetail, EventId, LeagueId, Sport};
use crate::error::{Error, Result};
use crate::port::DataSource;

/// [`DataSource`] backed by the betline HTTP API.
pub struct HttpDataSource {
    http: HttpClient,
    api: ApiConfig,
}

impl HttpDataSource {
    #[must_use]
    pub fn new(api: ApiConfig) -> Self {
        Self {
            http: HttpClient::new(),
            api,
        }
    }

    #[must_use]
    pub fn from_config(api: &ApiConfig, http: &HttpConfig) -> Self {
        let client = HttpClient::builder()
            .timeout(Duration::from_millis(http.timeout_ms))
            .connect_timeout(Duration::from_millis(http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http: client,
            api: api.clone(),
        }
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Transport errors and non-success statuses are transient; a body that
    /// does not decode is a [`Error::Decode`].
    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "Fetching");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| transient(url, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::TransientFetch {
                url: url.to_string(),
                reason: format!("HTTP status {status}"),
            });
        }

        let body = response.text().await.map_err(|err| transient(url, &err))?;
        serde_json::from_str(&body).map_err(|err| Error::Decode {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

fn transient(url: &str, err: &reqwest::Error) -> Error {
    let reason = if err.is_timeout() {
        format!("timed out: {err}")
    } else {
        err.to_string()
    };
    Error::TransientFetch {
        url: url.to_string(),
        reason,
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn list_sports(&self) -> Result<Vec<Sport>> {
        let sports: Vec<SportDto> = self.get_json(self.api.sports_url()).await?;
        debug!(count = sports.len(), "Fetched sports");
        Ok(sports.into_iter().map(Sport::from).collect())
    }

    async fn list_events(&self, league_id: LeagueId) -> Result<Vec<Event>> {
        let url = self.api.events_url(league_id);
        let response: EventsResponse = self.get_json(&url).await?;
        debug!(league_id = %league_id, count = response.data.len(), "Fetched events");

        response
            .data
            .into_iter()
            .map(|dto| {
                dto.into_event().map_err(|reason| Error::Decode {
                    url: url.clone(),
                    reason,
                })
            })
            .collect()
    }

    async fn event_detail(&self, event_id: EventId) -> Result<EventDetail> {
        let url = self.api.event_details_url(event_id);
        let detail: EventDetailDto = self.get_json(&url).await?;
        debug!(event_id = %event_id, markets = detail.markets.len(), "Fetched event detail");
        Ok(EventDetail::from(detail))
    }

    fn source_name(&self) -> &'static str {
        "betline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve `responses` in order, one connection each, and return the base URL.
    async fn serve(responses: Vec<(u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await.unwrap();
                let reply = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
        });

        format!("http://{addr}")
    }

    fn source(base: &str) -> HttpDataSource {
        HttpDataSource::from_config(&ApiConfig::from_base(base), &HttpConfig::default())
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    #[test]
    fn from_default_config() {
        let source = HttpDataSource::from_config(&ApiConfig::default(), &HttpConfig::default());
        assert_eq!(source.source_name(), "betline");
    }

    // -------------------------------------------------------------------------
    // Fetch and decode
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn list_sports_decodes_payload() {
        let base = serve(vec![(
            200,
            r#"[{"id":1,"name":"Football","regions":[{"leagues":[{"id":9,"name":"Premier League","top":true,"topOrder":1}]}]}]"#,
        )])
        .await;

        let sports = source(&base).list_sports().await.unwrap();
        assert_eq!(sports.len(), 1);
        assert_eq!(sports[0].name, "Football");
        assert_eq!(sports[0].leagues().count(), 1);
    }

    #[tokio::test]
    async fn list_events_maps_kickoff() {
        let base = serve(vec![(
            200,
            r#"{"data":[{"id":3,"name":"A - B","kickoff":1723305600000,"betline":"prematch"}]}"#,
        )])
        .await;

        let events = source(&base).list_events(LeagueId::new(9)).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kickoff.timestamp_millis(), 1_723_305_600_000);
    }

    #[tokio::test]
    async fn event_detail_decodes_markets() {
        let base = serve(vec![(
            200,
            r#"{"markets":[{"name":"Match Odds","runners":[{"id":1,"name":"Home","price":1.5}]}]}"#,
        )])
        .await;

        let detail = source(&base).event_detail(EventId::new(3)).await.unwrap();
        assert_eq!(detail.markets[0].name, "Match Odds");
    }

    // -------------------------------------------------------------------------
    // Failure classification
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn non_success_status_is_transient() {
        let base = serve(vec![(503, "{}")]).await;

        let err = source(&base).list_sports().await.unwrap_err();
        assert!(err.is_transient());
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let base = serve(vec![(200, "<html>maintenance</html>")]).await;

        let err = source(&base).event_detail(EventId::new(3)).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn out_of_range_kickoff_is_decode_error() {
        let base = serve(vec![(
            200,
            r#"{"data":[{"id":3,"name":"A - B","kickoff":9223372036854775807,"betline":"prematch"}]}"#,
        )])
        .await;

        let err = source(&base).list_events(LeagueId::new(9)).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_transient() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source(&format!("http://{addr}"))
            .list_sports()
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }
}
