use std::time::Instant;

use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{InfluencerRow, PredictionRow};
use super::{InfluencerFilter, RecordSource, StoreError};
use crate::models::{Influencer, Prediction};
use crate::records::{to_influencer, to_prediction};

/// PostgREST code for a malformed filter value, e.g. a non-uuid id.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Read-only client for the Supabase PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: Url,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(http: Client, project_url: &str, anon_key: String) -> Result<Self, StoreError> {
        let rest_url = Url::parse(&format!(
            "{}/rest/v1/",
            project_url.trim_end_matches('/')
        ))?;

        Ok(Self {
            http,
            rest_url,
            anon_key,
        })
    }

    fn table_url(&self, table: &str, filters: &[(&str, String)]) -> Result<Url, StoreError> {
        let mut url = self.rest_url.join(table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (key, value) in filters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET rows from a table, recording request count and latency.
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &'static str,
        filters: &[(&str, String)],
    ) -> Result<Vec<T>, StoreError> {
        let url = self.table_url(table, filters)?;
        counter!("store_requests_total", "table" => table).increment(1);

        let started = Instant::now();
        let result = self.get_json(url).await;
        histogram!("store_request_seconds", "table" => table)
            .record(started.elapsed().as_secs_f64());

        if let Err(e) = &result {
            counter!("store_failures_total", "table" => table).increment(1);
            tracing::error!(table, error = %e, "Store request failed");
        }
        result
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, StoreError> {
        let resp = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<T> = resp.json().await?;
        Ok(rows)
    }
}

#[async_trait]
impl RecordSource for SupabaseClient {
    async fn influencers(&self, filter: InfluencerFilter) -> Result<Vec<Influencer>, StoreError> {
        let filters = match filter {
            InfluencerFilter::All => vec![],
            InfluencerFilter::Spotlight => vec![("spotlight", "eq.true".to_string())],
        };
        let rows: Vec<InfluencerRow> = self.fetch_rows("influencers", &filters).await?;
        Ok(rows.into_iter().map(to_influencer).collect())
    }

    async fn influencer(&self, id: &str) -> Result<Option<Influencer>, StoreError> {
        let filters = [("id", format!("eq.{id}")), ("limit", "1".to_string())];
        match self.fetch_rows::<InfluencerRow>("influencers", &filters).await {
            Ok(rows) => Ok(rows.into_iter().next().map(to_influencer)),
            // An id the column type cannot hold matches no record.
            Err(StoreError::Status { status: 400, body })
                if body.contains(INVALID_TEXT_REPRESENTATION) =>
            {
                tracing::debug!(id, "Influencer id not valid for store column");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn predictions(
        &self,
        influencer_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Prediction>, StoreError> {
        let mut filters = vec![
            ("influencer_id", format!("eq.{influencer_id}")),
            ("order", "event_date.desc".to_string()),
        ];
        if let Some(limit) = limit {
            filters.push(("limit", limit.to_string()));
        }
        let rows: Vec<PredictionRow> = self.fetch_rows("predictions", &filters).await?;
        Ok(rows.into_iter().map(to_prediction).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let filters = [("limit", "1".to_string())];
        self.fetch_rows::<serde_json::Value>("influencers", &filters)
            .await
            .map(|_| ())
    }
}
