//! # Record Store Client
//!
//! The external collaborator that persists trade records. The analytics
//! pipeline only ever consumes the output of `list_trades`; the remaining
//! operations exist for the CRUD surface around it.
//!
//! Raw responses are passed through the normalizer at this boundary, so
//! everything beyond this crate sees only canonical `TradeRecord`s.

use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::TradeRecord;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

pub mod error;

pub use error::StoreError;

/// The payload for creating or updating a trade. The store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct TradeInput {
    pub instrument: String,
    pub entry_price: Option<Decimal>,
    pub exit_price: Option<Decimal>,
    pub trade_date: Option<NaiveDate>,
    pub profit_loss: Option<Decimal>,
    pub notes: String,
}

/// The generic, abstract interface to the record store.
/// This trait is the contract the application uses, allowing the underlying
/// implementation (HTTP or mock) to be swapped out.
#[async_trait]
pub trait TradeStore: Send + Sync {
    /// Fetches the full, flat collection of records in store order.
    async fn list_trades(&self) -> Result<Vec<TradeRecord>, StoreError>;

    /// Persists a new record and returns it with its assigned id.
    async fn create_trade(&self, input: &TradeInput) -> Result<TradeRecord, StoreError>;

    /// Replaces the fields of an existing record.
    async fn update_trade(&self, id: &str, input: &TradeInput) -> Result<TradeRecord, StoreError>;

    /// Removes a record.
    async fn delete_trade(&self, id: &str) -> Result<(), StoreError>;
}

/// A concrete implementation of `TradeStore` over the journal's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTradeStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTradeStore {
    /// `base_url` is the environment-selected API root
    /// (e.g. "http://localhost:3000/api").
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Runs a request, surfacing non-success statuses as `StoreError::Api`
    /// and returning the raw body text otherwise.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, StoreError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(StoreError::Api(status.as_u16(), text))
        }
    }
}

#[async_trait]
impl TradeStore for HttpTradeStore {
    async fn list_trades(&self) -> Result<Vec<TradeRecord>, StoreError> {
        let body = self.send(self.client.get(self.endpoint("trades"))).await?;
        let raw: Vec<Value> = serde_json::from_str(&body)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        tracing::debug!(count = raw.len(), "fetched raw trade records");
        Ok(normalizer::normalize_all(&raw))
    }

    async fn create_trade(&self, input: &TradeInput) -> Result<TradeRecord, StoreError> {
        let body = self
            .send(self.client.post(self.endpoint("trades")).json(input))
            .await?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        Ok(normalizer::normalize(&raw))
    }

    async fn update_trade(
        &self,
        id: &str,
        input: &TradeInput,
    ) -> Result<TradeRecord, StoreError> {
        let body = self
            .send(
                self.client
                    .put(self.endpoint(&format!("trades/{id}")))
                    .json(input),
            )
            .await?;
        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        Ok(normalizer::normalize(&raw))
    }

    async fn delete_trade(&self, id: &str) -> Result<(), StoreError> {
        self.send(self.client.delete(self.endpoint(&format!("trades/{id}"))))
            .await?;
        tracing::info!(id, "deleted trade record");
        Ok(())
    }
}
