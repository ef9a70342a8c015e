use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{Order, OrderResult, Product};

/// Envelope of list endpoints: `{ "total": n, "items": [...] }`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub total: u64,
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin client for the shop HTTP API.
#[derive(Clone)]
pub struct LarekApi {
    client: Client,
    api_url: String,
    cdn_url: String,
}

impl LarekApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            api_url: config.api_url(),
            cdn_url: config.cdn_url(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `GET {api}/product/`. Image paths are resolved against the CDN.
    pub async fn get_product_list(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/product/", self.api_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::from_send(&url, e))?;
        let page: ListResponse<Product> = decode(&url, response).await?;
        tracing::debug!(total = page.total, received = page.items.len(), "catalog fetched");

        Ok(page
            .items
            .into_iter()
            .map(|mut product| {
                product.image = format!("{}{}", self.cdn_url, product.image);
                product
            })
            .collect())
    }

    /// `POST {api}/order` with the finalized draft order.
    pub async fn order_products(&self, order: &Order) -> Result<OrderResult, ApiError> {
        let url = format!("{}/order", self.api_url);
        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::from_send(&url, e))?;
        decode(&url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}
