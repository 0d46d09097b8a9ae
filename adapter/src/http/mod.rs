pub mod model;

use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::{
    config::ServiceConfig,
    error::{AppError, AppResult},
};

/// Thin reqwest wrapper for the remote access service. Transport
/// errors map to `NetworkFailure`; non-2xx responses map to
/// `ServiceRejected` carrying the server-supplied reason verbatim.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpClient {
    pub fn new(cfg: &ServiceConfig) -> AppResult<Self> {
        let client = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let res = self.client.get(self.url(path)).send().await?;
        Self::decode(res).await
    }

    /// GET で 404 を None に潰す版
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> AppResult<Option<T>> {
        let res = self.client.get(self.url(path)).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::decode(res).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let res = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(res).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let res = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(res).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let res = self.client.delete(self.url(path)).send().await?;
        Self::decode(res).await
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> AppResult<T> {
        if res.status().is_success() {
            Ok(res.json::<T>().await?)
        } else {
            Err(AppError::ServiceRejected(Self::rejection_message(res).await))
        }
    }

    async fn rejection_message(res: Response) -> String {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) if !parsed.error.is_empty() => parsed.error,
            _ if !body.is_empty() => body,
            _ => format!("request failed with status {status}"),
        }
    }
}
