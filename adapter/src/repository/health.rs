use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthRepository;
use serde_json::Value;
use shared::error::AppResult;

use crate::http::HttpClient;

#[derive(new)]
pub struct HealthRepositoryImpl {
    client: HttpClient,
}

#[async_trait]
impl HealthRepository for HealthRepositoryImpl {
    async fn check(&self) -> AppResult<()> {
        let _: Value = self.client.get("/health").await?;
        Ok(())
    }
}
