use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HealthRepository: Send + Sync {
    async fn check(&self) -> AppResult<()>;
}
