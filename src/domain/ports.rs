use crate::domain::model::{RawRecord, WorkoutLog};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink for the finished output document. The converter only ever
/// writes; input is owned by the row reader.
pub trait DocumentStore: Send + Sync {
    /// Writes `data` under `name` and returns the path it landed at.
    fn write_document(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn start_id(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, rows: Vec<RawRecord>) -> Result<WorkoutLog>;
    async fn load(&self, log: WorkoutLog) -> Result<String>;
}
