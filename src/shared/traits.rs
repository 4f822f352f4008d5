use async_trait::async_trait;
use crate::shared::error::CollectionError;

/// A source that yields one `T` per call to `collect`.
pub trait DataCollector<T> {
    fn collect(&mut self) -> Result<T, CollectionError>;
    /// Checks that everything `collect` depends on is reachable.
    fn validate(&self) -> Result<(), CollectionError>;
}

#[async_trait]
pub trait AsyncDataCollector<T: Send> {
    async fn collect(&mut self) -> Result<T, CollectionError>;
    async fn validate(&self) -> Result<(), CollectionError>;
}

pub trait Validatable {
    fn validate(&self) -> Result<(), String>;
}
