use crate::{error::Result, models::ImagePayload};
use async_trait::async_trait;
use std::sync::Arc;

/// One hosted text-to-image call.
///
/// `Ok(None)` means the service answered without producing an image (or could not be
/// reached because no credential is configured); `Err` carries transport and service
/// failures.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<ImagePayload>>;
}

#[async_trait]
impl<T: ImageGenerator + ?Sized> ImageGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<Option<ImagePayload>> {
        (**self).generate(prompt).await
    }
}
