pub mod room_id_api;

use async_trait::async_trait;

use liveroom_core::LiveError;

pub use room_id_api::RoomIdApiRoute;

/// A single web endpoint, called through a shared [`liveroom_core::HttpClient`].
#[async_trait]
pub trait ClientRoute: Send + Sync {
    type Args: Send + 'static;
    type Output: Send;

    /// Route name for logs and diagnostics (e.g., "room_id_api").
    fn name(&self) -> &str;

    async fn call(&self, args: Self::Args) -> Result<Self::Output, LiveError>;
}
