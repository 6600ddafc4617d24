//! Re-resolve a creator's room id on an interval and report when it changes.
//!
//! Usage: cargo run -p liveroom-cli --example watch_room -- <uniqueId> [interval_secs]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use liveroom_core::{
    LiveError, ResolutionError, SessionParameterStore, SessionParams, ROOM_ID_PARAM,
};
use liveroom_web::{RoomIdApiRoute, WebClient};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = liveroom_logging::init_logger(None, "info", false);

    let mut args = std::env::args().skip(1);
    let unique_id = args
        .next()
        .context("usage: watch_room <uniqueId> [interval_secs]")?;
    let interval = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("interval must be a whole number of seconds")?
        .unwrap_or(30);

    let params = Arc::new(SessionParams::with_defaults(
        liveroom_config::DEFAULT_CLIENT_PARAMS.iter().copied(),
    ));
    let client = WebClient::new(params.clone()).with_timeout(Duration::from_secs(10));
    let route = RoomIdApiRoute::new(Arc::new(client), params.clone());

    // Calls are awaited one at a time, so `room_id` always holds the latest answer.
    let mut ticker = tokio::time::interval(Duration::from_secs(interval));
    loop {
        ticker.tick().await;
        let previous = params.get(ROOM_ID_PARAM);
        match route.resolve(&unique_id).await {
            Ok(room_id) if previous.as_deref() != Some(room_id.as_str()) => {
                info!(unique_id = %unique_id, room_id = %room_id, "Room id changed");
            }
            Ok(_) => {}
            Err(LiveError::Resolution(err @ ResolutionError::UserNotFound { .. })) => {
                warn!(error = %err, "Giving up");
                return Ok(());
            }
            Err(err) => warn!(error = %err, "Lookup failed; retrying next tick"),
        }
    }
}
