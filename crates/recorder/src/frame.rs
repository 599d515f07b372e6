//! Cooperative paint-tick scheduling

/// Suspend until the host event loop has run once past the caller.
///
/// This is the equivalent of awaiting one animation-frame callback: work
/// already queued behind the calling task (the pending visual update) gets a
/// chance to commit before the render timer closes. A single yield is an
/// approximation; hosts that batch or defer rendering may commit across
/// several ticks.
pub async fn next_paint() {
    tokio::task::yield_now().await;
}
