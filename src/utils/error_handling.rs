use tokio::runtime::Runtime;

/// Creates a lightweight single-threaded Tokio runtime
///
/// All remote calls are I/O bound, so one thread driving many outstanding
/// requests is enough. Concurrent audio-feature batches still overlap on the wire.
pub fn create_runtime() -> Result<Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create runtime: {}", e))
}

/// Keep error bodies short enough for a single log line
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
