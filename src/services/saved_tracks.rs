use crate::api::SpotifyApi;
use crate::constants::SAVED_TRACKS_PAGE_SIZE;
use crate::models::Track;
use crate::utils::ApiError;

/// Fetch the user's saved tracks page by page until `target_count` is reached
/// or the library runs out.
///
/// Pages are requested strictly in offset order; the result can overshoot the
/// target by up to one page. The first page is always requested. Any failed
/// page aborts the whole fetch.
pub async fn fetch_saved_tracks(
    api: &dyn SpotifyApi,
    target_count: usize,
) -> Result<Vec<Track>, ApiError> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut pages_fetched = 0;

    loop {
        let offset = u32::try_from(tracks.len()).unwrap_or(u32::MAX);
        let page = api.saved_tracks(SAVED_TRACKS_PAGE_SIZE, offset).await?;
        pages_fetched += 1;

        let has_next = page.has_next();
        let received = page.items.len();
        tracks.extend(page.items.into_iter().map(|item| item.track));

        log::debug!(
            "[SavedTracks] Page {} at offset {}: {} tracks (total: {}, more: {})",
            pages_fetched,
            offset,
            received,
            tracks.len(),
            has_next
        );

        if !has_next || tracks.len() >= target_count {
            break;
        }
        if received == 0 {
            // Offset would never advance
            log::warn!("[SavedTracks] Empty page with a next link at offset {}, stopping", offset);
            break;
        }
    }

    log::info!(
        "[SavedTracks] Fetched {} saved tracks in {} pages",
        tracks.len(),
        pages_fetched
    );

    Ok(tracks)
}
