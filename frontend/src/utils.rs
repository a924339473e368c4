use crate::models::VideoEntry;

/// Client-side id for an entry the store did not identify.
pub fn placeholder_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Returns `candidate`, or `candidate-<n>` with the smallest `n` not taken.
pub fn unique_id(candidate: &str, entries: &[VideoEntry]) -> String {
    let taken = |id: &str| entries.iter().any(|entry| entry.id == id);
    if !taken(candidate) {
        return candidate.to_string();
    }
    (1..)
        .map(|n| format!("{candidate}-{n}"))
        .find(|id| !taken(id))
        .unwrap_or_else(|| candidate.to_string())
}

/// Drops entries whose id was already seen. First occurrence wins.
pub fn dedup_by_id(entries: Vec<VideoEntry>) -> Vec<VideoEntry> {
    let mut seen = std::collections::HashSet::new();
    entries
        .into_iter()
        .filter(|entry| {
            let fresh = seen.insert(entry.id.clone());
            if !fresh {
                log::warn!("Dropping duplicate video id {}", entry.id);
            }
            fresh
        })
        .collect()
}

/// Display rows as (1-based sequence number, entry).
pub fn numbered_rows(entries: &[VideoEntry], newest_first: bool) -> Vec<(usize, &VideoEntry)> {
    let mut ordered: Vec<&VideoEntry> = entries.iter().collect();
    if newest_first {
        ordered.reverse();
    }
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
        .collect()
}

/// Trimmed input, or `None` when nothing but whitespace was typed.
pub fn normalize_url(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
