//! Response body excerpts
//!
//! A people page or an OData error dump can run to tens of kilobytes of
//! pretty-printed JSON. Logs and error details get a single-line excerpt.

/// Bytes of body kept in an excerpt
pub const EXCERPT_LIMIT: usize = 512;

/// Collapse whitespace runs into single spaces and cut at [`EXCERPT_LIMIT`].
///
/// A cut body ends with ` ... (N bytes)`, where N is the original length.
pub fn body_excerpt(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= EXCERPT_LIMIT {
        return flat;
    }

    // Largest char boundary at or below the limit
    let cut = flat
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= EXCERPT_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{} ... ({} bytes)", &flat[..cut], body.len())
}
