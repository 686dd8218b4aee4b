//! Constants for the list view's pagination state.

/// Pages are numbered from 1; this is also the fallback for missing or
/// malformed `page` query parameters.
pub const FIRST_PAGE: u64 = 1;
