//! Test-only helpers for constructing movie records and batches.

use crate::core::batch::Batch;
use crate::core::record::{MovieRecord, PosterPath};
use crate::core::types::Detail;

/// Create a record with an absent poster.
pub fn record(id: i64, title: &str, genre_ids: &[i64]) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        genre_ids: genre_ids.to_vec(),
        poster_path: PosterPath::Absent,
    }
}

/// Create a classified record with only a title of interest.
pub fn titled(id: i64, title: &str) -> MovieRecord {
    record(id, title, &[28])
}

/// Create a record whose poster is `Some(path)` or null.
pub fn with_poster(id: i64, title: &str, poster: Option<&str>) -> MovieRecord {
    let state = match poster {
        Some(path) => PosterPath::Present(path.to_string()),
        None => PosterPath::Null,
    };
    with_poster_state(id, title, state)
}

/// Create a record with an explicit poster state.
pub fn with_poster_state(id: i64, title: &str, poster_path: PosterPath) -> MovieRecord {
    MovieRecord {
        poster_path,
        ..titled(id, title)
    }
}

/// Wrap records in a batch with no rejected entries.
pub fn batch(records: Vec<MovieRecord>) -> Batch {
    Batch::from_records(records)
}

/// Ids of the records named by a diagnostic, in order.
pub fn detail_ids(detail: &Detail) -> Vec<i64> {
    detail.records.iter().map(|record| record.id).collect()
}
