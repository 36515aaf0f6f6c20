use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::AppResult;

/// Runs `lookup` over `items` with at most `limit` lookups in flight and
/// returns the results in input order.
///
/// Fails fast: the first error is returned and the remaining results are
/// dropped.
pub async fn enrich_in_order<T, U, F, Fut>(items: Vec<T>, limit: usize, lookup: F) -> AppResult<Vec<U>>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = AppResult<U>>,
{
    stream::iter(items)
        .map(lookup)
        .buffered(limit.max(1))
        .try_collect()
        .await
}
