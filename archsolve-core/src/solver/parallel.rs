//! Chunked fan-out of per-solution work onto scoped threads.

use crate::config::PARALLEL_THRESHOLD;
use crate::error::{LayoutError, Result};

/// Map `f` over `items`, preserving order.
///
/// Small inputs, or a single worker, run on the calling thread. Otherwise the
/// items are split into one contiguous chunk per worker and every chunk is
/// joined before returning.
pub fn par_map<T, R, F>(items: Vec<T>, workers: usize, f: F) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Sync,
{
    if workers <= 1 || items.len() < PARALLEL_THRESHOLD {
        return Ok(items.into_iter().map(f).collect());
    }

    let total = items.len();
    let chunk_size = total.div_ceil(workers);
    let mut chunks = Vec::with_capacity(workers);
    let mut iter = items.into_iter();
    loop {
        let chunk: Vec<T> = iter.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    let f = &f;
    let joined = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| scope.spawn(move |_| chunk.into_iter().map(f).collect::<Vec<R>>()))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<std::thread::Result<Vec<Vec<R>>>>()
    })
    .map_err(|_| LayoutError::WorkerPanicked)?
    .map_err(|_| LayoutError::WorkerPanicked)?;

    let mut out = Vec::with_capacity(total);
    for chunk in joined {
        out.extend(chunk);
    }
    Ok(out)
}
