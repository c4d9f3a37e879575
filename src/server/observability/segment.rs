use std::{future::Future, time::Instant};

use tracing::{field::Empty, Instrument};

/// Runs `work` inside a span named after the unit of work.
///
/// When the work finishes a `Segment finished` event is emitted under the span
/// with `segment`, `duration_ms` and `outcome` (`success` or `error`). The same
/// fields are recorded on the span. The result is returned untouched.
pub async fn segment<F, T, E>(name: &'static str, work: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let span = tracing::info_span!(
        "segment",
        segment = name,
        duration_ms = Empty,
        outcome = Empty
    );

    let started = Instant::now();
    let result = work.instrument(span.clone()).await;

    let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let outcome = if result.is_ok() { "success" } else { "error" };
    span.record("duration_ms", elapsed);
    span.record("outcome", outcome);

    tracing::info!(
        parent: &span,
        segment = name,
        duration_ms = elapsed,
        outcome,
        "Segment finished"
    );

    result
}
