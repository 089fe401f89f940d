//! Partition executor: fan a per-partition body out over every partition.
//!
//! All partitions run concurrently on the caller's task and are joined
//! unordered. A body that returns an error or panics is converted into one
//! UNKNOWN finding for its partition; the other partitions are unaffected.
//! The returned future resolves only after every partition has settled.

use crate::error::RuleError;
use crate::findings::Findings;
use cloudguard_types::Partition;
use futures::FutureExt;
use futures::future::join_all;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, warn};

pub async fn for_each_partition<'a, F, Fut>(
    partitions: &'a [Partition],
    findings: &'a Findings,
    eval: F,
) where
    // Every partition future holds `&F`; `Sync` keeps the joined future `Send`.
    F: Fn(&'a Partition) -> Fut + Sync,
    Fut: Future<Output = Result<(), RuleError>> + Send,
{
    if partitions.is_empty() {
        debug!("no partitions configured");
        return;
    }

    let eval = &eval;
    let tasks = partitions.iter().map(|partition| async move {
        // Calling `eval` inside the guarded future also catches panics raised
        // before the body's first await.
        let body = async move { eval(partition).await };
        let outcome = AssertUnwindSafe(body).catch_unwind().await;

        let err = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(err)) => err,
            Err(payload) => RuleError::from_panic(payload.as_ref()),
        };
        warn!(%partition, error = %err, "partition evaluation failed");
        findings.record_unknown(
            format!("Unable to evaluate partition: {err}"),
            partition,
            None,
        );
    });

    join_all(tasks).await;
}
