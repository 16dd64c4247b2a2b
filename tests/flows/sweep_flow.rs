//! The sweep job against a pipeline-fed cache: expired entries are
//! reclaimed on schedule, live ones survive, cancellation stops the loop.

#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{TestNumbers, TestPanels};
use common::{build_stack, MockPageAcquirer, TestStack};
use ferrule_application::ports::ResultCache;
use ferrule_application::use_cases::PurgeExpiredUseCase;
use ferrule_jobs::{CacheSweepJob, JobRunner};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

async fn seeded_stack(ttl: Duration) -> TestStack {
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, ttl);
    stack.check.execute(TestNumbers::primary()).await.unwrap();
    stack
}

fn sweep_job(stack: &TestStack, shutdown: &CancellationToken) -> CacheSweepJob {
    CacheSweepJob::new(Arc::new(PurgeExpiredUseCase::new(stack.cache.clone())))
        .with_interval(1)
        .with_cancellation(shutdown.clone())
}

#[tokio::test]
async fn test_sweep_job_reclaims_expired_entries() {
    // Arrange - one lookup lands one entry in a short-TTL cache
    let stack = seeded_stack(Duration::from_millis(30)).await;
    assert_eq!(stack.cache.stats().entries, 1);

    let shutdown = CancellationToken::new();
    let job = sweep_job(&stack, &shutdown);

    // Act - the entry expires, then the first scheduled sweep fires
    JobRunner::new().with_cache_sweep(job).start().await;
    tokio::time::sleep(Duration::from_millis(1200)).await;

    // Assert
    let stats = stack.cache.stats();
    assert_eq!(stats.entries, 0);
    assert!(stats.sweeps >= 1);

    shutdown.cancel();
}

#[tokio::test]
async fn test_sweep_job_preserves_live_entries() {
    // Arrange - generous TTL, nothing should expire
    let stack = seeded_stack(Duration::from_secs(300)).await;

    let shutdown = CancellationToken::new();
    let job = sweep_job(&stack, &shutdown);

    // Act
    JobRunner::new().with_cache_sweep(job).start().await;
    tokio::time::sleep(Duration::from_millis(1200)).await;

    // Assert
    assert_eq!(stack.cache.stats().entries, 1);

    shutdown.cancel();
}

#[tokio::test]
async fn test_cancelled_sweep_job_stops_sweeping() {
    // Arrange
    let stack = seeded_stack(Duration::from_millis(30)).await;

    let shutdown = CancellationToken::new();
    let job = sweep_job(&stack, &shutdown);
    JobRunner::new().with_cache_sweep(job).start().await;

    // Act - cancel before the first scheduled tick
    shutdown.cancel();
    tokio::time::sleep(Duration::from_millis(1200)).await;

    // Assert - the expired entry is still stored: nothing swept after
    // cancellation, and reads alone never remove it
    assert_eq!(stack.cache.stats().entries, 1);
    assert_eq!(stack.cache.stats().sweeps, 0);
}
