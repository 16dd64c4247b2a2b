#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use ferrule_application::ports::PageAcquirer;
use ferrule_application::use_cases::CheckEligibilityUseCase;
use ferrule_domain::{DomainError, PhoneNumber};
use ferrule_infrastructure::{CachedEligibilityResolver, EligibilityCache, PhraseClassifier};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Serves canned markup instead of driving a browser.
pub struct MockPageAcquirer {
    markup: String,
    delay: Duration,
    calls: AtomicU64,
}

impl MockPageAcquirer {
    pub fn new(markup: &str) -> Arc<Self> {
        Self::with_delay(markup, Duration::ZERO)
    }

    pub fn with_delay(markup: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            markup: markup.to_string(),
            delay,
            calls: AtomicU64::new(0),
        })
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageAcquirer for MockPageAcquirer {
    async fn acquire(&self, _phone: &PhoneNumber) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.markup.clone())
    }
}

/// Check pipeline over a mock acquirer: real cache, real classifier,
/// real resolver.
pub struct TestStack {
    pub check: CheckEligibilityUseCase,
    pub cache: Arc<EligibilityCache>,
    pub acquirer: Arc<MockPageAcquirer>,
}

pub fn build_stack(acquirer: Arc<MockPageAcquirer>, ttl: Duration) -> TestStack {
    let cache = Arc::new(EligibilityCache::new(ttl));
    let resolver = Arc::new(CachedEligibilityResolver::new(
        cache.clone(),
        acquirer.clone(),
        Arc::new(PhraseClassifier::new()),
    ));

    TestStack {
        check: CheckEligibilityUseCase::new(resolver),
        cache,
        acquirer,
    }
}
