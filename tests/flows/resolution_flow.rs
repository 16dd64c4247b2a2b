//! End-to-end checks of the resolution pipeline: raw input through
//! validation, acquisition, classification, and the result cache.

#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{TestNumbers, TestPanels};
use common::{build_stack, MockPageAcquirer};
use ferrule_application::ports::ResultCache;
use ferrule_domain::{DomainError, EligibilityStatus};
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

// ============================================================================
// Full Check Flow Tests
// ============================================================================

#[tokio::test]
async fn test_complete_check_flow() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, TTL);

    // Act - dotted input, as a person would type it
    let resolution = stack
        .check
        .execute(TestNumbers::primary_dotted())
        .await
        .unwrap();

    // Assert
    assert!(!resolution.from_cache);
    let report = &resolution.report;
    assert_eq!(report.phone_number.as_str(), "257364");
    assert!(report.found);
    assert_eq!(
        report.adsl.as_ref().unwrap().status,
        EligibilityStatus::Eligible
    );
    assert!(report.fiber.as_ref().unwrap().available);
    assert_eq!(report.contact_phone.as_deref(), Some("1016"));
    assert_eq!(report.isp_providers.len(), 5);
    assert_eq!(stack.acquirer.calls(), 1);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_the_acquirer() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, TTL);

    // Act
    let result = stack.check.execute("12a456").await;

    // Assert
    assert!(matches!(result, Err(DomainError::InvalidPhoneNumber(_))));
    assert_eq!(stack.acquirer.calls(), 0);
}

#[tokio::test]
async fn test_unknown_number_is_reported_and_cached() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::not_found());
    let stack = build_stack(acquirer, TTL);

    // Act
    let first = stack.check.execute(TestNumbers::primary()).await.unwrap();
    let second = stack.check.execute(TestNumbers::primary()).await.unwrap();

    // Assert - a negative verdict is still a cacheable verdict
    assert!(!first.report.found);
    assert!(first.report.error_message.is_some());
    assert!(second.from_cache);
    assert_eq!(stack.acquirer.calls(), 1);
}

// ============================================================================
// Cache Flow Tests
// ============================================================================

#[tokio::test]
async fn test_repeat_lookup_is_served_from_cache() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, TTL);

    // Act
    let first = stack.check.execute(TestNumbers::primary()).await.unwrap();
    let second = stack.check.execute(TestNumbers::primary()).await.unwrap();

    // Assert
    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.report, second.report);
    assert_eq!(stack.acquirer.calls(), 1);
}

#[tokio::test]
async fn test_normalized_variants_share_one_cache_entry() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, TTL);

    // Act - same line, two spellings
    stack.check.execute("25.73.64").await.unwrap();
    let second = stack.check.execute("25 73 64").await.unwrap();

    // Assert
    assert!(second.from_cache);
    assert_eq!(stack.acquirer.calls(), 1);
    assert_eq!(stack.cache.stats().entries, 1);
}

#[tokio::test]
async fn test_expired_entry_is_reacquired() {
    // Arrange
    let acquirer = MockPageAcquirer::new(TestPanels::fully_eligible());
    let stack = build_stack(acquirer, Duration::from_millis(40));

    // Act
    stack.check.execute(TestNumbers::primary()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    let second = stack.check.execute(TestNumbers::primary()).await.unwrap();

    // Assert
    assert!(!second.from_cache);
    assert_eq!(stack.acquirer.calls(), 2);
}

// ============================================================================
// Concurrency Flow Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_lookups_share_one_acquisition() {
    // Arrange - slow acquisition so the callers overlap
    let acquirer =
        MockPageAcquirer::with_delay(TestPanels::fully_eligible(), Duration::from_millis(50));
    let stack = build_stack(acquirer, TTL);

    // Act - three callers, one line (one of them dotted)
    let (a, b, c) = tokio::join!(
        stack.check.execute(TestNumbers::primary()),
        stack.check.execute(TestNumbers::primary_dotted()),
        stack.check.execute(TestNumbers::primary()),
    );

    // Assert
    a.unwrap();
    b.unwrap();
    c.unwrap();
    assert_eq!(stack.acquirer.calls(), 1);
}

#[tokio::test]
async fn test_distinct_numbers_resolve_independently() {
    // Arrange
    let acquirer =
        MockPageAcquirer::with_delay(TestPanels::fully_eligible(), Duration::from_millis(30));
    let stack = build_stack(acquirer, TTL);

    // Act
    let (a, b) = tokio::join!(
        stack.check.execute(TestNumbers::primary()),
        stack.check.execute(TestNumbers::secondary()),
    );

    // Assert
    assert_eq!(a.unwrap().report.phone_number.as_str(), "257364");
    assert_eq!(b.unwrap().report.phone_number.as_str(), "441234");
    assert_eq!(stack.acquirer.calls(), 2);
    assert_eq!(stack.cache.stats().entries, 2);
}
