//! End-to-end generation behavior against the in-memory item store.

use async_trait::async_trait;
use inventoria_core::format::{
    CaseTransform, DateTimePattern, ElementDescriptor, ElementType, FormatSpec, OptionSet,
};
use inventoria_core::{Clock, CustomId, InventoryId, ItemStore, StoreError};
use inventoria_idgen::{GenerateError, Orchestrator, OrchestratorSettings};
use inventoria_storage::InMemoryItemStore;
use jiff::Timestamp;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

fn inventory() -> InventoryId {
    InventoryId::new("inv-e2e")
}

/// Oracle that reports every candidate as taken, with call accounting.
#[derive(Default)]
struct AlwaysTakenStore {
    exists_calls: AtomicU32,
    insert_calls: AtomicU32,
}

#[async_trait]
impl ItemStore for AlwaysTakenStore {
    async fn exists(&self, _: &InventoryId, _: &CustomId) -> Result<bool, StoreError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn live_count(&self, _: &InventoryId) -> Result<u64, StoreError> {
        Ok(0)
    }

    async fn insert(&self, _: &InventoryId, _: &CustomId) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FixedClock(Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

#[tokio::test]
async fn generated_ids_match_the_configured_pattern() {
    let spec = FormatSpec::new(vec![
        ElementDescriptor::fixed_text("ITEM-"),
        ElementDescriptor::new(ElementType::Random6Digit).with_options(OptionSet {
            leading_zeros: true,
            min_digits: Some(6),
            ..OptionSet::default()
        }),
    ]);

    let orchestrator =
        Orchestrator::new(InMemoryItemStore::new(), OrchestratorSettings::default());

    for _ in 0..100 {
        let id = orchestrator
            .generate_and_insert(&inventory(), &spec)
            .await
            .unwrap();
        let (prefix, digits) = id.as_str().split_at(5);
        assert_eq!(prefix, "ITEM-");
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn exhaustion_consumes_exactly_the_configured_budget() {
    let store = Arc::new(AlwaysTakenStore::default());
    let spec = FormatSpec::new(vec![ElementDescriptor::new(ElementType::Guid)]);
    let settings = OrchestratorSettings::builder().max_attempts(3).build();

    let orchestrator = Orchestrator::new(CountingHandle(Arc::clone(&store)), settings);

    let err = orchestrator
        .generate_and_insert(&inventory(), &spec)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::ExhaustedRetries { attempts: 3 }));

    // One oracle lookup per attempt, and never an insert for a candidate
    // the oracle rejected.
    assert_eq!(store.exists_calls.load(Ordering::SeqCst), 3);
    assert_eq!(store.insert_calls.load(Ordering::SeqCst), 0);
}

/// Store handle that forwards to a shared [`AlwaysTakenStore`], keeping the
/// call counters reachable from the test after the orchestrator takes
/// ownership.
struct CountingHandle(Arc<AlwaysTakenStore>);

#[async_trait]
impl ItemStore for CountingHandle {
    async fn exists(&self, inventory: &InventoryId, id: &CustomId) -> Result<bool, StoreError> {
        self.0.exists(inventory, id).await
    }

    async fn live_count(&self, inventory: &InventoryId) -> Result<u64, StoreError> {
        self.0.live_count(inventory).await
    }

    async fn insert(&self, inventory: &InventoryId, id: &CustomId) -> Result<(), StoreError> {
        self.0.insert(inventory, id).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writers_never_share_a_custom_id() {
    // Deterministic format: both writers compute the same candidate from
    // the same observed count, so the insert constraint must break the tie.
    let spec = FormatSpec::new(vec![
        ElementDescriptor::fixed_text("EQ-"),
        ElementDescriptor::new(ElementType::Sequence),
    ]);

    for _ in 0..20 {
        let orchestrator = Arc::new(Orchestrator::new(
            InMemoryItemStore::new(),
            OrchestratorSettings::default(),
        ));

        let mut handles = vec![];
        for _ in 0..2 {
            let orchestrator = Arc::clone(&orchestrator);
            let spec = spec.clone();
            handles.push(tokio::spawn(async move {
                orchestrator.generate_and_insert(&inventory(), &spec).await
            }));
        }

        let mut accepted = vec![];
        for handle in handles {
            accepted.push(handle.await.unwrap().unwrap());
        }

        assert_ne!(accepted[0], accepted[1], "two writers accepted one id");
    }
}

#[tokio::test]
async fn date_time_elements_render_the_simulated_clock() {
    let spec = FormatSpec::new(vec![
        ElementDescriptor::new(ElementType::DateTime).with_options(OptionSet {
            format: Some(DateTimePattern::YearMonthDay),
            ..OptionSet::default()
        }),
        ElementDescriptor::fixed_text("-"),
        ElementDescriptor::new(ElementType::Sequence),
    ]);

    // 2024-01-15T00:00:00Z
    let clock = FixedClock(Timestamp::from_second(1_705_276_800).unwrap());
    let orchestrator = Orchestrator::with_clock(
        InMemoryItemStore::new(),
        clock,
        OrchestratorSettings::default(),
    );

    let id = orchestrator
        .generate_and_insert(&inventory(), &spec)
        .await
        .unwrap();
    assert_eq!(id.as_str(), "20240115-1");
}

#[tokio::test]
async fn reparsed_spec_generates_identically() {
    let spec = FormatSpec::new(vec![
        ElementDescriptor::fixed_text("asset-").with_options(OptionSet {
            case: CaseTransform::Upper,
            ..OptionSet::default()
        }),
        ElementDescriptor::new(ElementType::Sequence).with_options(OptionSet {
            leading_zeros: true,
            min_digits: Some(3),
            ..OptionSet::default()
        }),
    ]);

    let reparsed = FormatSpec::from_json(&spec.to_json().unwrap()).unwrap();
    assert_eq!(spec, reparsed);

    let orchestrator =
        Orchestrator::new(InMemoryItemStore::new(), OrchestratorSettings::default());

    let from_original = orchestrator.generate(&inventory(), &spec).await.unwrap();
    let from_reparsed = orchestrator.generate(&inventory(), &reparsed).await.unwrap();
    assert_eq!(from_original.as_str(), "ASSET-001");
    assert_eq!(from_original, from_reparsed);
}

#[tokio::test]
async fn exhausted_retries_is_retryable_not_sticky() {
    // Budget exhaustion leaves no partial state behind; a later request
    // against a store that frees up succeeds.
    let spec = FormatSpec::new(vec![
        ElementDescriptor::fixed_text("EQ-"),
        ElementDescriptor::new(ElementType::Sequence),
    ]);

    let blocked = Orchestrator::new(CountingHandle(Arc::default()), OrchestratorSettings::default());
    let err = blocked
        .generate_and_insert(&inventory(), &spec)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerateError::ExhaustedRetries { attempts: 5 }));

    let open = Orchestrator::new(InMemoryItemStore::new(), OrchestratorSettings::default());
    let id = open.generate_and_insert(&inventory(), &spec).await.unwrap();
    assert_eq!(id.as_str(), "EQ-1");
}
