use crate::cache::GeneratorCache;
use crate::error::{store_error, GenerateError};
use inventoria_core::{
    Clock, CustomId, FormatSpec, GenerationContext, InventoryId, ItemStore, StoreError,
    SystemClock,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Configures an [`Orchestrator`].
#[derive(Debug, Clone, Copy, typed_builder::TypedBuilder)]
pub struct OrchestratorSettings {
    /// Upper bound on generation attempts per request. The budget spans
    /// both failure sources: pre-insert oracle hits and insert-time
    /// constraint violations.
    #[builder(default = 5)]
    pub max_attempts: u32,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Drives candidate generation and the uniqueness-conflict retry loop.
///
/// Wraps an [`ItemStore`] and a [`Clock`], and owns the compiled-generator
/// cache. Every attempt builds a fresh [`GenerationContext`] so Sequence
/// elements see the live item count; the loop ends at the first accepted
/// candidate or when the attempt budget runs out. No unverified candidate
/// is ever handed to the store.
pub struct Orchestrator<S, C = SystemClock> {
    store: Arc<S>,
    clock: C,
    cache: GeneratorCache,
    max_attempts: u32,
}

impl<S: ItemStore> Orchestrator<S> {
    /// Creates an orchestrator backed by the system clock.
    pub fn new(store: S, settings: OrchestratorSettings) -> Self {
        Self::with_clock(store, SystemClock, settings)
    }
}

impl<S: ItemStore, C: Clock> Orchestrator<S, C> {
    pub fn with_clock(store: S, clock: C, settings: OrchestratorSettings) -> Self {
        Self {
            store: Arc::new(store),
            clock,
            cache: GeneratorCache::new(),
            max_attempts: settings.max_attempts,
        }
    }

    /// Generates a unique candidate id without persisting it.
    ///
    /// Each attempt renders a candidate and asks the uniqueness oracle;
    /// a hit burns one attempt. Note the accepted candidate is only
    /// verified, not reserved: callers that go on to insert must treat a
    /// constraint violation as a collision, which is what
    /// [`generate_and_insert`](Self::generate_and_insert) does.
    pub async fn generate(
        &self,
        inventory: &InventoryId,
        spec: &FormatSpec,
    ) -> Result<CustomId, GenerateError> {
        let generator = self.cache.get_or_compile(spec)?;

        for attempt in 1..=self.max_attempts {
            let candidate = generator.render(&self.context(inventory).await?);
            debug!(%inventory, attempt, candidate = candidate.as_str(), "generated candidate");

            if !self
                .store
                .exists(inventory, &candidate)
                .await
                .map_err(store_error)?
            {
                return Ok(candidate);
            }
            warn!(%inventory, attempt, candidate = candidate.as_str(), "candidate taken, regenerating");
        }

        Err(GenerateError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Generates a unique candidate and persists it, in one retry budget.
    ///
    /// The oracle pre-check cannot close the check-then-insert race, so a
    /// [`StoreError::DuplicateCustomId`] from the insert is treated as a
    /// collision and consumes the attempt, same as an oracle hit. Other
    /// store failures end the request immediately.
    pub async fn generate_and_insert(
        &self,
        inventory: &InventoryId,
        spec: &FormatSpec,
    ) -> Result<CustomId, GenerateError> {
        let generator = self.cache.get_or_compile(spec)?;

        for attempt in 1..=self.max_attempts {
            let candidate = generator.render(&self.context(inventory).await?);
            debug!(%inventory, attempt, candidate = candidate.as_str(), "generated candidate");

            if self
                .store
                .exists(inventory, &candidate)
                .await
                .map_err(store_error)?
            {
                warn!(%inventory, attempt, candidate = candidate.as_str(), "candidate taken, regenerating");
                continue;
            }

            match self.store.insert(inventory, &candidate).await {
                Ok(()) => return Ok(candidate),
                Err(StoreError::DuplicateCustomId { .. }) => {
                    warn!(
                        %inventory,
                        attempt,
                        candidate = candidate.as_str(),
                        "insert lost a uniqueness race, regenerating"
                    );
                }
                Err(other) => return Err(store_error(other)),
            }
        }

        Err(GenerateError::ExhaustedRetries {
            attempts: self.max_attempts,
        })
    }

    /// Renders the deterministic editor preview for a format.
    pub fn preview(&self, spec: &FormatSpec) -> Result<String, GenerateError> {
        Ok(inventoria_format::preview(spec)?)
    }

    /// Drops the cached generator for a format. Call after an inventory
    /// owner saves a new format version, once the save has committed.
    pub fn invalidate_format(&self, spec: &FormatSpec) -> bool {
        self.cache.invalidate(spec)
    }

    async fn context(&self, inventory: &InventoryId) -> Result<GenerationContext, GenerateError> {
        let count = self
            .store
            .live_count(inventory)
            .await
            .map_err(store_error)?;
        Ok(GenerationContext::new(
            inventory.clone(),
            count,
            self.clock.now(),
        ))
    }
}
