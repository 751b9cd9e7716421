use dashmap::DashMap;
use inventoria_core::FormatSpec;
use inventoria_format::{compile, CompileError, Generator};
use std::sync::Arc;

/// Process-wide cache of compiled generators, addressed by the format's
/// content hash.
///
/// Read-mostly: an inventory's format changes only when its owner saves a
/// new version, at which point [`invalidate`](Self::invalidate) must run so
/// generation requests issued after the save see the fresh compilation.
/// Owned by the orchestrator rather than living in an ambient global.
#[derive(Debug, Default)]
pub struct GeneratorCache {
    inner: DashMap<u64, Arc<Generator>>,
}

impl GeneratorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached generator for the format, compiling and caching
    /// it on first sight. Compilation failures are not cached.
    pub fn get_or_compile(&self, spec: &FormatSpec) -> Result<Arc<Generator>, CompileError> {
        let key = spec.content_hash();
        if let Some(generator) = self.inner.get(&key) {
            return Ok(Arc::clone(&generator));
        }
        let generator = Arc::new(compile(spec)?);
        self.inner.insert(key, Arc::clone(&generator));
        Ok(generator)
    }

    /// Drops the cached generator for the format. Returns whether an entry
    /// was present. In-flight renders holding the old `Arc` finish with it;
    /// requests issued afterwards recompile.
    pub fn invalidate(&self, spec: &FormatSpec) -> bool {
        self.inner.remove(&spec.content_hash()).is_some()
    }

    /// Number of cached generators.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventoria_core::format::{ElementDescriptor, ElementType};

    fn spec(prefix: &str) -> FormatSpec {
        FormatSpec::new(vec![
            ElementDescriptor::fixed_text(prefix),
            ElementDescriptor::new(ElementType::Sequence),
        ])
    }

    #[test]
    fn caches_by_content() {
        let cache = GeneratorCache::new();

        let first = cache.get_or_compile(&spec("A-")).unwrap();
        let second = cache.get_or_compile(&spec("A-")).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let other = cache.get_or_compile(&spec("B-")).unwrap();
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidate_forces_recompile() {
        let cache = GeneratorCache::new();

        let first = cache.get_or_compile(&spec("A-")).unwrap();
        assert!(cache.invalidate(&spec("A-")));
        assert!(!cache.invalidate(&spec("A-")));

        let second = cache.get_or_compile(&spec("A-")).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn compile_failures_are_not_cached() {
        let cache = GeneratorCache::new();
        let invalid = FormatSpec::new(vec![]);

        assert!(cache.get_or_compile(&invalid).is_err());
        assert!(cache.is_empty());
    }
}
