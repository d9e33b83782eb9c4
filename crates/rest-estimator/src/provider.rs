//! Where a regressor comes from, and whether it is reused.

use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::model::{LinearSleepModel, SleepRegressor};

/// Location of a model asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelSource {
    /// The asset compiled into the binary.
    #[default]
    Bundled,
    /// A JSON asset on disk.
    File(PathBuf),
}

/// How the estimator obtains its model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelConfiguration {
    pub source: ModelSource,
    /// Reuse the first successfully loaded model.
    pub cache: bool,
}

impl ModelConfiguration {
    pub fn bundled() -> Self {
        Self::default()
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ModelSource::File(path.into()),
            cache: false,
        }
    }

    #[must_use]
    pub fn cached(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Build the provider this configuration describes.
    pub fn into_provider(self) -> Box<dyn ModelProvider> {
        let assets = AssetProvider::new(self.source);
        if self.cache {
            Box::new(CachedProvider::new(assets))
        } else {
            Box::new(assets)
        }
    }
}

/// Supplies a regressor for one computation.
pub trait ModelProvider: Send + Sync + Debug {
    /// # Errors
    ///
    /// Any [`ModelError`](crate::ModelError) raised while loading.
    fn load(&self) -> Result<Arc<dyn SleepRegressor>>;
}

/// Loads the asset afresh on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetProvider {
    source: ModelSource,
}

impl AssetProvider {
    pub fn new(source: ModelSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &ModelSource {
        &self.source
    }
}

impl ModelProvider for AssetProvider {
    fn load(&self) -> Result<Arc<dyn SleepRegressor>> {
        let _span = tracing::debug_span!("model_load", source = ?self.source).entered();
        let model = match &self.source {
            ModelSource::Bundled => LinearSleepModel::bundled()?,
            ModelSource::File(path) => LinearSleepModel::from_path(path)?,
        };
        Ok(Arc::new(model))
    }
}

/// Memoizes the first successful load of an inner provider.
///
/// Failures are not cached: the next call loads again.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    slot: Mutex<Option<Arc<dyn SleepRegressor>>>,
}

impl<P: ModelProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            slot: Mutex::new(None),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<P: ModelProvider> ModelProvider for CachedProvider<P> {
    fn load(&self) -> Result<Arc<dyn SleepRegressor>> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }
        let model = self.inner.load()?;
        *slot = Some(Arc::clone(&model));
        tracing::debug!("model cached");
        Ok(model)
    }
}
