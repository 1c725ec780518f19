//! Parameter storage using Arc for clone-friendly builders.

use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A clone-friendly bound value.
///
/// Builders can be cloned and compiled repeatedly without copying parameter
/// values; the same `Param` may appear several times in one compiled
/// argument list.
#[derive(Clone)]
pub struct Param(pub(crate) Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }

    /// Whether both params share the same underlying value.
    pub fn ptr_eq(&self, other: &Param) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // ToSql requires Debug, so show the value itself.
        std::fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: ToSql + Send + Sync + 'static> From<Arc<T>> for Param {
    fn from(value: Arc<T>) -> Self {
        Param(value)
    }
}
