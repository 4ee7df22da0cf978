//! Strategy factory and registry.

use crate::binet::ClosedForm;
use crate::bottom_up::BottomUpMemo;
use crate::error::FibError;
use crate::iterative::RollingIterative;
use crate::memo_indexed::IndexedMemo;
use crate::memo_map::AssociativeMemo;
use crate::recursive::NaiveRecursive;
use crate::strategy::Strategy;

/// Factory trait for creating strategy instances by name.
pub trait StrategyFactory {
    /// Create a fresh strategy instance.
    ///
    /// Each call returns a new instance with its own cache, so the cache
    /// lifetime equals the lifetime of the returned box.
    fn create(&self, name: &str) -> Result<Box<dyn Strategy>, FibError>;

    /// List all registered strategy names, in presentation order.
    fn available(&self) -> Vec<&'static str>;
}

/// Default factory over the six built-in strategies.
pub struct DefaultFactory;

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultFactory {
    fn create(&self, name: &str) -> Result<Box<dyn Strategy>, FibError> {
        match name {
            "iterative" => Ok(Box::new(RollingIterative::new())),
            "recursive" => Ok(Box::new(NaiveRecursive::new())),
            "closed-form" | "binet" => Ok(Box::new(ClosedForm::new())),
            "bottom-up" => Ok(Box::new(BottomUpMemo::new())),
            "memo-vec" | "indexed" => Ok(Box::new(IndexedMemo::new())),
            "memo-map" | "associative" => Ok(Box::new(AssociativeMemo::new())),
            _ => Err(FibError::UnknownStrategy(name.to_string())),
        }
    }

    fn available(&self) -> Vec<&'static str> {
        // Presentation order: oracle first, then by complexity class.
        vec![
            "iterative",
            "recursive",
            "closed-form",
            "bottom-up",
            "memo-vec",
            "memo-map",
        ]
    }
}
