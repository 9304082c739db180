//! Ordered strategy registry.
//!
//! Registration order is execution order is report order.

use crate::engine::ScanEngine;
use crate::engine::external::EngineScan;
use crate::engine::first_byte::FirstByteScan;
use crate::engine::lanes::LaneScan;
use crate::engine::nested::NestedScan;
use crate::engine::noop::NoopScan;
use crate::pattern::Pattern;

/// Immutable pairing of a display name and a strategy.
pub struct StrategyDescriptor {
    name: String,
    engine: Box<dyn ScanEngine>,
    proxy: bool,
}

impl StrategyDescriptor {
    /// Registers `engine` under `name`.
    pub fn new(name: impl Into<String>, engine: Box<dyn ScanEngine>) -> Self {
        Self {
            name: name.into(),
            engine,
            proxy: false,
        }
    }

    /// Marks the strategy's hit count as a proxy metric rather than a true
    /// occurrence count, exempting it from cross-checking.
    pub fn proxy(mut self) -> Self {
        self.proxy = true;
        self
    }

    /// The strategy's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The strategy implementation.
    pub fn engine(&self) -> &dyn ScanEngine {
        &*self.engine
    }

    /// Whether the hit count is a proxy metric.
    pub fn is_proxy(&self) -> bool {
        self.proxy
    }
}

/// Builds the default registry for `pattern`.
///
/// Order mirrors the reference harness: the first-byte cost floor, the
/// production engine, the two nested scans, and the placeholder.
pub fn default_registry(pattern: &Pattern) -> Vec<StrategyDescriptor> {
    vec![
        StrategyDescriptor::new("first-byte", Box::new(FirstByteScan::new(pattern))).proxy(),
        StrategyDescriptor::new("regex", Box::new(EngineScan::new(pattern))),
        StrategyDescriptor::new("nested", Box::new(NestedScan::new(pattern))),
        StrategyDescriptor::new("nested-lanes", Box::new(LaneScan::new(pattern))),
        StrategyDescriptor::new("noop", Box::new(NoopScan)).proxy(),
    ]
}
