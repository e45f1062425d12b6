//! Configuration for the dumper.

use crate::visit::VisitPolicy;

/// Configuration for a [`Dumper`](crate::Dumper).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpConfig {
    /// Mark every repeat occurrence of a tracked value, not only cycles.
    ///
    /// When false, only ancestors on the current path are reported as
    /// duplicates and shared values are rendered in full at each site.
    pub collapse_duplicates: bool,
}

impl DumpConfig {
    /// Creates a configuration that collapses all repeat occurrences.
    #[must_use]
    pub fn collapsed() -> Self {
        Self {
            collapse_duplicates: true,
        }
    }

    /// Builder method to set duplicate collapsing.
    #[must_use]
    pub fn with_collapse_duplicates(mut self, collapse: bool) -> Self {
        self.collapse_duplicates = collapse;
        self
    }

    /// Returns the visit-tracking policy this configuration selects.
    #[must_use]
    pub fn visit_policy(&self) -> VisitPolicy {
        if self.collapse_duplicates {
            VisitPolicy::Collapse
        } else {
            VisitPolicy::Path
        }
    }
}
