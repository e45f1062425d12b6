//! Integration tests for Layer 0: Foundation
//!
//! Tests for the value model: printed forms, identities, composites,
//! lazy sequences, and errors.
