//! # Trace Unit Tests
//!
//! Unit tests for the pipeline trace table writer.
