//! Unit tests for the `fieldpath` crate.

mod matching_tests;
