//! Contract tests for type_check component
//!
//! These tests verify the classifier and predicate library against the
//! documented resolution order and predicate contracts.


mod object_kind_tests;
mod predicate_catalog_tests;
mod scenario_tests;
mod tag_uniqueness_tests;
