//! Unit tests for cyclebuf modules
//!
//! These tests cover the container, the capability contract, and the
//! command-history consumer without any I/O.

mod test_collection;
mod test_history;
