//! Facade execution tests.

mod execution_tests;
