//! Factory contract tests.

mod construction_tests;
mod kinds_tests;
mod misbehaving_tests;
