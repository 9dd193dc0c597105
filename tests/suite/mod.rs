//! Integration test suite modules.

mod contact_flow;
mod navigation;
