//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural
//! principles:
//! - console-core stays free of UI-framework dependencies, in both its
//!   sources and its manifest
//!
//! These tests are designed to catch violations early in the development
//! cycle.

#![allow(dead_code)]

pub fn placeholder() {
    // Placeholder to make this a valid library
}
