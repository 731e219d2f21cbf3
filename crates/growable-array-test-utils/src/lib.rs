// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for growable-array.
//!
//! Instrumented element types that record every construction and every
//! drop, and can be told to fail while being cloned.
//!
//! ## License
//!
//! GPL-3.0-only

mod tracked;

pub use tracked::{DropCounter, Tracked};
