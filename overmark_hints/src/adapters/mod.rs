// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Dom`](crate::dom::Dom) implementations for other Overmark crates.
//!
//! Enabled via feature flags.

#[cfg(feature = "dom_tree_adapter")]
pub mod dom_tree;
