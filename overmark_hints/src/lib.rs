// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overmark_hints --heading-base-level=0

//! Overmark Hints: keyboard hint mode for live document trees.
//!
//! ## Overview
//!
//! Hint mode lets a user act on page elements without a pointer. A session
//! labels every candidate element with a short string drawn from a remote label
//! service, narrows the visible labels as the user types, and runs an action on
//! the element whose label was typed in full.
//!
//! The crate does no rendering and no layout. It reads element positions and
//! mutates the document through the [`Dom`] trait, and leaves presentation to
//! CSS classes described by [`HintConfig`].
//!
//! ## Pieces
//!
//! - [`Selector`]: which elements become candidates ([`Links`], [`Clickable`], [`FormFields`], [`Fixed`]).
//! - [`LabelProvider`]: where labels come from; one label per candidate, in candidate order.
//! - [`Executor`]: what happens on an exact match ([`FollowLink`], [`Click`], [`FocusField`]).
//! - [`HintMode`]: the session engine that ties them together and undoes its own DOM changes.
//! - [`absolute_position`]: offset-parent walk used to place label markers.
//!
//! ## Workflow
//!
//! 1) Start: [`HintMode::start`] ends any running session, selects candidates, requests
//!    labels, and builds a marker and a highlight wrapper per candidate.
//! 2) Type: [`HintMode::filter`] with the full typed text after each key. Hints whose
//!    label starts with it stay visible; an exact match runs the executor.
//! 3) End: [`HintMode::end`] (or an executor answering [`Flow::Stop`]) restores every
//!    candidate to its original place and frees the overlay elements.
//!
//! Label comparison ignores case.
//!
//! ## Minimal usage
//!
//! ```
//! use overmark_dom::{Element, Tree};
//! use overmark_hints::{Click, CommunicationError, HintMode, Links};
//!
//! let mut tree = Tree::new();
//! let doc = tree.create_document("https://example.org/");
//! tree.register(doc);
//! let body = tree.body(doc).unwrap();
//! let link = tree
//!     .create_element(doc, Element::new("a").with_attribute("href", "/about"))
//!     .unwrap();
//! tree.append_child(body, link).unwrap();
//!
//! let labels = |n: usize| -> Result<Vec<String>, CommunicationError> {
//!     Ok((0..n).map(|i| format!("{}", (b'a' + i as u8) as char)).collect())
//! };
//! let mut hints = HintMode::new(labels);
//! assert_eq!(hints.start(&mut tree, &mut Links, Click).unwrap(), 1);
//! assert_eq!(tree.parent(link).and_then(|w| tree.parent(w)), Some(body));
//!
//! // Typing the label in full clicks the link and ends the session.
//! assert!(hints.filter(&mut tree, "A"));
//! assert_eq!(tree.clicks(), &[link]);
//! assert_eq!(tree.parent(link), Some(body));
//! ```
//!
//! ## Features
//!
//! - `dom_tree_adapter` (default): implement [`Dom`] for `overmark_dom::Tree`.
//! - `serde`: serialize and deserialize [`HintConfig`].

pub mod adapters;
pub mod config;
pub mod dom;
pub mod execute;
pub mod mode;
pub mod resolve;
pub mod rpc;
pub mod select;
pub mod types;

pub use config::{HintClasses, HintConfig};
pub use dom::{Dom, DomMutationError, DomOp};
pub use execute::{Click, Executor, FocusField, FollowLink};
pub use mode::HintMode;
pub use resolve::{OffsetLookup, absolute_position};
pub use rpc::{CommunicationError, HintController, LabelProvider, PageId};
pub use select::{Clickable, Fixed, FormFields, Links, Selector};
pub use types::{Flow, Hint, MarkerState, WrapperState};
