// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overmark_page --heading-base-level=0

//! Overmark Page: the per-page surface a browser controller talks to.
//!
//! ## Overview
//!
//! One [`PageHost`] lives next to each page's documents. It exposes the page's
//! scroll state as named integer properties ([`PageProperty`]), follows focus
//! across the main document and the frames the user focuses into, and tells
//! the controller about vertical scrolling and input focus through
//! [`PageSignal`]s. A [`RequestGate`] asks the controller whether outgoing
//! requests are blocked.
//!
//! Hint mode itself lives in `overmark_hints`; documents reached by focus are
//! registered with the [`Dom`](overmark_hints::Dom) so hint selectors see them.
//!
//! ## Scroll target
//!
//! Keyboard scrolling should move whatever actually scrolls for the focused
//! element, which is often an inner pane rather than the body. See
//! [`scroll_target`].
//!
//! ## Minimal usage
//!
//! ```
//! use overmark_dom::Tree;
//! use overmark_hints::PageId;
//! use overmark_page::{PageHost, PageProperty, PageSignal};
//!
//! let mut tree = Tree::new();
//! let doc = tree.create_document("https://example.org/");
//!
//! let mut host: PageHost<Tree, Vec<PageSignal>> = PageHost::new(PageId(1), Vec::new());
//! host.document_loaded(&mut tree, doc);
//!
//! let prop: PageProperty = "ScrollTop".parse().unwrap();
//! host.set(&mut tree, prop, 120).unwrap();
//! host.poll(&tree);
//! assert_eq!(
//!     host.sink().last(),
//!     Some(&PageSignal::VerticalPositionChanged { scroll_top: 120, scroll_height: 0 })
//! );
//! ```

mod gate;
mod host;
mod property;

pub use gate::{RequestFilter, RequestGate};
pub use host::{POLL_INTERVAL, PageHost, PageSignal, SignalSink, scroll_target};
pub use property::{PageError, PageProperty};
