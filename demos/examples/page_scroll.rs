// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page host basics.
//!
//! Load a document, follow focus into a scrolling pane, drive the scroll
//! properties by name, poll for signals, and gate a few requests.
//!
//! Run:
//! - `cargo run -p overmark_demos --example page_scroll`

use kurbo::Size;
use overmark_dom::{Element, NodeFlags, Tree};
use overmark_hints::{CommunicationError, PageId};
use overmark_page::{POLL_INTERVAL, PageHost, PageProperty, PageSignal, RequestGate};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = Tree::new();
    let doc = tree.create_document("https://example.org/mail");
    let body = tree.body(doc).unwrap();
    tree.set_scroll_size(body, Size::new(1024.0, 768.0));
    let pane = tree.create_element(doc, Element::new("div")).unwrap();
    tree.append_child(body, pane).unwrap();
    tree.set_flags(pane, NodeFlags::POSITIONED);
    tree.set_scroll_size(pane, Size::new(1024.0, 9000.0));
    let search = tree.create_element(doc, Element::new("input")).unwrap();
    tree.append_child(pane, search).unwrap();

    let mut host: PageHost<Tree, Vec<PageSignal>> = PageHost::new(PageId(7), Vec::new());
    host.document_loaded(&mut tree, doc);
    tree.focus(search).unwrap();
    host.focus_changed(&mut tree, &doc);
    println!("== Focus: scroll target is the pane: {} ==", host.scroll_target() == Some(&pane));

    for (name, value) in [("ScrollTop", 200), ("ScrollTargetTop", 1500), ("ScrollHeight", 1)] {
        let result = name
            .parse::<PageProperty>()
            .and_then(|p| host.set(&mut tree, p, value));
        println!("  set {name} = {value}: {result:?}");
    }
    for p in PageProperty::ALL {
        println!("  {p} = {:?}", host.get(&tree, p));
    }

    println!("== Poll (every {POLL_INTERVAL:?}) ==");
    host.poll(&tree);
    for signal in host.sink() {
        println!("  {signal:?}");
    }

    let mut gate = RequestGate::new(|uri: &str| -> Result<bool, CommunicationError> {
        if uri.starts_with("https://tracker.") {
            return Err(CommunicationError::call("Blocks", "controller busy"));
        }
        Ok(uri.contains("/ads/"))
    });
    println!("== Requests ==");
    for uri in [
        "https://example.org/mail/inbox.json",
        "https://example.org/ads/banner.png",
        "https://tracker.example/pixel",
    ] {
        println!("  {uri}: cancel = {}", gate.should_cancel(uri));
    }
}
