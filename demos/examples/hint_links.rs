// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hint the links of a small page and follow one.
//!
//! Starts a session, types a label one key at a time, and lets a stand-in
//! controller receive the resolved link target.
//!
//! Run:
//! - `cargo run -p overmark_demos --example hint_links`
//! - `RUST_LOG=debug cargo run -p overmark_demos --example hint_links` to see the engine's logs

use kurbo::Vec2;
use overmark_dom::{Element, NodeFlags, NodeId, Tree};
use overmark_hints::{
    CommunicationError, FollowLink, HintController, HintMode, Links, PageId, WrapperState,
};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Prints each target and asks to leave hint mode.
struct Controller;

impl HintController for Controller {
    fn hint_call(&mut self, page: PageId, target: &Url) -> Result<bool, CommunicationError> {
        println!("  controller: page {} follows {target}", page.0);
        Ok(false)
    }
}

fn link(tree: &mut Tree, parent: NodeId, href: &str, offset: Vec2) -> NodeId {
    let doc = tree.owner_document(parent).unwrap();
    let a = tree
        .create_element(doc, Element::new("a").with_attribute("href", href))
        .unwrap();
    tree.append_child(parent, a).unwrap();
    tree.set_offset(a, offset);
    a
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = Tree::new();
    let doc = tree.create_document("https://example.org/docs/");
    tree.register(doc);
    let body = tree.body(doc).unwrap();
    let nav = tree.create_element(doc, Element::new("nav")).unwrap();
    tree.append_child(body, nav).unwrap();
    tree.set_flags(nav, NodeFlags::POSITIONED);
    tree.set_offset(nav, Vec2::new(0.0, 40.0));
    link(&mut tree, nav, "intro.html", Vec2::new(8.0, 0.0));
    link(&mut tree, nav, "guide/", Vec2::new(80.0, 0.0));
    link(&mut tree, nav, "/api", Vec2::new(160.0, 0.0));
    link(&mut tree, body, "https://other.example/", Vec2::new(8.0, 400.0));
    let nodes_before = tree.len();
    tracing::info!(nodes = nodes_before, "page built");

    let labels = |n: usize| -> Result<Vec<String>, CommunicationError> {
        Ok(["fa", "fs", "d", "ja"].into_iter().take(n).map(String::from).collect())
    };
    let mut hints = HintMode::new(labels);
    let built = hints
        .start(&mut tree, &mut Links, FollowLink::new(PageId(1), Controller))
        .unwrap();
    println!("== Started: {built} hints ==");
    for hint in hints.hints() {
        println!(
            "  {:>3} -> {:?} at {:?}",
            hint.label(),
            tree.attribute(*hint.candidate(), "href").unwrap_or_default(),
            tree.attribute(*hint.marker(), "style").unwrap_or_default(),
        );
    }

    for typed in ["f", "fs"] {
        let ended = hints.filter(&mut tree, typed);
        let highlighted: Vec<_> = hints
            .hints()
            .filter(|h| h.wrapper_state() == WrapperState::Highlighted)
            .map(|h| h.label().to_owned())
            .collect();
        println!("== Typed {typed:?}: highlighted {highlighted:?}, ended: {ended} ==");
    }

    assert!(!hints.is_active());
    assert_eq!(tree.len(), nodes_before, "every overlay node was freed");
    println!("== Done: document restored ==");
}
