// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use overmark_dom::{Element, NodeFlags, NodeId, Tree};
use overmark_hints::{CommunicationError, Flow, HintMode, Links, absolute_position};
use overmark_hints::resolve::DomOffsets;

/// `n` links spread over nested positioned sections, `per` links per section.
fn gen_page(n: usize, per: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let doc = tree.create_document("https://example.org/");
    tree.register(doc);
    let mut parent = tree.body(doc).unwrap();
    let mut links = Vec::with_capacity(n);
    for i in 0..n {
        if i % per == 0 {
            let section = tree.create_element(doc, Element::new("section")).unwrap();
            tree.append_child(parent, section).unwrap();
            tree.set_flags(section, NodeFlags::POSITIONED);
            tree.set_offset(section, Vec2::new(4.0, 16.0));
            parent = section;
        }
        let href = format!("/item/{i}");
        let a = tree
            .create_element(doc, Element::new("a").with_attribute("href", &href))
            .unwrap();
        tree.append_child(parent, a).unwrap();
        tree.set_offset(a, Vec2::new(0.0, (i % per) as f64 * 18.0));
        links.push(a);
    }
    (tree, links)
}

/// Labels over the home row, shortest first.
fn labels(n: usize) -> Result<Vec<String>, CommunicationError> {
    const KEYS: &[u8] = b"asdfghjkl";
    Ok((0..n)
        .map(|mut i| {
            let mut s = String::new();
            loop {
                s.push(KEYS[i % KEYS.len()] as char);
                i /= KEYS.len();
                if i == 0 {
                    break;
                }
            }
            s
        })
        .collect())
}

fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("absolute_position");
    for &depth in &[1usize, 8, 32] {
        let (tree, links) = gen_page(depth * 4, 4);
        let deepest = *links.last().unwrap();
        group.bench_function(format!("depth{depth}"), |b| {
            b.iter(|| absolute_position(&DomOffsets(&tree), Some(black_box(deepest))));
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    for &n in &[64usize, 512, 2048] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("start_end_n{n}"), |b| {
            b.iter_batched(
                || gen_page(n, 16).0,
                |mut tree| {
                    let mut mode = HintMode::new(labels);
                    let built = mode
                        .start(&mut tree, &mut Links, overmark_hints::Click)
                        .unwrap();
                    mode.end(&mut tree);
                    black_box((built, tree))
                },
                BatchSize::LargeInput,
            );
        });
        group.bench_function(format!("filter_n{n}"), |b| {
            let (mut tree, _) = gen_page(n, 16);
            let mut mode = HintMode::new(labels);
            mode.start(&mut tree, &mut Links, Continue).unwrap();
            b.iter(|| {
                mode.filter(&mut tree, black_box("a"));
                mode.filter(&mut tree, black_box("as"));
                mode.filter(&mut tree, black_box(""))
            });
        });
    }
    group.finish();
}

/// Keeps the session alive so only filtering is measured.
struct Continue;

impl overmark_hints::Executor<Tree> for Continue {
    fn execute(&mut self, _dom: &mut Tree, _node: &NodeId) -> Flow {
        Flow::Continue
    }
}

criterion_group!(benches, bench_position, bench_session);
criterion_main!(benches);
