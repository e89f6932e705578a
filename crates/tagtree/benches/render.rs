//! Benchmarks for tree serialization.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tagtree::{
    ContainerElement, ContentElement, Document, Node, RenderOptions, VoidElement, render_node,
};

/// Build a document with `sections` sections of `items` list items each.
fn wide_document(sections: usize, items: usize) -> Document {
    let mut doc = Document::new().with_lang(Some("en"));
    for i in 0..sections {
        doc.container(
            ContainerElement::new("section").with_id(Some(format!("s{i}"))),
            |section| {
                section.content(ContentElement::new("h2", format!("Section {i}")));
                section.container(ContainerElement::new("ul").with_class("items"), |ul| {
                    for j in 0..items {
                        ul.content(
                            ContentElement::new("li", format!("Item {j}"))
                                .with_attr("data-index", Some(j.to_string())),
                        );
                    }
                });
                section.void(VoidElement::new("hr").with_slash(true));
            },
        );
    }
    doc
}

/// Build a chain of `depth` nested containers.
fn deep_tree(depth: usize) -> Node {
    let mut node = ContainerElement::new("div").with_child(ContentElement::new("span", "leaf"));
    for _ in 0..depth {
        node = ContainerElement::new("div").with_class("nested").with_child(node);
    }
    node.into()
}

fn bench_render_styles(c: &mut Criterion) {
    let doc = wide_document(20, 20);
    let indented = RenderOptions::default();
    let minified = RenderOptions::minified();

    c.bench_function("render_indented_wide", |b| {
        b.iter(|| doc.render_with(&indented));
    });
    c.bench_function("render_minified_wide", |b| {
        b.iter(|| doc.render_with(&minified));
    });
}

fn bench_render_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_deep");

    for depth in [10, 100, 500] {
        let tree = deep_tree(depth);
        let options = RenderOptions::default().with_max_depth(depth + 1);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| render_node(tree, &options));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_styles, bench_render_depth);
criterion_main!(benches);
