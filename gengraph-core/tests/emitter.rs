//! Tests for streaming graph emission through the public API.

use gengraph_core::{GraphEmitter, GraphEmitterBuilder, VertexCount, Weight};
use gengraph_test_support::listing::{Listing, parse_listing};
use gengraph_test_support::tracing::RecordingLayer;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

fn emit_listing(count: usize, seed: u64) -> (String, Listing) {
    let mut emitter = GraphEmitterBuilder::new()
        .with_seed(seed)
        .build(VertexCount::new(count));
    let mut buffer = Vec::new();
    emitter
        .emit(&mut buffer)
        .expect("emitting into a Vec must succeed");
    let text = String::from_utf8(buffer).expect("listing must be UTF-8");
    let listing = parse_listing(&text).expect("listing must follow the grammar");
    (text, listing)
}

#[rstest]
#[case::empty(0)]
#[case::single(1)]
fn trivial_vertex_counts_emit_only_the_header(#[case] count: usize) {
    let (text, listing) = emit_listing(count, 5);
    assert_eq!(text, format!("size {count}\ndirected false\n"));
    assert!(listing.edges.is_empty());
}

#[rstest]
fn three_vertices_draw_from_the_three_pairs() {
    for seed in 0..32 {
        let (text, listing) = emit_listing(3, seed);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("size 3"));
        assert_eq!(lines.next(), Some("directed false"));
        assert!(listing.edges.len() <= 3);
        for edge in &listing.edges {
            assert!(matches!(
                (edge.source, edge.target),
                (0, 1) | (0, 2) | (1, 2)
            ));
        }
        listing.check_generated().expect("listing invariants must hold");
    }
}

#[rstest]
fn edge_density_is_near_one_half() {
    let (_, listing) = emit_listing(200, 2024);
    let pairs = listing.pair_count();
    let edges = u128::try_from(listing.edges.len()).expect("edge count fits in u128");
    // 19,900 fair coin flips; a 5% band is over ten standard deviations wide.
    assert!(edges * 100 > pairs * 45, "too few edges: {edges} of {pairs}");
    assert!(edges * 100 < pairs * 55, "too many edges: {edges} of {pairs}");
}

#[rstest]
fn every_weight_in_range_is_reachable() {
    let (_, listing) = emit_listing(60, 99);
    let mut seen = [false; 11];
    for edge in &listing.edges {
        let index = usize::try_from(edge.weight).expect("weight fits in usize");
        if let Some(slot) = seen.get_mut(index) {
            *slot = true;
        }
    }
    for weight in Weight::MIN..=Weight::MAX {
        assert!(
            seen.get(usize::from(weight)).copied().unwrap_or(false),
            "weight {weight} never drawn"
        );
    }
}

#[rstest]
fn edges_iterator_matches_emitted_listing() {
    let vertices = VertexCount::new(12);
    let mut emitter = GraphEmitter::new(vertices, SmallRng::seed_from_u64(8));
    let drawn: Vec<(usize, usize, u64)> = emitter
        .edges()
        .map(|edge| (edge.source(), edge.target(), u64::from(edge.weight().get())))
        .collect();

    let (_, listing) = emit_listing(12, 8);
    let listed: Vec<(usize, usize, u64)> = listing
        .edges
        .iter()
        .map(|edge| (edge.source, edge.target, edge.weight))
        .collect();
    assert_eq!(drawn, listed);
}

#[rstest]
fn emit_records_span_fields() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let mut emitter = GraphEmitter::new(VertexCount::new(9), SmallRng::seed_from_u64(3));
    let mut buffer = Vec::new();
    let summary = tracing::subscriber::with_default(subscriber, || emitter.emit(&mut buffer))
        .expect("emit must succeed");

    let span = layer.span("core.emit").expect("core.emit span must exist");
    assert_eq!(span.field("vertices"), Some("9"));
    assert_eq!(span.field("pairs"), Some("36"));
    assert_eq!(span.field("edges"), Some(summary.edges.to_string().as_str()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_listings_satisfy_invariants(count in 0_usize..48, seed in any::<u64>()) {
        let (text, listing) = emit_listing(count, seed);
        let mut lines = text.lines();
        let size_line = format!("size {count}");
        prop_assert_eq!(lines.next(), Some(size_line.as_str()));
        prop_assert_eq!(lines.next(), Some("directed false"));
        prop_assert_eq!(listing.vertices, count);
        prop_assert!(listing.check_generated().is_ok(), "{:?}", listing.check_generated());
        let edges = u128::try_from(listing.edges.len()).unwrap_or(u128::MAX);
        prop_assert!(edges <= VertexCount::new(count).pair_count());
    }

    #[test]
    fn seeded_listings_are_reproducible(count in 0_usize..32, seed in any::<u64>()) {
        let (first, _) = emit_listing(count, seed);
        let (second, _) = emit_listing(count, seed);
        prop_assert_eq!(first, second);
    }
}
