use std::sync::LazyLock;

use super::{Segment, SegmentKind};

/// Number of segments on a standard board: 20 singles, 20 doubles,
/// 20 trebles, outer bull and double bull.
pub const CATALOG_SIZE: usize = 62;

static CATALOG: LazyLock<Vec<Segment>> = LazyLock::new(|| {
    let mut segments = Vec::with_capacity(CATALOG_SIZE);
    segments.extend((1..=20).map(Segment::single));
    segments.extend((1..=20).map(Segment::double));
    segments.extend((1..=20).map(Segment::treble));
    segments.push(Segment::outer_bull());
    segments.push(Segment::double_bull());
    segments
});

/// All segments of the board, in the order singles 1-20, doubles 1-20,
/// trebles 1-20, outer bull, double bull.
pub fn catalog() -> &'static [Segment] {
    &CATALOG
}

/// Segments of a given kind, in catalog order
pub fn segments_of(kind: SegmentKind) -> impl Iterator<Item = &'static Segment> {
    catalog().iter().filter(move |s| s.kind == kind)
}
