//! Particle outlines for search ranges and containers.

use stash_core::{BlockPos, DimensionId, Vec3};

use crate::feedback::{FeedbackSink, Particle, ParticleKind};

/// Intervals per outlined edge; each edge gets `EDGE_INTERVALS + 1` particles.
pub const EDGE_INTERVALS: u32 = 8;

/// The 12 edges of the box spanned by `from` and `to`.
pub fn cube_edges(from: Vec3, to: Vec3) -> [(Vec3, Vec3); 12] {
    let (dx, dy, dz) = (to.x - from.x, to.y - from.y, to.z - from.z);
    let at = |x: f64, y: f64, z: f64| Vec3::new(from.x + x, from.y + y, from.z + z);

    let origin = at(0.0, 0.0, 0.0);
    let x = at(dx, 0.0, 0.0);
    let y = at(0.0, dy, 0.0);
    let z = at(0.0, 0.0, dz);
    let xy = at(dx, dy, 0.0);
    let xz = at(dx, 0.0, dz);
    let yz = at(0.0, dy, dz);

    [
        (origin, x),
        (origin, y),
        (origin, z),
        (x, xy),
        (x, xz),
        (y, xy),
        (y, yz),
        (z, xz),
        (z, yz),
        (to, yz),
        (to, xz),
        (to, xy),
    ]
}

/// Outline the box between `from` and `to` with end rod particles.
pub fn highlight_range<F>(sink: &mut F, dimension: DimensionId, from: Vec3, to: Vec3)
where
    F: FeedbackSink + ?Sized,
{
    for (start, end) in cube_edges(from, to) {
        highlight_edge(sink, dimension, start, end);
    }
}

fn highlight_edge<F>(sink: &mut F, dimension: DimensionId, start: Vec3, end: Vec3)
where
    F: FeedbackSink + ?Sized,
{
    let steps = f64::from(EDGE_INTERVALS);
    let step = Vec3::new(
        (end.x - start.x) / steps,
        (end.y - start.y) / steps,
        (end.z - start.z) / steps,
    );
    let mut location = start;
    for _ in 0..=EDGE_INTERVALS {
        sink.particle(Particle {
            kind: ParticleKind::EndRod,
            dimension,
            location,
        });
        location = location + step;
    }
}

/// Mark a container block with four flames around its sides.
pub fn highlight_container<F>(sink: &mut F, dimension: DimensionId, pos: BlockPos)
where
    F: FeedbackSink + ?Sized,
{
    let corner = pos.location();
    let offsets = [(0.55, 0.0), (0.0, 0.55), (0.55, 1.0), (1.0, 0.55)];
    for (x, z) in offsets {
        sink.particle(Particle {
            kind: ParticleKind::BlueFlame,
            dimension,
            location: corner + Vec3::new(x, 0.5, z),
        });
    }
}
