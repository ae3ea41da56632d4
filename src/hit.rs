//! Finding polygon vertices under the finger.
//!
//! Hit-testing happens in pixel space because the tolerance of a tap is
//! a screen distance. A [`VertexIndex`] is therefore only valid for the
//! viewport it was created with.

use std::cmp::Ordering;
use rstar::RTree;
use rstar::primitives::GeomWithData;
use smallvec::SmallVec;
use crate::viewport::Viewport;
use crate::world::Point;


//------------ VertexIndex ---------------------------------------------------

/// A vertex stored in the index: its pixel position and index in the
/// polygon.
type Vertex = GeomWithData<[f64; 2], usize>;

/// A spatial index over the projected vertices of a polygon.
pub struct VertexIndex {
    tree: RTree<Vertex>,
}

impl VertexIndex {
    /// Creates an index for `points` as shown in `viewport`.
    pub fn new(points: &[Point], viewport: &Viewport) -> Self {
        VertexIndex {
            tree: RTree::bulk_load(
                points.iter().enumerate().map(|(idx, point)| {
                    let pixel = viewport.point_for_coordinate(*point);
                    Vertex::new([pixel.x, pixel.y], idx)
                }).collect()
            )
        }
    }

    /// Returns the number of indexed vertices.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the vertex closest to `pixel` if within `tolerance` pixels.
    pub fn nearest_within(
        &self, pixel: kurbo::Point, tolerance: f64
    ) -> Option<usize> {
        self.all_within(pixel, tolerance).first().copied()
    }

    /// Returns all vertices within `tolerance` pixels, closest first.
    pub fn all_within(
        &self, pixel: kurbo::Point, tolerance: f64
    ) -> SmallVec<[usize; 4]> {
        let query = [pixel.x, pixel.y];
        let mut hits: SmallVec<[(f64, usize); 4]> = self.tree
            .locate_within_distance(query, tolerance * tolerance)
            .map(|vertex| {
                let [x, y] = *vertex.geom();
                let dist = (x - query[0]).powi(2) + (y - query[1]).powi(2);
                (dist, vertex.data)
            })
            .collect();
        hits.sort_by(|left, right| {
            left.0.partial_cmp(&right.0).unwrap_or(Ordering::Equal)
                .then(left.1.cmp(&right.1))
        });
        hits.into_iter().map(|(_, idx)| idx).collect()
    }
}


//============ Tests =========================================================
