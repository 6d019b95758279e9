//! Problem views: read-only re-projections of an `Instance` used by the
//! relaxations, fixings and DAG builder so they never need to know whether
//! they are looking at the original instance or a scalarised / restricted
//! derivative of it.
//!
//! Ground truth: spec.md §4.2. All views expose the same surface
//! `{ size, capacity, objectives, item, efficiency, source_index }`.

pub mod order;
pub mod sortable;
pub mod subset;
pub mod weighted_sum;

pub use order::{OrderName, OrderedView};
pub use sortable::SortableView;
pub use subset::SubsetView;
pub use weighted_sum::WeightedSumView;

use crate::real::Real;

/// The read-only surface shared by every problem view (spec.md §4.2).
pub trait ProblemView {
    fn size(&self) -> usize;
    fn capacity(&self) -> Real;
    /// Scalar cost of the view-local item `i` (the projection's single
    /// objective, e.g. λ·cost for a weighted-sum view).
    fn cost(&self, i: usize) -> Real;
    fn weight(&self, i: usize) -> Real;
    /// Efficiency of view-local item `i`: `cost(i) / weight(i)`.
    fn efficiency(&self, i: usize) -> Real {
        let w = self.weight(i);
        if w == Real::ZERO {
            if self.cost(i) == Real::ZERO {
                Real::ZERO
            } else {
                Real::infinity()
            }
        } else {
            self.cost(i) / w
        }
    }
    /// Maps a view-local index back to the original instance's item index.
    fn source_index(&self, i: usize) -> usize;
}
