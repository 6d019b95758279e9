//! The bi-objective k-best ranking engine (phase-2 core): enumerates every
//! feasible solution whose image lies in a given triangle, in non-increasing
//! order of λ·y, until the region's min-profit exceeds the next candidate.
//!
//! Ground truth: spec.md §4.7, grounded on `kp/ranking.hpp` (quality table
//! keyed by scalar value, persistent ref-counted turning-lists) cited in
//! SPEC_FULL.md §3.

use crate::dag::builder::Layer;
use crate::dag::region::BoundedRegion;
use crate::dag::vertex::Vertex;
use crate::real::Real;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::rc::Rc;

/// A turning point: at vertex `at`, the path takes the "other" parent
/// instead of the locally optimal one. Turning-lists are persistent tails:
/// appending a turning creates a new node pointing at the previous list,
/// shared by every path derived from the same prefix (spec.md §4.7).
#[derive(Debug)]
struct TurningNode {
    at: Rc<Vertex>,
    took_one: bool,
    prev: Option<Rc<TurningNode>>,
}

/// A path: a terminal vertex plus an ordered (persistent) list of turnings
/// diverging from the locally optimal subpath.
#[derive(Debug, Clone)]
pub struct Path {
    terminal: Rc<Vertex>,
    turnings: Option<Rc<TurningNode>>,
    value: Real,
}

impl Path {
    fn seed(terminal: Rc<Vertex>) -> Self {
        let value = terminal.profit;
        Path {
            terminal,
            turnings: None,
            value,
        }
    }

    pub fn value(&self) -> Real {
        self.value
    }

    /// Materialises the binary solution (length `n`) this path represents,
    /// per spec.md §4.7 step 3: walk from the root toward layer 0, setting
    /// each variable by whether the weight changed across the edge, taking
    /// the recorded branch at every turning vertex and diffusing through
    /// the unique optimal-value parent elsewhere.
    pub fn materialize(&self, n: usize) -> Vec<bool> {
        let mut decisions = vec![false; n];
        let mut current = Rc::clone(&self.terminal);
        let mut turning = self.turnings.clone();

        for layer in (1..=n).rev() {
            let forced = turning.as_ref().filter(|t| Rc::ptr_eq(&t.at, &current));
            let took_one = if let Some(t) = forced {
                let took = t.took_one;
                turning = t.prev.clone();
                took
            } else {
                match (&current.zero_parent, &current.one_parent) {
                    (Some(zp), Some(op)) => op.profit >= zp.profit,
                    (None, Some(_)) => true,
                    _ => false,
                }
            };
            decisions[layer - 1] = took_one;
            current = if took_one {
                Rc::clone(current.one_parent.as_ref().unwrap())
            } else {
                Rc::clone(current.zero_parent.as_ref().unwrap())
            };
        }
        decisions
    }

    /// Derives new paths at every branching vertex along this path whose
    /// "other" parent gives a lower but still relevant value.
    fn derive(&self) -> Vec<Path> {
        let mut derived = Vec::new();
        let mut current = Rc::clone(&self.terminal);
        let mut turning = self.turnings.clone();

        loop {
            let forced = turning.as_ref().filter(|t| Rc::ptr_eq(&t.at, &current)).cloned();
            let (optimal_is_one, alt_value) = match (&current.zero_parent, &current.one_parent) {
                (Some(zp), Some(op)) => {
                    let optimal_is_one = op.profit >= zp.profit;
                    let alt = if optimal_is_one { zp.profit } else { op.profit };
                    (optimal_is_one, Some(alt))
                }
                _ => (current.one_parent.is_some(), None),
            };

            if let Some(alt) = alt_value {
                let new_turning = Rc::new(TurningNode {
                    at: Rc::clone(&current),
                    took_one: !optimal_is_one,
                    prev: self.turnings.clone(),
                });
                let delta = self.value - current.profit;
                derived.push(Path {
                    terminal: Rc::clone(&self.terminal),
                    turnings: Some(new_turning),
                    value: delta + alt,
                });
            }

            current = match (forced, optimal_is_one) {
                (Some(t), _) => {
                    turning = t.prev.clone();
                    if t.took_one {
                        Rc::clone(current.one_parent.as_ref().unwrap())
                    } else {
                        Rc::clone(current.zero_parent.as_ref().unwrap())
                    }
                }
                (None, true) => Rc::clone(current.one_parent.as_ref().unwrap()),
                (None, false) => match &current.zero_parent {
                    Some(zp) => Rc::clone(zp),
                    None => break,
                },
            };
            if current.layer == 0 {
                break;
            }
        }
        derived
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl Eq for Path {}
impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.partial_cmp(&other.value).unwrap()
    }
}

/// Quality table: scalar value bucketed in decreasing order, each bucket
/// holding every path with that value.
struct QualityTable {
    // BTreeMap over a fixed-point key since `Real` is not `Ord` in the
    // total sense needed by a map key; values are sorted and compared via
    // f64 bit patterns, which preserves ordering for finite values.
    buckets: BTreeMap<u64, Vec<Path>>,
}

fn key_of(value: Real) -> u64 {
    // Monotone f64 -> u64 mapping (flips sign bit / inverts for negatives)
    // so that BTreeMap's natural ascending order matches `Real`'s order.
    let bits = value.value().to_bits();
    if value.value() >= 0.0 {
        bits ^ 0x8000_0000_0000_0000
    } else {
        !bits
    }
}

impl QualityTable {
    fn new() -> Self {
        QualityTable { buckets: BTreeMap::new() }
    }

    fn push(&mut self, path: Path) {
        self.buckets.entry(key_of(path.value())).or_default().push(path);
    }

    fn pop_max(&mut self) -> Option<Path> {
        let (&key, bucket) = self.buckets.iter_mut().next_back()?;
        let path = bucket.pop();
        if bucket.is_empty() {
            self.buckets.remove(&key);
        }
        path
    }

    fn max_value(&self) -> Option<Real> {
        self.buckets.keys().next_back().map(|_| {
            self.buckets
                .values()
                .next_back()
                .and_then(|b| b.last())
                .map(|p| p.value())
                .unwrap()
        })
    }

    /// Discards every bucket below `threshold` (garbage collection on
    /// region improvement, spec.md §4.7).
    fn collect_below(&mut self, threshold: Real) {
        self.buckets.retain(|_, bucket| bucket.iter().any(|p| p.value() >= threshold));
        for bucket in self.buckets.values_mut() {
            bucket.retain(|p| p.value() >= threshold);
        }
    }
}

/// Runs the ranking engine over `layers`, seeding one optimal path per
/// terminal-layer vertex whose profit meets `region`'s threshold, and
/// enumerating in non-increasing value until the table empties or the top
/// key drops below `region.min_profit()`. `n` is the number of DAG layers
/// (item count in the reduced view).
pub fn rank(layers: &[Layer], region: &mut BoundedRegion, n: usize) -> Vec<Vec<bool>> {
    let mut table = QualityTable::new();
    if let Some(terminal_layer) = layers.last() {
        for v in terminal_layer {
            if v.profit >= region.min_profit() {
                table.push(Path::seed(Rc::clone(v)));
            }
        }
    }

    let mut output = Vec::new();
    while let Some(top) = table.max_value() {
        if top < region.min_profit() {
            break;
        }
        let Some(path) = table.pop_max() else { break };

        let solution = path.materialize(n);
        output.push(solution);

        for derived in path.derive() {
            if derived.value() >= region.min_profit() {
                table.push(derived);
            }
        }
        table.collect_below(region.min_profit());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::builder::DagBuilder;
    use crate::instance::{Instance, Item};
    use crate::vector::CostVector;
    use crate::views::SortableView;

    #[test]
    fn ranking_enumerates_at_least_the_optimum() {
        let items = vec![
            Item::new(0, CostVector::from_vec(vec![Real::new(10.0), Real::new(0.0)]), Real::new(2.0)),
            Item::new(1, CostVector::from_vec(vec![Real::new(6.0), Real::new(0.0)]), Real::new(3.0)),
        ];
        let inst = Instance::new(items, Real::new(5.0), 2).unwrap();
        let mut view = SortableView::new(&inst, 0);
        view.sort_by_decreasing_efficiency();
        let mut region = BoundedRegion::half_line(Real::ZERO);
        let layers = DagBuilder::build(&view, &region);
        let solutions = rank(&layers, &mut region, view.size());
        assert!(!solutions.is_empty());
    }
}
