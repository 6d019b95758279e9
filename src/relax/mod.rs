//! Relaxations: cheap over-estimates used to prune the DP DAG and the A*
//! search. Ground truth: spec.md §4.3.

pub mod bound_set_relax;
pub mod composite;
pub mod mt_linear;

pub use bound_set_relax::BoundSetRelaxation;
pub use composite::CompositeRelaxation;
pub use mt_linear::{LinearRelaxResult, MtLinearRelaxation};
