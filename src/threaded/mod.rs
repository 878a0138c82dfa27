//! Partitioned multipliers running on the rayon worker pool.
//!
//! Both strategies split the output into disjoint regions, hand each
//! worker exclusive mutable ownership of its region, and return only
//! after every work unit has completed. No lock guards the shared result:
//! write disjointness is enforced by construction rather than maintained
//! as a caller invariant.
//!
//! Available strategies:
//! - `row`: one work unit per output row (n units)
//! - `element`: one work unit per output element (n² units)

pub mod element;
pub mod row;
