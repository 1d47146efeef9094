/*!
# Graph Representations

The generators in [`gens`](crate::gens) are written against the traits in [`ops`](crate::ops)
and only require an undirected simple graph. [`AdjSet`] is the representation used throughout
the crate: one hash set of neighbors per node plus a maintained edge counter.

[`digest`] computes representation independent hashes of a graph, which is mainly useful for
checking that a seeded generation is reproducible.
*/

use crate::{ops::*, *};

mod undirected;

pub mod digest;

pub use undirected::*;
