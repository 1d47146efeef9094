/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the iteration order
of the underlying neighborhoods.

The digest encodes:
- the number of nodes, and
- the sorted list of normalized edges,

before feeding them into a cryptographic hash function. Two runs of a generator
with the same seed and parameters must produce the same digest.

## Example
```
use netgen::{prelude::*, repr::digest::GraphDigest};

let mut graph = AdjSet::new(10);
graph.connect(4, 3);
graph.connect(1, 2);

let mut other = AdjSet::new(10);
other.connect(2, 1);
other.connect(3, 4);

assert_eq!(graph.digest_sha256(), other.digest_sha256());
assert_eq!(graph.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};

/// Trait for computing a **canonical hash digest** of an undirected graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();
        let mut buffer = [0u8; 8];

        let encode = |buf: &mut [u8], u: Node| {
            buf[..4].copy_from_slice(&u.to_le_bytes());
        };

        // first encode the number of nodes in the graph
        encode(&mut buffer[0..4], self.number_of_nodes());
        hasher.update(&buffer[0..4]);

        // then append the sorted edge list
        for Edge(u, v) in self.ordered_edges(true) {
            encode(&mut buffer[0..], u);
            encode(&mut buffer[4..], v);
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}
