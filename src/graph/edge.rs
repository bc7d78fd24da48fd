//! Undirected weighted edges.
//!
//! An [`Edge`] keeps the orientation it was created with (`start` is the
//! vertex it was looked up from), but equality, hashing and ordering all treat
//! it as undirected: `Edge::new(a, b, w) == Edge::new(b, a, w)`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// An immutable undirected `(start, end, weight)` triple.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    start: VertexId,
    end: VertexId,
    weight: Weight,
}

impl Edge {
    /// Creates an edge. Validity (weight ≥ 1, no self-loop) is checked by
    /// [`GraphValidator`](super::GraphValidator), not here.
    #[inline]
    pub const fn new(start: VertexId, end: VertexId, weight: Weight) -> Self {
        Self { start, end, weight }
    }

    /// The vertex this edge was oriented from.
    #[inline(always)]
    pub const fn start(&self) -> VertexId {
        self.start
    }

    /// The vertex this edge points to.
    #[inline(always)]
    pub const fn end(&self) -> VertexId {
        self.end
    }

    /// Edge weight.
    #[inline(always)]
    pub const fn weight(&self) -> Weight {
        self.weight
    }

    /// The unordered vertex pair as `(min, max)`.
    #[inline]
    pub fn pair(&self) -> (VertexId, VertexId) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// The same edge seen from its other endpoint.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start, self.weight)
    }

    /// Returns true if this edge joins `a` and `b`, in either direction.
    #[inline]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Returns true if the edge connects a vertex to itself.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.start == self.end
    }

    /// `[start, end, weight]`, the row layout used by edge-triple sinks.
    pub fn to_array(&self) -> [u64; 3] {
        [self.start as u64, self.end as u64, u64::from(self.weight)]
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.connects(other.start, other.end)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
        self.weight.hash(state);
    }
}

impl Ord for Edge {
    /// Weight ascending, then the normalized vertex pair ascending.
    ///
    /// Two orientations of the same edge compare `Equal`, which keeps the
    /// order consistent with `Eq` so it can key a `BTreeSet`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.pair().cmp(&other.pair()))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start, self.end, self.weight)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((start, end, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(start, end, weight)
    }
}
