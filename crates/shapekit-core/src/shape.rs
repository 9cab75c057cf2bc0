use serde::{Deserialize, Serialize};

/// Stable identity of a shape owned by the host.
///
/// The engine never keeps a borrow of a shape between calls; it keeps the id
/// and asks the host for the current geometry whenever it needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}
