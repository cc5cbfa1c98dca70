//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::{BTreeMap, BTreeSet};

/// SmallVec sized for capped excerpt lists (default cap is 5).
pub type SmallVec5<T> = SmallVec<[T; 5]>;
