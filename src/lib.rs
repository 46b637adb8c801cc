//! Ordered in-memory key/value skip list, meant to serve as the sorted write
//! buffer (memtable) in front of an on-disk sorted storage engine.
//!
//! ```
//! use memskip::SkipList;
//!
//! let mut list = SkipList::new();
//! list.insert("key1".to_string(), "value1".to_string());
//!
//! assert_eq!(list.get(&"key1".to_string()), Some(&"value1".to_string()));
//! assert_eq!(list.size(), 10);
//!
//! list.erase(&"key1".to_string());
//! assert!(!list.contains(&"key1".to_string()));
//! ```
//!
//! The list is single-threaded. Owners that need shared access wrap it in
//! their own lock.

pub use crate::comparator::*;
pub use crate::error::*;
pub use crate::level::*;
pub use crate::measure::*;
pub use crate::options::*;
pub use crate::skiplist::SkipList;

mod comparator;
mod error;
mod level;
mod measure;
mod node;
mod options;
#[cfg(feature = "render")]
mod render;
mod skiplist;
