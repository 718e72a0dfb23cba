//! Domain-agnostic multi-key ordering composition.
//!
//! Builds a single lexicographic comparator from a chain of key criteria,
//! so collections of records can be ordered by several fields without a
//! bespoke comparison routine per sort order:
//!
//! - **Key criteria**: each [`OrderingBuilder::by`] call captures a key
//!   extractor (`Fn(&T) -> K` with `K: Ord`) together with a [`Direction`].
//! - **Priority order**: criteria are consulted in the order they were
//!   added; a later criterion only matters when every earlier one ties.
//! - **Custom rules**: anything implementing [`OrderRule`] can join the
//!   chain alongside extractor-based criteria.
//!
//! The built [`Comparator`] is an immutable snapshot: chaining further
//! criteria onto the builder afterwards never changes comparators already
//! produced, and a comparator is `Send + Sync`, safe to share across
//! threads.
//!
//! # Examples
//!
//! ```
//! use u_ordering::OrderingBuilder;
//!
//! struct Employee {
//!     department: String,
//!     salary: u32,
//! }
//!
//! let cmp = OrderingBuilder::new()
//!     .by(|e: &Employee| e.department.clone())
//!     .by_desc(|e: &Employee| e.salary)
//!     .build();
//!
//! let mut staff = vec![
//!     Employee { department: "ops".into(), salary: 70 },
//!     Employee { department: "eng".into(), salary: 90 },
//!     Employee { department: "eng".into(), salary: 120 },
//! ];
//! staff.sort_by(|a, b| cmp.compare(a, b));
//!
//! assert_eq!(staff[0].salary, 120); // eng, highest paid first
//! assert_eq!(staff[2].department, "ops");
//! ```
//!
//! # Architecture
//!
//! This crate sits at the foundation layer of the U-Engine ecosystem: it
//! contains no domain-specific concepts and performs no I/O. It also does
//! not sort anything itself: the comparator it produces is consumed by
//! `slice::sort_by`, `BinaryHeap` wrappers, or any other comparison-driven
//! facility.

mod builder;
mod comparator;
mod types;

pub use builder::OrderingBuilder;
pub use comparator::Comparator;
pub use types::{Direction, OrderRule};
