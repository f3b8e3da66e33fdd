//! Bidirectional ordered maps for Rust.
//!
//! This crate provides [`BiMap`], a one-to-one map between two ordered domains.
//! Every stored pair can be looked up, navigated and erased from either side:
//!
//! - [`find_left`](BiMap::find_left) / [`find_right`](BiMap::find_right) - Locate a pair by either key
//! - [`at_left`](BiMap::at_left) / [`at_right`](BiMap::at_right) - Get the opposite value or a [`NotFound`] error
//! - [`Position::flip`] / [`Cursor::flip`] - Jump from a position on one side to the same pair on the other
//!
//! # Example
//!
//! ```
//! use twin_tree::BiMap;
//!
//! let mut ports = BiMap::new();
//! ports.insert("http", 80).unwrap();
//! ports.insert("https", 443).unwrap();
//! ports.insert("ssh", 22).unwrap();
//!
//! // Both directions are ordered lookups.
//! assert_eq!(ports.at_left(&"https"), Ok(&443));
//! assert_eq!(ports.at_right(&22), Ok(&"ssh"));
//!
//! // A key may only be used once per side.
//! assert!(ports.insert("gopher", 80).is_err());
//!
//! // Walk the right side in order, then hop back to the left side.
//! let lowest = ports.begin_right();
//! assert_eq!(lowest.key(), Some(&22));
//! assert_eq!(lowest.flip().key(), Some(&"ssh"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Pluggable ordering** - Each side takes any [`compare::Compare`] comparator
//! - **Stable positions** - A [`Position`] survives every mutation except erasing its own pair
//!
//! # Implementation
//!
//! Every pair is stored once, in an arena. The arena slot carries two independent sets of
//! binary search tree links, one ordered by the left key and one ordered by the right key,
//! so the same slot is threaded into two trees at once. The trees are plain (unbalanced)
//! binary search trees: operations are O(log n) on average for random insertion order and
//! degrade to O(n) for sorted insertion order.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;
mod side;

pub mod bimap;

pub use bimap::{BiMap, Cursor, LeftPosition, Position, RightPosition};
pub use error::{Conflict, InsertError, NotFound};
pub use side::{Left, Right, Side};
