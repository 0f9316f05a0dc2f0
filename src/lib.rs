//! This crate provides a circular doubly-linked list with owned nodes,
//! anchored at its last element.
//!
//! The [`Ring`] reaches both of its ends through a single movable pointer,
//! so appending, prepending and removing at either end all take *O*(1)
//! time. Accessing, searching or removing at an arbitrary position takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the ring works.
//!
//! ```
//! use anchor_ring::Ring;
//! use std::iter::FromIterator;
//!
//! let mut ring = Ring::from_iter([1, 2, 3, 4]);
//!
//! ring.push_front(0); // insert 0 at the front of the ring
//! assert_eq!(ring.front(), Some(&0));
//! assert_eq!(ring.back(), Some(&4)); // the anchor stays put
//!
//! let node = ring.find(&3).unwrap(); // locate a node by value...
//! assert_eq!(ring.remove_node(node), Some(3)); // ...and unlink it
//!
//! ring.push_back(5);
//! assert_eq!(Vec::from_iter(ring), vec![0, 1, 2, 4, 5]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the ring is like the following graph:
//! ```text
//!          ┌────────────────────────────────────────────────────────┐
//!          ↓                                                        │
//!    ╔═══════════╗           ╔═══════════╗                ┌───────────┐
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ──────→ │   next    │
//!    ╟───────────╢           ╟───────────╢  Node 1, 2, …  ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                ├───────────┤
//! │  ║ element 0 ║           ║ element 1 ║                │element n-1│
//! │  ╚═══════════╝           ╚═══════════╝                └───────────┘
//! │     Node 0 (head)                                     Node n-1  ↑ ↑
//! └─────────────────────────────────────────────────────────────────┘ │
//! ╔═══════════╗                                                       │
//! ║  anchor   ║ ──────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Ring
//! ```
//! The `Ring` is nothing but an optional pointer to the **anchor**, the
//! node holding the logically last element; an empty ring has no anchor and
//! owns no nodes at all. The head is always `anchor.next`, so one pointer
//! reaches both ends in *O*(1).
//!
//! This tail-anchored shape is deliberate. Keeping the single reference on
//! the *last* node means that appending re-points the anchor while
//! prepending leaves it alone — both are a single splice between the anchor
//! and the head — and a ring of one is simply a node that is its own
//! neighbor in both directions.
//!
//! # Iteration
//!
//! Iterating over a ring is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, fused and non-cyclic: the bounds are captured
//! when the iterator is created, and the forward and backward walks meet
//! instead of wrapping around. [`IterMut`] provides mutability of the
//! elements (but not of the linked structure).
//!
//! Structural mutation during iteration is rejected at compile time, since
//! an outstanding iterator borrows the ring.
//!
//! ## Examples
//!
//! ```
//! use anchor_ring::Ring;
//! use std::iter::FromIterator;
//!
//! let mut ring = Ring::from_iter([1, 2, 3]);
//! let mut iter = ring.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused and non-cyclic
//!
//! ring.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(ring), vec![2, 4, 6]);
//! ```
//!
//! # Node Handles
//!
//! Search and indexed access return [`NodeRef`] handles — plain `Copy`
//! tokens recording a node's identity. A handle borrows nothing; instead,
//! every operation consuming one ([`remove_node`], [`value`],
//! [`position_of`], …) first re-confirms by an address-only scan that the
//! node still belongs to the ring, and answers `None` for a handle that is
//! stale or belongs to another ring. A handle is therefore never
//! dereferenced blindly, at the price of an *O*(*n*) scan per use.
//!
//! ## Examples
//!
//! ```
//! use anchor_ring::Ring;
//! use std::iter::FromIterator;
//!
//! let mut ring = Ring::from_iter(['a', 'b', 'c']);
//!
//! let node = ring.node_at(1).unwrap();
//! assert_eq!(ring.value(node), Some(&'b'));
//! assert_eq!(ring.position_of(node), Some(1));
//!
//! assert_eq!(ring.remove_node(node), Some('b'));
//! assert_eq!(ring.remove_node(node), None); // the handle went stale
//! ```
//!
//! [`Ring`]: crate::Ring
//! [`NodeRef`]: crate::NodeRef
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`remove_node`]: crate::Ring::remove_node
//! [`value`]: crate::Ring::value
//! [`position_of`]: crate::Ring::position_of

#[doc(inline)]
pub use ring::iterator::{Drain, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use ring::{InvariantViolation, NodeRef, Ring};

pub mod ring;

mod experiments;
