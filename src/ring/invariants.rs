use crate::ring::Ring;
use std::error::Error;
use std::fmt;

/// A structural defect reported by [`Ring::validate_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node's forward neighbor does not point back at it.
    InvalidForwardLink { position: usize },
    /// A node's backward neighbor does not point forward at it.
    InvalidBackwardLink { position: usize },
    /// The forward and backward walks close over different step counts.
    LengthMismatch { forward: usize, backward: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::InvalidForwardLink { position } => {
                write!(f, "node {} is not its successor's predecessor", position)
            }
            InvariantViolation::InvalidBackwardLink { position } => {
                write!(f, "node {} is not its predecessor's successor", position)
            }
            InvariantViolation::LengthMismatch { forward, backward } => write!(
                f,
                "forward walk closed after {} steps, backward walk after {}",
                forward, backward
            ),
        }
    }
}

impl Error for InvariantViolation {}

impl<T> Ring<T> {
    /// Walks the whole ring and checks its structural invariants: every
    /// node agrees with both neighbors about adjacency, and the forward and
    /// backward walks close over the same number of steps. An empty ring is
    /// trivially valid.
    ///
    /// This is a diagnostic for tests and debugging; in a healthy ring it
    /// never fails.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter([1, 2, 3]);
    /// assert!(ring.validate_invariants().is_ok());
    /// ```
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        let anchor = match self.anchor_node() {
            None => return Ok(()),
            Some(anchor) => anchor,
        };
        // SAFETY: the anchor is a live member of the ring.
        let head = unsafe { anchor.as_ref().next };

        let mut current = head;
        let mut forward = 0;
        loop {
            // SAFETY: every pointer reached here was installed by a ring
            // operation, and nodes are only freed after being unlinked, so
            // the walk stays within live nodes.
            unsafe {
                let node = current.as_ref();
                if node.next.as_ref().prev != current {
                    return Err(InvariantViolation::InvalidForwardLink { position: forward });
                }
                if node.prev.as_ref().next != current {
                    return Err(InvariantViolation::InvalidBackwardLink { position: forward });
                }
                current = node.next;
            }
            forward += 1;
            if current == head {
                break;
            }
        }

        let mut current = anchor;
        let mut backward = 0;
        loop {
            // SAFETY: as above; the backward links were just confirmed to
            // mirror the forward ones.
            current = unsafe { current.as_ref().prev };
            backward += 1;
            if current == anchor {
                break;
            }
        }

        if forward != backward {
            return Err(InvariantViolation::LengthMismatch { forward, backward });
        }
        Ok(())
    }
}
