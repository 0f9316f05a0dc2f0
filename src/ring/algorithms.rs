use crate::ring::{NodeRef, Ring};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: PartialOrd> PartialOrd for Ring<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for Ring<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// The structural copy: a fresh ring of fresh nodes, built by a forward walk
/// and repeated tail insertion. For reference-like element types (`&U`,
/// `Rc<U>`) this duplicates the references, not the values behind them.
impl<T: Clone> Clone for Ring<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for element in self {
            element.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> Ring<T> {
    /// Returns `true` if the `Ring` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(ring.contains(&0), true);
    /// assert_eq!(ring.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a handle to the first node holding an element equal to the
    /// given value, scanning forward from the head, or `None` if there is
    /// no match.
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
    ///
    /// let node = ring.find(&2).unwrap();
    /// assert_eq!(ring.position_of(node), Some(1));
    /// assert!(ring.find(&4).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeRef<T>>
    where
        T: PartialEq,
    {
        self.find_by(|element| element == value)
    }

    /// Returns a handle to the first node whose element matches the
    /// predicate, scanning forward from the head, or `None` if there is no
    /// match. This is the caller-supplied-equality flavor of [`find`].
    ///
    /// [`find`]: Ring::find
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter(["ab", "cd", "ce"]);
    ///
    /// let node = ring.find_by(|s| s.starts_with('c')).unwrap();
    /// assert_eq!(ring.value(node), Some(&"cd"));
    /// ```
    pub fn find_by<P>(&self, mut is_match: P) -> Option<NodeRef<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let head = self.head_node()?;
        let mut current = head;
        loop {
            // SAFETY: `current` only ever walks live members of the ring.
            let node = unsafe { current.as_ref() };
            if is_match(&node.element) {
                return Some(NodeRef::new(current));
            }
            current = node.next;
            if current == head {
                return None;
            }
        }
    }

    /// Returns the zero-based position of the first element equal to the
    /// given value, or `None` if there is no match.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let ring = Ring::from_iter(['a', 'b', 'c']);
    /// assert_eq!(ring.position(&'c'), Some(2));
    /// assert_eq!(ring.position(&'d'), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position_by(|element| element == value)
    }

    /// Returns the zero-based position of the first element matching the
    /// predicate, or `None` if there is no match.
    pub fn position_by<P>(&self, is_match: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(is_match)
    }

    /// Removes the first element equal to the given value and returns it,
    /// or `None` if there is no match.
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
    /// let mut ring = Ring::from_iter([1, 2, 3, 2]);
    ///
    /// assert_eq!(ring.remove(&2), Some(2));
    /// assert_eq!(Vec::from_iter(ring), vec![1, 3, 2]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let node = self.find(value)?;
        self.remove_node(node)
    }

    /// Removes the first element matching the predicate and returns it, or
    /// `None` if there is no match.
    ///
    /// # Examples
    ///
    /// ```
    /// use anchor_ring::Ring;
    /// use std::iter::FromIterator;
    ///
    /// let mut ring = Ring::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(ring.remove_by(|x| x % 2 == 0), Some(2));
    /// assert_eq!(ring.remove_by(|x| x % 5 == 0), None);
    /// ```
    pub fn remove_by<P>(&mut self, is_match: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let node = self.find_by(is_match)?;
        self.remove_node(node)
    }

    /// The transforming copy: builds a fresh ring whose elements are the
    /// results of applying `transform` to this ring's elements, in order,
    /// by a forward walk and repeated tail insertion.
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
    /// let doubled = ring.map(|x| x * 2);
    ///
    /// assert_eq!(Vec::from_iter(doubled), vec![2, 4, 6]);
    /// assert_eq!(ring.len(), 3);
    /// ```
    pub fn map<U, F>(&self, mut transform: F) -> Ring<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut mapped = Ring::new();
        for element in self.iter() {
            mapped.push_back(transform(element));
        }
        mapped
    }
}
