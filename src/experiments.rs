#![allow(dead_code)]

// A compile-time-checked rendition of the same double-ended structure:
// `GhostToken` branding replaces run-time membership checks, and each node
// is owned by exactly two `StaticRc` halves (its neighbors' links, or the
// handle at the ends), so a node can only be reclaimed by joining both.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Deque<'id, T> {
    head: Option<NodePtr<'id, T>>,
    tail: Option<NodePtr<'id, T>>,
}

struct Node<'id, T> {
    next: Option<NodePtr<'id, T>>,
    prev: Option<NodePtr<'id, T>>,
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        Self {
            next: None,
            prev: None,
            elem,
        }
    }
}

impl<'id, T> Default for Deque<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }
}

impl<'id, T> Deque<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_ref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.deref().borrow(token).next.as_ref();
        }
        count
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (near, far) = Full::split::<1, 1>(Full::new(GhostCell::new(Node::new(elem))));
        match self.tail.take() {
            Some(old) => {
                old.deref().borrow_mut(token).next = Some(near);
                far.deref().borrow_mut(token).prev = Some(old);
                self.tail = Some(far);
            }
            None => {
                self.head = Some(near);
                self.tail = Some(far);
            }
        }
    }

    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (near, far) = Full::split::<1, 1>(Full::new(GhostCell::new(Node::new(elem))));
        match self.head.take() {
            Some(old) => {
                old.deref().borrow_mut(token).prev = Some(near);
                far.deref().borrow_mut(token).next = Some(old);
                self.head = Some(far);
            }
            None => {
                self.head = Some(near);
                self.tail = Some(far);
            }
        }
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let last = self.tail.take()?;
        let other = match last.deref().borrow_mut(token).prev.take() {
            Some(before) => {
                let other = before.deref().borrow_mut(token).next.take().unwrap();
                self.tail = Some(before);
                other
            }
            None => self.head.take().unwrap(),
        };
        Some(Full::into_box(Full::join(last, other)).into_inner().elem)
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let first = self.head.take()?;
        let other = match first.deref().borrow_mut(token).next.take() {
            Some(after) => {
                let other = after.deref().borrow_mut(token).prev.take().unwrap();
                self.head = Some(after);
                other
            }
            None => self.tail.take().unwrap(),
        };
        Some(Full::into_box(Full::join(first, other)).into_inner().elem)
    }
}
