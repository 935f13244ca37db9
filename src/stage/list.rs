//! Singly-linked actor list on top of a generational arena.
//!
//! Nodes live in a [`SlotMap`], so removal frees the slot for reuse and any
//! stale [`ActorId`] simply stops resolving. Links are ids, not pointers.
//!
//! ```text
//!   Head ──> a ──> b ──> c ──> None
//!                        ^
//!                       tail
//! ```
//!
//! Invariants:
//! - `tail == Link::Head` exactly when the list is empty (`head` is `None`).
//! - otherwise `tail` is the last node in link order and its `next` is `None`.

use slotmap::{SlotMap, new_key_type};

use crate::common::error::{ListKind, StageError};

use super::actor::Actor;

new_key_type! {
    /// Generational handle to an actor stored in an [`ActorList`].
    pub struct ActorId;
}

/// A position in the chain: the sentinel head or a real node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    Head,
    Node(ActorId),
}

#[derive(Debug)]
struct Node {
    actor: Actor,
    next: Option<ActorId>,
}

#[derive(Debug)]
pub struct ActorList {
    kind: ListKind,
    nodes: SlotMap<ActorId, Node>,
    /// `next` of the sentinel head.
    head: Option<ActorId>,
    tail: Link,
    capacity: usize,
}

impl ActorList {
    pub fn new(kind: ListKind, capacity: usize) -> Self {
        Self {
            kind,
            nodes: SlotMap::with_key(),
            head: None,
            tail: Link::Head,
            capacity,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn tail(&self) -> Link {
        self.tail
    }

    pub fn first(&self) -> Option<ActorId> {
        self.head
    }

    /// The node linked after `id`, if any.
    pub fn next(&self, id: ActorId) -> Option<ActorId> {
        self.nodes.get(id).and_then(|n| n.next)
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.nodes.get(id).map(|n| &n.actor)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.nodes.get_mut(id).map(|n| &mut n.actor)
    }

    /// Link `actor` after the current tail in O(1).
    pub fn append(&mut self, actor: Actor) -> Result<ActorId, StageError> {
        if self.nodes.len() >= self.capacity {
            return Err(StageError::ListFull {
                list: self.kind,
                capacity: self.capacity,
            });
        }

        let id = self.nodes.insert(Node { actor, next: None });
        self.set_next(self.tail, Some(id));
        self.tail = Link::Node(id);
        Ok(id)
    }

    /// Visit every node in link order, unlinking those for which
    /// `should_remove` returns true.
    ///
    /// `should_remove` may mutate the actor (movement is applied in the same
    /// pass). Removed actors are handed to `on_remove` after they are unlinked.
    /// Returns the number of removed nodes.
    pub fn prune<R, F>(&mut self, mut should_remove: R, mut on_remove: F) -> usize
    where
        R: FnMut(ActorId, &mut Actor) -> bool,
        F: FnMut(ActorId, Actor),
    {
        let mut removed = 0;
        let mut prev = Link::Head;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };

            if should_remove(id, &mut node.actor) {
                let next = node.next;
                self.set_next(prev, next);
                // Retarget the tail before the node goes away.
                if self.tail == Link::Node(id) {
                    self.tail = prev;
                }
                if let Some(node) = self.nodes.remove(id) {
                    on_remove(id, node.actor);
                }
                removed += 1;

                // Back to the predecessor; its next is now the old follower.
                cursor = self.next_of(prev);
            } else {
                prev = Link::Node(id);
                cursor = node.next;
            }
        }

        removed
    }

    /// Unlink and drop every node, in link order.
    pub fn clear(&mut self) -> usize {
        self.prune(|_, _| true, |_, _| {})
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, cursor: self.head }
    }

    fn next_of(&self, link: Link) -> Option<ActorId> {
        match link {
            Link::Head => self.head,
            Link::Node(id) => self.next(id),
        }
    }

    fn set_next(&mut self, link: Link, next: Option<ActorId>) {
        match link {
            Link::Head => self.head = next,
            Link::Node(id) => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.next = next;
                }
            }
        }
    }
}

/// Link-order iterator over `(id, actor)` pairs.
pub struct Iter<'a> {
    list: &'a ActorList,
    cursor: Option<ActorId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (ActorId, &'a Actor);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.list.nodes.get(id)?;
        self.cursor = node.next;
        Some((id, &node.actor))
    }
}

impl<'a> IntoIterator for &'a ActorList {
    type Item = (ActorId, &'a Actor);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
