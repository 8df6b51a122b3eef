// Room lookup: an unbalanced binary search tree keyed by room number.
// Depth is not bounded, so every operation is O(depth) and O(n) in the worst case.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::error::RoomIndexError;
use crate::occupant::Occupant;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    room_number: u32,
    occupant: Occupant,
    left: Link,
    right: Link,
}

impl Node {
    fn new(room_number: u32, occupant: Occupant) -> Self {
        Self {
            room_number,
            occupant,
            left: None,
            right: None,
        }
    }
}

// Ordered map from room number to its current occupant.
// Each room number appears at most once. Children are owned exclusively by
// their parent, so the tree holds no shared or cyclic references.
#[derive(Debug, Default)]
pub struct RoomIndex {
    root: Link,
    len: usize,
}

impl RoomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Inserts `occupant` under `room_number`. Fails with DuplicateRoom if the
    // room is already present; the existing entry is left untouched.
    pub fn insert(&mut self, room_number: u32, occupant: Occupant) -> Result<(), RoomIndexError> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match room_number.cmp(&node.room_number) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    warn!(room_number, "rejected insert of duplicate room");
                    return Err(RoomIndexError::DuplicateRoom(room_number));
                }
            };
        }
        *link = Some(Box::new(Node::new(room_number, occupant)));

        self.len += 1;
        debug!(room_number, size = self.len, "room inserted into index");
        Ok(())
    }

    // Descends left for smaller numbers and right for larger ones.
    pub fn search(&self, room_number: u32) -> Option<&Occupant> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match room_number.cmp(&node.room_number) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.occupant),
            };
        }
        None
    }

    pub fn contains(&self, room_number: u32) -> bool {
        self.search(room_number).is_some()
    }

    // Deleting an absent room is a no-op that returns None.
    pub fn delete(&mut self, room_number: u32) -> Option<Occupant> {
        let removed = Self::delete_at(&mut self.root, room_number)?;
        self.len -= 1;
        debug!(room_number, size = self.len, "room deleted from index");
        Some(removed)
    }

    fn delete_at(mut link: &mut Link, room_number: u32) -> Option<Occupant> {
        // Walk down to the link owning the target node.
        loop {
            let ordering = room_number.cmp(&link.as_deref()?.room_number);
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return None;
            };
            link = match ordering {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }

        let node = link.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // Two children: the in-order successor takes this node's place and
            // is spliced out of the right subtree.
            let successor = Self::take_min(&mut node.right)?;
            let Node {
                room_number: successor_room,
                occupant,
                ..
            } = *successor;
            node.room_number = successor_room;
            return Some(std::mem::replace(&mut node.occupant, occupant));
        }

        let removed = link.take()?;
        let Node {
            occupant,
            left,
            right,
            ..
        } = *removed;
        *link = left.or(right);
        Some(occupant)
    }

    // Detaches the minimum node of the subtree, promoting its right child.
    fn take_min(mut link: &mut Link) -> Option<Box<Node>> {
        while link.as_deref()?.left.is_some() {
            let Some(node) = link else {
                return None;
            };
            link = &mut node.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    // Occupants in ascending room-number order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    // Checks that every left descendant is smaller and every right descendant
    // larger than its ancestor.
    pub fn is_ordered(&self) -> bool {
        let mut pending: Vec<(&Node, Option<u32>, Option<u32>)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, None, None));
        }

        while let Some((node, low, high)) = pending.pop() {
            if low.is_some_and(|low| node.room_number <= low)
                || high.is_some_and(|high| node.room_number >= high)
                || node.occupant.room_number() != node.room_number
            {
                return false;
            }
            if let Some(left) = node.left.as_deref() {
                pending.push((left, low, Some(node.room_number)));
            }
            if let Some(right) = node.right.as_deref() {
                pending.push((right, Some(node.room_number), high));
            }
        }
        true
    }
}

// Unlinks nodes one at a time so a degenerate tree is not dropped recursively.
impl Drop for RoomIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

// In-order iterator over a RoomIndex.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Occupant;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.occupant)
    }
}

impl<'a> IntoIterator for &'a RoomIndex {
    type Item = &'a Occupant;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
