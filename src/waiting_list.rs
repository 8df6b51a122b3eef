use std::collections::VecDeque;

use crate::occupant::Occupant;

// First-come-first-served queue of guests waiting for an occupied room.
#[derive(Debug, Default)]
pub struct WaitingList {
    queue: VecDeque<Occupant>,
}

impl WaitingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, occupant: Occupant) {
        self.queue.push_back(occupant);
    }

    pub fn dequeue(&mut self) -> Option<Occupant> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    // Head-to-tail view; leaves the queue untouched.
    pub fn list_in_order(&self) -> impl Iterator<Item = &Occupant> + '_ {
        self.queue.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut list = WaitingList::new();
        list.enqueue(Occupant::new("Alice", 101));
        list.enqueue(Occupant::new("Bob", 102));
        list.enqueue(Occupant::new("Carol", 101));

        assert_eq!(list.dequeue().unwrap().guest_name(), "Alice");
        assert_eq!(list.dequeue().unwrap().guest_name(), "Bob");
        assert_eq!(list.dequeue().unwrap().guest_name(), "Carol");
        assert!(list.dequeue().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_listing_does_not_consume() {
        let mut list = WaitingList::new();
        list.enqueue(Occupant::new("Alice", 101));
        list.enqueue(Occupant::new("Bob", 102));

        let names: Vec<&str> = list.list_in_order().map(Occupant::guest_name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(list.list_in_order().count(), 2);
        assert_eq!(list.len(), 2);
    }
}
