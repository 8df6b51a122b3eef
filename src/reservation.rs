// Reservation service: owns the room index, the history log and the waiting
// list, and keeps them consistent across bookings and cancellations.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ReservationError;
use crate::history_log::{Action, HistoryEntry, HistoryLog};
use crate::occupant::Occupant;
use crate::room_index::RoomIndex;
use crate::waiting_list::WaitingList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingOutcome {
    Booked,
    Waitlisted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationOutcome {
    Cancelled {
        cancelled_guest: String,
        promoted_guest: Option<String>,
    },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Occupied(Occupant),
    Vacant,
}

// Single owner of all reservation state for the process.
// A room has at most one occupant at a time. Operations run to completion
// and never suspend.
#[derive(Debug, Default)]
pub struct ReservationService {
    rooms: RoomIndex,
    history: HistoryLog,
    waiting: WaitingList,
}

impl ReservationService {
    pub fn new() -> Self {
        Self::default()
    }

    // Books `room_number` for `guest_name` if it is vacant. An occupied room
    // either queues the guest on the waiting list or declines, depending on
    // `join_waitlist_if_occupied`.
    // Earlier waiting-list entries for a vacant room are not consulted, so a
    // direct booking can overtake them.
    pub fn request_booking(
        &mut self,
        room_number: u32,
        guest_name: &str,
        join_waitlist_if_occupied: bool,
    ) -> Result<BookingOutcome, ReservationError> {
        if self.rooms.contains(room_number) {
            if !join_waitlist_if_occupied {
                info!(room_number, guest = guest_name, "room occupied, booking declined");
                return Ok(BookingOutcome::Declined);
            }

            self.waiting.enqueue(Occupant::new(guest_name, room_number));
            info!(
                room_number,
                guest = guest_name,
                queue_len = self.waiting.len(),
                "room occupied, guest added to waiting list"
            );
            return Ok(BookingOutcome::Waitlisted);
        }

        self.rooms
            .insert(room_number, Occupant::new(guest_name, room_number))?;
        self.record(Action::Booked, guest_name, room_number);
        info!(room_number, guest = guest_name, "room booked");
        Ok(BookingOutcome::Booked)
    }

    // Cancels the booking on `room_number` and then gives the waiting list a
    // single chance at the vacated room: the head entry is promoted if it
    // wants this room, otherwise it goes back to the tail and the room stays
    // empty.
    pub fn request_cancellation(
        &mut self,
        room_number: u32,
    ) -> Result<CancellationOutcome, ReservationError> {
        let Some(cancelled_guest) = self
            .rooms
            .search(room_number)
            .map(|occupant| occupant.guest_name().to_owned())
        else {
            debug!(room_number, "cancellation for unknown room");
            return Ok(CancellationOutcome::NotFound);
        };

        self.record(Action::Cancelled, &cancelled_guest, room_number);
        self.rooms.delete(room_number);
        info!(room_number, guest = %cancelled_guest, "booking cancelled");

        let promoted_guest = self.promote_from_waiting_list(room_number)?;

        Ok(CancellationOutcome::Cancelled {
            cancelled_guest,
            promoted_guest,
        })
    }

    fn promote_from_waiting_list(
        &mut self,
        room_number: u32,
    ) -> Result<Option<String>, ReservationError> {
        let Some(next) = self.waiting.dequeue() else {
            return Ok(None);
        };

        if next.room_number() != room_number {
            debug!(
                room_number,
                waiting_for = next.room_number(),
                guest = next.guest_name(),
                "head of waiting list wants another room, requeued"
            );
            self.waiting.enqueue(next);
            return Ok(None);
        }

        let guest_name = next.guest_name().to_owned();
        self.rooms.insert(room_number, next)?;
        self.record(Action::Booked, &guest_name, room_number);
        info!(room_number, guest = %guest_name, "waiting guest promoted");
        Ok(Some(guest_name))
    }

    fn record(&mut self, action: Action, guest_name: &str, room_number: u32) {
        self.history.record(action, guest_name, room_number);
        if let Some(entry) = self.history.latest() {
            debug!(%entry, total = self.history.len(), "history entry recorded");
        }
    }

    pub fn request_search(&self, room_number: u32) -> SearchOutcome {
        match self.rooms.search(room_number) {
            Some(occupant) => SearchOutcome::Occupied(occupant.clone()),
            None => SearchOutcome::Vacant,
        }
    }

    pub fn request_history(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.history.list_most_recent_first()
    }

    pub fn request_waiting_list(&self) -> impl Iterator<Item = &Occupant> + '_ {
        self.waiting.list_in_order()
    }

    // Current occupants in ascending room order.
    pub fn occupied_rooms(&self) -> impl Iterator<Item = &Occupant> + '_ {
        self.rooms.iter()
    }
}

// Cloneable handle that serializes every request through one lock, for
// hosts that call in from several threads.
#[derive(Debug, Clone, Default)]
pub struct SharedReservationService {
    inner: Arc<Mutex<ReservationService>>,
}

impl SharedReservationService {
    pub fn new(service: ReservationService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    pub fn request_booking(
        &self,
        room_number: u32,
        guest_name: &str,
        join_waitlist_if_occupied: bool,
    ) -> Result<BookingOutcome, ReservationError> {
        self.inner
            .lock()
            .request_booking(room_number, guest_name, join_waitlist_if_occupied)
    }

    pub fn request_cancellation(
        &self,
        room_number: u32,
    ) -> Result<CancellationOutcome, ReservationError> {
        self.inner.lock().request_cancellation(room_number)
    }

    pub fn request_search(&self, room_number: u32) -> SearchOutcome {
        self.inner.lock().request_search(room_number)
    }

    pub fn request_history(&self) -> Vec<HistoryEntry> {
        self.inner.lock().request_history().cloned().collect()
    }

    pub fn request_waiting_list(&self) -> Vec<Occupant> {
        self.inner.lock().request_waiting_list().cloned().collect()
    }
}
