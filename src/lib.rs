// Room reservation manager: room lookup, booking history and waiting list

pub mod config;
pub mod error;
pub mod history_log;
pub mod menu;
pub mod occupant;
pub mod reservation;
pub mod room_index;
pub mod waiting_list;

// Re-export key types for convenience
pub use config::{AppConfig, OutputFormat};
pub use error::{ConfigError, MenuError, ReservationError, RoomIndexError};
pub use history_log::{Action, HistoryEntry, HistoryLog};
pub use menu::Menu;
pub use occupant::Occupant;
pub use reservation::{
    BookingOutcome, CancellationOutcome, ReservationService, SearchOutcome,
    SharedReservationService,
};
pub use room_index::RoomIndex;
pub use waiting_list::WaitingList;
