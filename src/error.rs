use thiserror::Error;

// Errors raised by the room index
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomIndexError {
    #[error("Room {0} is already present in the index")]
    DuplicateRoom(u32),
}

// Errors raised by the reservation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Room index error: {0}")]
    Index(#[from] RoomIndexError),
}

// Errors raised while running the interactive menu
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reservation error: {0}")]
    Reservation(#[from] ReservationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
