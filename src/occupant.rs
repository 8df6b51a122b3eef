use serde::{Deserialize, Serialize};

// A guest bound to a specific room. Created once per booking or waiting-list
// request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    guest_name: String,
    room_number: u32,
}

impl Occupant {
    pub fn new(guest_name: impl Into<String>, room_number: u32) -> Self {
        Self {
            guest_name: guest_name.into(),
            room_number,
        }
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let occupant = Occupant::new("Alice", 101);
        let json = serde_json::to_string(&occupant).unwrap();
        assert_eq!(json, r#"{"guest_name":"Alice","room_number":101}"#);
    }
}
