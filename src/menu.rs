// Interactive text menu driving the reservation service.
//
// Input is read as whitespace-separated tokens, so a guest name is a single
// word. End of input ends the session the same way the Exit option does.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::{AppConfig, OutputFormat};
use crate::error::MenuError;
use crate::reservation::{BookingOutcome, CancellationOutcome, ReservationService, SearchOutcome};

struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    BookRoom,
    CancelRoom,
    ViewHistory,
    SearchRoom,
    ViewWaitingList,
    Exit,
}

impl MenuOption {
    fn parse(token: &str) -> Option<Self> {
        match token.parse::<u32>().ok()? {
            1 => Some(MenuOption::BookRoom),
            2 => Some(MenuOption::CancelRoom),
            3 => Some(MenuOption::ViewHistory),
            4 => Some(MenuOption::SearchRoom),
            5 => Some(MenuOption::ViewWaitingList),
            6 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, R, W> {
    service: &'a mut ReservationService,
    config: &'a AppConfig,
    input: TokenReader<R>,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(service: &'a mut ReservationService, config: &'a AppConfig, input: R, output: W) -> Self {
        Self {
            service,
            config,
            input: TokenReader::new(input),
            output,
        }
    }

    // Runs the menu until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            self.print_menu()?;
            let Some(token) = self.prompt("Select an option: ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            match MenuOption::parse(&token) {
                Some(MenuOption::BookRoom) => self.book_room()?,
                Some(MenuOption::CancelRoom) => self.cancel_room()?,
                Some(MenuOption::ViewHistory) => self.view_history()?,
                Some(MenuOption::SearchRoom) => self.search_room()?,
                Some(MenuOption::ViewWaitingList) => self.view_waiting_list()?,
                Some(MenuOption::Exit) => return Ok(()),
                None => writeln!(self.output, "Invalid option, please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.config.title)?;
        writeln!(self.output, "1. Book Room")?;
        writeln!(self.output, "2. Cancel Room")?;
        writeln!(self.output, "3. View Booking History")?;
        writeln!(self.output, "4. Search Room")?;
        writeln!(self.output, "5. View Waiting List")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, MenuError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(self.input.next_token()?)
    }

    // None means the input was unusable or closed; the caller returns to the menu.
    fn read_room_number(&mut self, text: &str) -> Result<Option<u32>, MenuError> {
        let Some(token) = self.prompt(text)? else {
            return Ok(None);
        };
        match token.parse::<u32>() {
            Ok(room_number) => Ok(Some(room_number)),
            Err(_) => {
                writeln!(self.output, "Please enter a valid room number.")?;
                Ok(None)
            }
        }
    }

    fn book_room(&mut self) -> Result<(), MenuError> {
        let Some(room_number) = self.read_room_number("Enter Room Number: ")? else {
            return Ok(());
        };
        let Some(guest_name) = self.prompt("Enter Customer Name: ")? else {
            return Ok(());
        };

        let mut join_waitlist = false;
        if let SearchOutcome::Occupied(_) = self.service.request_search(room_number) {
            writeln!(
                self.output,
                "Room is occupied. Would you like to be added to the waiting list? (yes/no)"
            )?;
            let Some(answer) = self.prompt("")? else {
                return Ok(());
            };
            join_waitlist = answer.eq_ignore_ascii_case("yes");
        }

        let message = match self
            .service
            .request_booking(room_number, &guest_name, join_waitlist)?
        {
            BookingOutcome::Booked => "Room booked successfully.",
            BookingOutcome::Waitlisted => "You have been added to the waiting list.",
            BookingOutcome::Declined => "Booking not made.",
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn cancel_room(&mut self) -> Result<(), MenuError> {
        let Some(room_number) = self.read_room_number("Enter Room Number to Cancel: ")? else {
            return Ok(());
        };

        match self.service.request_cancellation(room_number)? {
            CancellationOutcome::Cancelled { promoted_guest, .. } => {
                writeln!(self.output, "Booking cancelled for Room: {}", room_number)?;
                if let Some(guest_name) = promoted_guest {
                    writeln!(
                        self.output,
                        "Room {} has been booked by {}",
                        room_number, guest_name
                    )?;
                }
            }
            CancellationOutcome::NotFound => writeln!(self.output, "Room not found.")?,
        }
        Ok(())
    }

    fn search_room(&mut self) -> Result<(), MenuError> {
        let Some(room_number) = self.read_room_number("Enter Room Number to Search: ")? else {
            return Ok(());
        };

        match self.service.request_search(room_number) {
            SearchOutcome::Occupied(occupant) => writeln!(
                self.output,
                "Room {} booked by {}",
                room_number,
                occupant.guest_name()
            )?,
            SearchOutcome::Vacant => writeln!(self.output, "Room not found or is vacant.")?,
        }
        Ok(())
    }

    fn view_history(&mut self) -> Result<(), MenuError> {
        let entries: Vec<_> = self.service.request_history().collect();

        match self.config.output_format {
            OutputFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(&entries)?)?;
            }
            OutputFormat::Text if entries.is_empty() => {
                writeln!(self.output, "No booking history.")?;
            }
            OutputFormat::Text => {
                for entry in entries {
                    writeln!(self.output, "{}", entry)?;
                }
            }
        }
        Ok(())
    }

    fn view_waiting_list(&mut self) -> Result<(), MenuError> {
        let waiting: Vec<_> = self.service.request_waiting_list().collect();

        match self.config.output_format {
            OutputFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(&waiting)?)?;
            }
            OutputFormat::Text if waiting.is_empty() => {
                writeln!(self.output, "Waiting list is empty.")?;
            }
            OutputFormat::Text => {
                writeln!(self.output, " Waiting list:")?;
                for occupant in waiting {
                    writeln!(
                        self.output,
                        "Room {} - {}",
                        occupant.room_number(),
                        occupant.guest_name()
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history_log::HistoryEntry;
    use crate::occupant::Occupant;

    fn run_session(service: &mut ReservationService, config: &AppConfig, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(service, config, script.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_book_search_and_exit() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        let output = run_session(&mut service, &config, "1 101 Alice\n4 101\n6\n");

        assert!(output.contains("Hotel Management System"));
        assert!(output.contains("Room booked successfully."));
        assert!(output.contains("Room 101 booked by Alice"));
        assert_eq!(
            service.request_search(101),
            SearchOutcome::Occupied(Occupant::new("Alice", 101))
        );
    }

    #[test]
    fn test_waitlist_prompt_and_promotion() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        let script = "1\n101\nAlice\n1\n101\nBob\nYES\n2\n101\n5\n6\n";
        let output = run_session(&mut service, &config, script);

        assert!(output.contains("Would you like to be added to the waiting list? (yes/no)"));
        assert!(output.contains("You have been added to the waiting list."));
        assert!(output.contains("Booking cancelled for Room: 101"));
        assert!(output.contains("Room 101 has been booked by Bob"));
        assert!(output.contains("Waiting list is empty."));
    }

    #[test]
    fn test_declining_waitlist() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        let output = run_session(&mut service, &config, "1 101 Alice\n1 101 Bob no\n5\n");

        assert!(output.contains("Booking not made."));
        assert!(output.contains("Waiting list is empty."));
    }

    #[test]
    fn test_history_and_waiting_list_text() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        let script = "1 101 Alice\n1 102 Bob\n1 102 Carol yes\n2 101\n3\n5\n6\n";
        let output = run_session(&mut service, &config, script);

        let history = "Cancelled - Alice (Room: 101)\nBooked - Bob (Room: 102)\nBooked - Alice (Room: 101)\n";
        assert!(output.contains(history));
        assert!(output.contains(" Waiting list:\nRoom 102 - Carol\n"));
        assert!(!output.contains("has been booked by"));
    }

    #[test]
    fn test_not_found_and_invalid_input() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        let output = run_session(&mut service, &config, "2 303\n4 303\n9\nabc\n4 room\n3\n6\n");

        assert!(output.contains("Room not found."));
        assert!(output.contains("Room not found or is vacant."));
        assert_eq!(output.matches("Invalid option, please try again.").count(), 2);
        assert!(output.contains("Please enter a valid room number."));
        assert!(output.contains("No booking history."));
    }

    #[test]
    fn test_json_output() {
        let mut service = ReservationService::new();
        let config = AppConfig {
            output_format: OutputFormat::Json,
            ..AppConfig::default()
        };

        let output = run_session(&mut service, &config, "1 101 Alice\n3\n6\n");

        let start = output.find('[').unwrap();
        let end = output.rfind(']').unwrap();
        let entries: Vec<HistoryEntry> = serde_json::from_str(&output[start..=end]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].guest_name, "Alice");
        assert_eq!(entries[0].room_number, 101);
    }

    #[test]
    fn test_input_closed_mid_booking() {
        let mut service = ReservationService::new();
        let config = AppConfig::default();

        run_session(&mut service, &config, "1 101");

        assert_eq!(service.request_search(101), SearchOutcome::Vacant);
        assert_eq!(service.request_history().count(), 0);
    }
}
