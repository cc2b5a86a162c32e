use crate::game::GameEvent;
use std::io::{self, BufRead, Write};

/// Input port for simple player decisions. Calls block until the
/// player supplies a value; invalid input is revalidated here, so the
/// engine always receives a syntactically valid answer.
pub trait DecisionPort {
    fn request_int(&mut self, prompt: &str) -> i64;
    fn request_line(&mut self, prompt: &str) -> String;
}

/// Output port that renders events for the players. Must not mutate
/// engine state.
pub trait OutputPort {
    fn publish(&mut self, event: &GameEvent);
}

/// Console-backed decision port reading from stdin.
#[derive(Debug, Default)]
pub struct ConsoleDecisionPort;

impl ConsoleDecisionPort {
    pub fn new() -> ConsoleDecisionPort {
        ConsoleDecisionPort
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // 0 bytes means stdin is closed; callers fall back to a
            // default answer rather than loop forever.
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_owned()),
            Err(_) => None,
        }
    }
}

impl DecisionPort for ConsoleDecisionPort {
    fn request_int(&mut self, prompt: &str) -> i64 {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        loop {
            let line = match self.read_line() {
                Some(line) => line,
                None => return 0,
            };
            match line.parse::<i64>() {
                Ok(value) => return value,
                Err(_) => {
                    print!("Invalid input, enter a whole number: ");
                    let _ = io::stdout().flush();
                }
            }
        }
    }

    fn request_line(&mut self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        self.read_line().unwrap_or_default()
    }
}

/// Console-backed output port printing each event with its kind tag.
#[derive(Debug, Default)]
pub struct ConsoleOutputPort;

impl OutputPort for ConsoleOutputPort {
    fn publish(&mut self, event: &GameEvent) {
        if event.text.is_empty() {
            return;
        }
        println!("[{}] {}", event.kind.tag(), event.text);
    }
}
