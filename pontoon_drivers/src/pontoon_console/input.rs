use pontoon::{Decision, GameError, Input, Question};
use std::io::{self, Write};

/// Reads the player's answers from stdin, prompting on stdout. A closed or
/// failed stream comes back as `InputClosed`, which the session treats as
/// fatal instead of re-prompting forever.
#[derive(Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> ConsoleInput {
        ConsoleInput
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        print!("{}", text);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => Err(GameError::InputClosed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }
}

impl Input for ConsoleInput {
    fn read_bet(&mut self, balance: i64) -> Result<i64, GameError> {
        println!("\nYour current bank: ${}", balance);
        let line = self.prompt("Enter your bet: $")?;
        line.parse::<i64>()
            .map_err(|_| GameError::InvalidBet { bet: 0, balance })
    }

    fn read_choice(&mut self) -> Result<Decision, GameError> {
        let line = self.prompt("\nYour turn. Take a card (h) or stand (s)? ")?;
        line.parse()
    }

    fn read_yes_no(&mut self, question: Question) -> bool {
        let text = match question {
            Question::PlayAgain => "\nWant to play again? (Y/N): ",
            Question::NewBank => "\nWould you like to restart with a new bank? (Y/N): ",
        };
        loop {
            match self.prompt(text) {
                Ok(line) => match line.to_ascii_lowercase().as_str() {
                    "y" | "yes" => return true,
                    "n" | "no" => return false,
                    _ => continue,
                },
                Err(_) => return false,
            }
        }
    }
}
