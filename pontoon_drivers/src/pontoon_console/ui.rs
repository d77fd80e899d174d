use pontoon::{Banner, Card, Display, GameError, Hand, LedgerStats, Outcome, RoundOutcome, Seat};

const CARD_ART_LINES: usize = 7;

const ROUND_START_ART: &str = r#"
 ██████╗ ██╗      █████╗  ██████╗██╗  ██╗     ██╗ █████╗  ██████╗██╗  ██╗
 ██╔══██╗██║     ██╔══██╗██╔════╝██║ ██╔╝     ██║██╔══██╗██╔════╝██║ ██╔╝
 ██████╔╝██║     ███████║██║     █████╔╝      ██║███████║██║     █████╔╝
 ██╔══██╗██║     ██╔══██║██║     ██╔═██╗ ██   ██║██╔══██║██║     ██╔═██╗
 ██████╔╝███████╗██║  ██║╚██████╗██║  ██╗╚█████╔╝██║  ██║╚██████╗██║  ██╗
 ╚═════╝ ╚══════╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝ ╚════╝ ╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝
"#;

const RESULT_ART: &str = r#"
 ██████╗ ███████╗███████╗██╗   ██╗██╗  ████████╗
 ██╔══██╗██╔════╝██╔════╝██║   ██║██║  ╚══██╔══╝
 ██████╔╝█████╗  ███████╗██║   ██║██║     ██║
 ██╔══██╗██╔══╝  ╚════██║██║   ██║██║     ██║
 ██║  ██║███████╗███████║╚██████╔╝███████╗██║
 ╚═╝  ╚═╝╚══════╝╚══════╝ ╚═════╝ ╚══════╝╚═╝
"#;

const FAREWELL_ART: &str = r#"
 ████████╗██╗  ██╗ █████╗ ███╗   ██╗██╗  ██╗███████╗██╗
 ╚══██╔══╝██║  ██║██╔══██╗████╗  ██║██║ ██╔╝██╔════╝██║
    ██║   ███████║███████║██╔██╗ ██║█████╔╝ ███████╗██║
    ██║   ██╔══██║██╔══██║██║╚██╗██║██╔═██╗ ╚════██║╚═╝
    ██║   ██║  ██║██║  ██║██║ ╚████║██║  ██╗███████║██╗
    ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝╚══════╝╚═╝
"#;

/// Draws the table on stdout: card frames, banners and the running
/// statistics. Pure presentation; every rule decision is made upstream.
#[derive(Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> ConsoleDisplay {
        ConsoleDisplay
    }

    fn render_card_frames(&self, hand: &Hand, hide_first: bool) {
        if hand.is_empty() {
            return;
        }
        let frames: Vec<[String; CARD_ART_LINES]> = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 && hide_first {
                    hidden_card_art()
                } else {
                    card_art(card)
                }
            })
            .collect();

        for line in 0..CARD_ART_LINES {
            let row: Vec<&str> = frames.iter().map(|frame| frame[line].as_str()).collect();
            println!("{}", row.join(" "));
        }
    }
}

impl Display for ConsoleDisplay {
    fn render_hand(&mut self, seat: Seat, hand: &Hand, hide_first: bool) {
        match seat {
            Seat::Player => println!("\nYour cards:"),
            Seat::Dealer => println!("\nDealer cards:"),
        }
        print!("Cards: ");
        for (i, card) in hand.cards().iter().enumerate() {
            if i == 0 && hide_first {
                print!("[Hidden] ");
            } else {
                print!("{} ", card);
            }
        }
        if !hide_first {
            print!("(Sum: {})", hand.value());
        }
        println!();
        self.render_card_frames(hand, hide_first);
    }

    fn render_banner(&mut self, banner: Banner) {
        match banner {
            Banner::Welcome => {
                println!("Welcome to BLACKJACK!");
                println!("Goal: get the sum of the cards as close to 21 as possible, but not more.");
                println!("Ace = 11 or 1, Face cards = 10, others = face value.");
            }
            Banner::RoundStart => println!("{}", ROUND_START_ART),
            Banner::TwentyOne => println!("\nBLACKJACK! CONGRATULATIONS!"),
            Banner::Result => println!("{}", RESULT_ART),
            Banner::Bankrupt => {
                println!("\n╔════════════════════════════════════════╗");
                println!("║      YOU ARE BANKRUPT! GAME OVER!      ║");
                println!("╚════════════════════════════════════════╝");
            }
            Banner::Farewell => println!("{}", FAREWELL_ART),
        }
    }

    fn render_outcome(&mut self, outcome: &RoundOutcome) {
        let message = match outcome.outcome {
            Outcome::PlayerBust => "You lost (bust)!",
            Outcome::DealerBust => "You win (dealer bust)!",
            Outcome::TwentyOne => "21! You win double your bet!",
            Outcome::PlayerWins => "You win!",
            Outcome::DealerWins => "You lost!",
            Outcome::Push => "Push! Bet returned.",
        };
        println!("\n{}", message);
        println!("Current bank: ${}", outcome.balance);
        println!(
            "Statistics: Wins: {} | Losses: {} | Draws: {}",
            outcome.stats.won, outcome.stats.lost, outcome.stats.draws
        );
    }

    fn render_stats(&mut self, stats: &LedgerStats, balance: i64) {
        println!("\n╔════════════════════════════════════════╗");
        println!("║            FINAL STATISTICS            ║");
        println!("╠════════════════════════════════════════╣");
        println!("║ Final bank: ${:<25} ║", balance);
        println!("║ Rounds played: {:<23} ║", stats.played);
        println!("║ Rounds won: {:<26} ║", stats.won);
        println!("║ Rounds lost: {:<25} ║", stats.lost);
        println!("║ Draws: {:<31} ║", stats.draws);
        if let Some(rate) = stats.win_rate() {
            let rate = format!("{:.1}%", rate);
            println!("║ Win rate: {:<28} ║", rate);
        }
        println!("╚════════════════════════════════════════╝");
    }

    fn render_error(&mut self, error: &GameError) {
        match error {
            GameError::InvalidBet { balance, .. } => {
                println!("Invalid bet. Enter a number between 1 and {}.", balance)
            }
            GameError::InvalidChoice { .. } => {
                println!("Incorrect input. Use 'h' to take a card or 's' to stand.")
            }
            other => println!("{}", other),
        }
    }
}

fn card_art(card: &Card) -> [String; CARD_ART_LINES] {
    let rank = card.rank.symbol();
    let suit = card.suit.symbol();
    [
        String::from("┌─────────┐"),
        format!("│{:<8} │", rank),
        String::from("│         │"),
        format!("│    {}    │", suit),
        String::from("│         │"),
        format!("│ {:>8}│", rank),
        String::from("└─────────┘"),
    ]
}

fn hidden_card_art() -> [String; CARD_ART_LINES] {
    [
        "┌─────────┐",
        "│░░░░░░░░░│",
        "│░░░░░░░░░│",
        "│░░░░░░░░░│",
        "│░░░░░░░░░│",
        "│░░░░░░░░░│",
        "└─────────┘",
    ]
    .map(String::from)
}
