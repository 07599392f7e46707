//! Interactive twenty-one against the automated dealer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, Decision, Game, GameState, Player, RoundOutcome, RoundSummary, Suit};

fn main() {
    println!("Welcome to Twenty-One!");

    let name = prompt_line("Enter your name: ");
    let name = if name.is_empty() { "Player".to_string() } else { name };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(name, seed);

    if let Err(err) = game.deal() {
        println!("Deal error: {err}");
        return;
    }

    while game.state() == GameState::PlayerTurn {
        print_player(game.player());
        print_status(&game);

        let input = prompt_line("\nDraw another card? (s/n): ");
        let Some(decision) = Decision::parse(&input) else {
            println!("Please answer 's' to draw or 'n' to stand.");
            continue;
        };

        let result = match decision {
            Decision::Hit => game.hit().map(|_| ()),
            Decision::Stand => game.stand(),
        };

        if let Err(err) = result {
            println!("Action error: {err}");
            return;
        }
    }

    if game.state() == GameState::DealerTurn {
        match game.dealer_play() {
            Ok(drawn) => {
                if !drawn.is_empty() {
                    println!("\nThe dealer draws {} card(s).", drawn.len());
                }
            }
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        }
    }

    print_showdown(&game);

    match game.outcome() {
        Ok(summary) => println!("\n{}", outcome_message(&summary)),
        Err(err) => println!("Outcome error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_player(player: &Player) {
    println!("\n{}'s hand: {}", player.name(), format_hand(player));
    println!("Score: {}", player.hand().score());
}

fn print_status(game: &Game) {
    println!("\nGame status:");
    println!("  {}: {}", game.player().name(), game.player().hand().score());
    println!("  {}: {}", game.dealer().name(), game.dealer().hand().score());
}

fn print_showdown(game: &Game) {
    let dealer = game.dealer();
    println!("\n{}'s hand: {}", dealer.name(), format_hand(dealer));
    println!("Score: {}", dealer.hand().score());

    let player = game.player();
    println!("\n{}'s hand: {}", player.name(), format_hand(player));
    println!("Score: {}", player.hand().score());
}

fn outcome_message(summary: &RoundSummary) -> String {
    match summary.outcome {
        RoundOutcome::Push if summary.player_bust && summary.dealer_bust => {
            "Both hands went over 21. It's a push.".to_string()
        }
        RoundOutcome::Push => "It's a push. Nobody wins.".to_string(),
        RoundOutcome::DealerWin if summary.player_bust => {
            "You went over 21. The dealer wins!".to_string()
        }
        RoundOutcome::DealerWin => "The dealer wins. Better luck next time.".to_string(),
        RoundOutcome::PlayerWin if summary.dealer_bust => {
            "The dealer went over 21. You win!".to_string()
        }
        RoundOutcome::PlayerWin => "Congratulations, you win!".to_string(),
    }
}

fn format_hand(player: &Player) -> String {
    if player.hand().is_empty() {
        return "(empty)".to_string();
    }
    player
        .hand()
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
