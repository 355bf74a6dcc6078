//! Console Crazy Eights for 2 to 4 players sharing one terminal.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use dialoguer::Input;

use crazy_eights::{
    Card, Game, GameOptions, Interaction, MAX_PLAYERS, MIN_PLAYERS, PlayerScore, TableView,
};

/// Play Crazy Eights at the console.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Shuffle seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Do not wait for Enter between turns.
    #[arg(long)]
    no_pause: bool,
    /// Abandon the game after this many turns.
    #[arg(long)]
    max_turns: Option<usize>,
}

struct Console;

impl Interaction for Console {
    fn prompt_player_count(&mut self) -> Option<usize> {
        Input::<usize>::new()
            .with_prompt("Enter number of players")
            .validate_with(|count: &usize| {
                if (MIN_PLAYERS..=MAX_PLAYERS).contains(count) {
                    Ok(())
                } else {
                    Err(format!(
                        "Number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}!"
                    ))
                }
            })
            .interact_text()
            .ok()
    }

    fn prompt_player_name(&mut self, seat: usize) -> Option<String> {
        Input::<String>::new()
            .with_prompt(format!("Enter name of player {}", seat + 1))
            .validate_with(|name: &String| {
                if name.trim().is_empty() {
                    Err("Name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .ok()
    }

    fn notify_state(&mut self, view: &TableView<'_>) {
        for seat in &view.seats {
            println!("{} ({} cards):", seat.name, seat.hand.len());
            for card in seat.hand {
                println!("  {card}");
            }
        }
        println!("Discards: {}", view.discard_top);
        println!("Draw pile: {} cards", view.draw_pile_size);
    }

    fn notify_move(&mut self, player: &str, card: Card) {
        println!("{player} plays {card}\n");
    }

    fn notify_draw(&mut self, player: &str) {
        println!("{player} draws a card\n");
    }

    fn notify_final_scores(&mut self, scores: &[PlayerScore]) {
        println!("Final scores:");
        for score in scores {
            println!("  {}: {}", score.name, score.score);
        }
    }

    fn await_acknowledgment(&mut self) -> bool {
        Input::<String>::new()
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text()
            .is_ok()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("shuffling with seed {seed}");

    let options = GameOptions::default()
        .with_pause_each_turn(!args.no_pause)
        .with_max_turns(args.max_turns);
    let mut game = Game::new(options, seed, Console);

    println!("It's time to play Crazy Eights!\n");

    if let Err(err) = game.seat_players() {
        eprintln!("Setup error: {err}");
        return ExitCode::FAILURE;
    }

    match game.run() {
        Ok(result) => {
            if let Some(winner) = game.player(result.winner) {
                println!("{} wins after {} turns.", winner.name(), result.turns);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Game error: {err}");
            ExitCode::FAILURE
        }
    }
}
