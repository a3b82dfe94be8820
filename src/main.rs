//! SpaceChallenge entry point
//!
//! A line-oriented terminal front end: each line is one input, and the
//! session is ticked against a monotonic clock before every command.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use space_challenge::Settings;
use space_challenge::sim::{GamePhase, Input, Outcome, PlayerMode, Session, apply, tick};

const HELP: &str = "\
commands:
  single | dual          choose game mode
  name <slot> <text>     type into a name box (slot 1 or 2)
  bs <slot>              backspace in a name box
  confirm                confirm names
  start                  start the current player's turn
  <empty line> | space   score a point
  next                   continue after time is up
  reset | yes | no       reset the game (asks first)
  status | help | quit";

fn main() {
    env_logger::init();
    log::info!("SpaceChallenge starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load()?;
    if settings.seed == 0 {
        settings.seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(millis)
            .unwrap_or(1);
    }
    log::info!("Marker seed: {}", settings.seed);

    let mut session = Session::new(settings)?;
    let clock = Instant::now();
    let now_ms = || millis(clock.elapsed());

    println!("SpaceChallenge\n{HELP}");
    print_status(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        tick(&mut session, now_ms());

        let inputs = match parse_command(line.trim()) {
            Command::Inputs(inputs) => inputs,
            Command::Status => Vec::new(),
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
            Command::Unknown => {
                println!("unknown command (try `help`)");
                continue;
            }
        };

        for input in inputs {
            if let Err(e) = apply(&mut session, input, now_ms()) {
                log::warn!("Rejected {input:?}: {e}");
                println!("! {e}");
                break;
            }
        }
        print_status(&session);
        io::stdout().flush()?;
    }

    log::info!("SpaceChallenge exiting");
    Ok(())
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

enum Command {
    Inputs(Vec<Input>),
    Status,
    Help,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let mut words = line.splitn(3, ' ');
    let verb = words.next().unwrap_or("");
    let slot = |w: Option<&str>| -> Option<usize> {
        w.and_then(|s| s.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
    };

    match verb {
        "" | "space" => Command::Inputs(vec![Input::Press]),
        "single" => Command::Inputs(vec![Input::SelectMode(PlayerMode::Single)]),
        "dual" => Command::Inputs(vec![Input::SelectMode(PlayerMode::Dual)]),
        "name" => match (slot(words.next()), words.next()) {
            (Some(slot), Some(text)) => Command::Inputs(
                text.chars()
                    .map(|ch| Input::TypeChar { slot, ch })
                    .collect(),
            ),
            _ => Command::Unknown,
        },
        "bs" => match slot(words.next()) {
            Some(slot) => Command::Inputs(vec![Input::Backspace { slot }]),
            None => Command::Unknown,
        },
        "confirm" => Command::Inputs(vec![Input::ConfirmNames]),
        "start" => Command::Inputs(vec![Input::Start]),
        "next" => Command::Inputs(vec![Input::Next]),
        "reset" => Command::Inputs(vec![Input::RequestReset]),
        "yes" => Command::Inputs(vec![Input::ConfirmReset]),
        "no" => Command::Inputs(vec![Input::CancelReset]),
        "status" => Command::Status,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown,
    }
}

fn print_status(session: &Session) {
    let model = session.model();
    if let Some(mode) = session.mode() {
        println!("[{}]", mode.as_str());
    }
    if session.reset_prompt_open() {
        println!("Are you sure you want to reset? (yes / no)");
        return;
    }

    match model.phase() {
        GamePhase::Intro => match session.mode() {
            None => println!("Choose game-play mode: single | dual"),
            Some(mode) => {
                let max = session.settings().max_name_len;
                println!("Enter player names (max {max} characters)");
                for slot in 0..mode.player_count() {
                    let name = session.name_buffer(slot).unwrap_or("");
                    println!("  {}: {}", slot + 1, if name.is_empty() { "_" } else { name });
                }
                if session.names_complete() {
                    println!("  confirm to continue");
                }
            }
        },
        GamePhase::PlayingStale => {
            if let Some(player) = model.current_player() {
                println!("{}'s turn", player.name());
                println!(
                    "Press enter as many times as possible within {} seconds! (start)",
                    model.time_limit_secs()
                );
            }
        }
        GamePhase::PlayingActive => {
            if let Some(player) = model.current_player() {
                if session.times_up() {
                    println!("{}: Time's Up! {} points (next)", player.name(), player.score());
                } else {
                    println!(
                        "{}: {} points, {} seconds left, {} markers",
                        player.name(),
                        player.score(),
                        player.timer.remaining_secs(),
                        session.current_markers().len()
                    );
                }
            }
        }
        GamePhase::Final => match session.outcome() {
            Some(Outcome::SoloScore { name, score }) => {
                println!("{name}'s Final Score is {score} points")
            }
            Some(Outcome::Winner { name, score }) => println!("{name} WINS with {score} points"),
            Some(Outcome::Draw { score }) => println!("It's a draw! {score} points"),
            None => {}
        },
    }

    if model.phase() != GamePhase::Intro {
        for player in model.players() {
            println!(
                "  {:<10} {:>3} points  {:>2}s",
                player.name(),
                player.score(),
                player.timer.remaining_secs()
            );
        }
    }
}
