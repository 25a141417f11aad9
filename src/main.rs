use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::watch,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unscramble::{Config, GameIntent, GamePhase, GameSession, RoundEngine, RoundState, WordBank};

/// A line of console input, translated into engine intents
#[derive(Debug, PartialEq, Eq)]
enum ConsoleCommand {
    Play(Vec<GameIntent>),
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries game output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let bank = match &config.words.path {
        Some(path) => match WordBank::load(path).await {
            Ok(bank) => bank,
            Err(e) => {
                tracing::warn!(
                    "Failed to load word list {}: {}. Using built-in words instead.",
                    path,
                    e
                );
                WordBank::builtin()
            }
        },
        None => WordBank::builtin(),
    };

    let engine = RoundEngine::new(bank, config.game).context("Invalid game configuration")?;
    let session = Arc::new(GameSession::new(engine));

    let printer = tokio::spawn(print_snapshots(
        session.subscribe(),
        config.game.round_limit,
        config.console.json_output,
    ));

    println!("Unscramble the word. Commands: :skip, :reset, :quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Play(intents) => {
                for intent in intents {
                    session.dispatch(intent);
                }
            }
        }
    }

    // Dropping the last session handle closes the channel and stops the printer
    drop(session);
    printer.await?;

    Ok(())
}

/// Print every published snapshot until the session goes away
async fn print_snapshots(mut rx: watch::Receiver<RoundState>, round_limit: usize, json: bool) {
    loop {
        let state = rx.borrow_and_update().clone();
        match render(&state, round_limit, json) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("Failed to render snapshot: {}", e),
        }

        if rx.changed().await.is_err() {
            break;
        }
    }
}

fn parse_line(line: &str) -> ConsoleCommand {
    match line.trim() {
        ":quit" | ":q" => ConsoleCommand::Quit,
        ":skip" => ConsoleCommand::Play(vec![GameIntent::Skip]),
        ":reset" => ConsoleCommand::Play(vec![GameIntent::Reset]),
        _ => ConsoleCommand::Play(vec![
            GameIntent::UpdateGuess {
                text: line.to_string(),
            },
            GameIntent::SubmitGuess,
        ]),
    }
}

fn render(state: &RoundState, round_limit: usize, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(state)?);
    }

    if state.phase() == GamePhase::GameOver {
        return Ok(format!(
            "Game over! Final score: {}. Type :reset to play again.",
            state.score
        ));
    }

    let mut line = format!(
        "Round {}/{}: {}  (score {})",
        state.round_number, round_limit, state.scrambled_word, state.score
    );
    if state.is_guess_wrong {
        line.push_str(" - wrong guess, try again");
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":quit"), ConsoleCommand::Quit);
        assert_eq!(parse_line("  :q "), ConsoleCommand::Quit);
        assert_eq!(parse_line(":skip"), ConsoleCommand::Play(vec![GameIntent::Skip]));
        assert_eq!(parse_line(":reset"), ConsoleCommand::Play(vec![GameIntent::Reset]));
    }

    #[test]
    fn test_parse_guess_submits_raw_text() {
        // Trimming is the engine's job
        assert_eq!(
            parse_line(" cat "),
            ConsoleCommand::Play(vec![
                GameIntent::UpdateGuess {
                    text: " cat ".to_string()
                },
                GameIntent::SubmitGuess,
            ])
        );
    }

    #[test]
    fn test_render_playing_round() {
        let state = RoundState {
            is_guess_wrong: true,
            ..RoundState::first_round("tac".to_string())
        };
        assert_eq!(
            render(&state, 10, false).unwrap(),
            "Round 1/10: tac  (score 0) - wrong guess, try again"
        );
    }

    #[test]
    fn test_render_game_over() {
        let state = RoundState {
            score: 60,
            round_number: 10,
            is_game_over: true,
            ..RoundState::first_round("tac".to_string())
        };
        assert_eq!(
            render(&state, 10, false).unwrap(),
            "Game over! Final score: 60. Type :reset to play again."
        );
    }

    #[test]
    fn test_render_json() {
        let state = RoundState::first_round("god".to_string());
        let line = render(&state, 10, true).unwrap();
        let parsed: RoundState = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, state);
    }
}
