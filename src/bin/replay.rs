//! Headless replay of an action script.
//!
//! Reads one action name per line from stdin (`MOVE_LEFT`, `hard-drop`, ...),
//! applies them to a seeded game and prints the final board and score.
//! Blank lines and `#` comments are skipped; unknown names are reported on
//! stderr and otherwise have no effect. `--json` prints a JSON summary
//! instead of the text board.
//!
//! ```text
//! printf 'ROTATE\nHARD_DROP\n' | BLOCKS_SEED=7 tui-blocks-replay --json
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use tui_blocks::core::{DropCadence, GameState, RandomPieces, RecordingFeedback, Session};
use tui_blocks::types::GameAction;
use tui_blocks::{logging, AppConfig};

const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    actions: usize,
    ignored: usize,
    events: usize,
    score: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    board: Vec<String>,
}

/// A script line that did not name an action.
#[derive(Debug, PartialEq, Eq)]
struct Unknown {
    line: usize,
    name: String,
}

fn main() -> Result<()> {
    let json = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("--json") => true,
        Some(other) => bail!("unknown argument {other:?} (expected --json)"),
    };

    let config = AppConfig::from_env();
    logging::init(&config)?;

    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let (summary, unknown) = replay(io::stdin().lock(), seed, config.cadence)?;
    for entry in &unknown {
        eprintln!("line {}: unknown action {:?}", entry.line, entry.name);
    }

    let mut out = io::stdout().lock();
    write_summary(&mut out, &summary, json)?;
    out.flush()?;
    Ok(())
}

/// Apply every action named in `script` to a game seeded with `seed`.
fn replay(script: impl BufRead, seed: u64, cadence: DropCadence) -> Result<(Summary, Vec<Unknown>)> {
    let mut session = Session::new(RandomPieces::seeded(seed), cadence);
    let mut events = RecordingFeedback::default();
    let mut applied = 0usize;
    let mut unknown = Vec::new();

    for (n, line) in script.lines().enumerate() {
        let line = line.context("failed to read script")?;
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }
        match GameAction::from_name(name) {
            Some(action) => {
                session.dispatch(action, &mut events);
                applied += 1;
            }
            None => unknown.push(Unknown {
                line: n + 1,
                name: name.to_string(),
            }),
        }
    }

    log::info!(
        "replayed {applied} action(s) with seed {seed}, {} event(s)",
        events.events.len()
    );

    let state = session.state();
    let summary = Summary {
        seed,
        actions: applied,
        ignored: unknown.len(),
        events: events.events.len(),
        score: state.score,
        level: state.level,
        paused: state.paused,
        game_over: state.game_over,
        board: board_lines(state),
    };
    Ok((summary, unknown))
}

fn board_lines(state: &GameState) -> Vec<String> {
    state
        .visible_board()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or('.', |kind| kind.letter()))
                .collect()
        })
        .collect()
}

fn write_summary(out: &mut impl Write, summary: &Summary, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, summary)?;
        writeln!(out)?;
        return Ok(());
    }

    for line in &summary.board {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "score {} level {}", summary.score, summary.level)?;
    if summary.game_over {
        writeln!(out, "game over")?;
    } else if summary.paused {
        writeln!(out, "paused")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Summary, Vec<Unknown>) {
        replay(script.as_bytes(), 7, DropCadence::default()).unwrap()
    }

    #[test]
    fn unknown_names_are_skipped_and_reported() {
        let (summary, unknown) = run("# opening\nJUMP\n\nhard-drop\nteleport\n");

        assert_eq!(summary.actions, 1);
        assert_eq!(summary.ignored, 2);
        assert_eq!(
            unknown,
            vec![
                Unknown {
                    line: 2,
                    name: "JUMP".to_string()
                },
                Unknown {
                    line: 5,
                    name: "teleport".to_string()
                },
            ]
        );
    }

    #[test]
    fn only_unknown_names_leave_a_fresh_game() {
        let (summary, _) = run("JUMP\nFLY\n");
        let (fresh, _) = run("");

        assert_eq!(summary.actions, 0);
        assert_eq!(summary.events, 0);
        assert_eq!(summary.board, fresh.board);
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn hard_drop_fills_the_bottom_row() {
        let (summary, _) = run("HARD_DROP\n");

        assert_eq!(summary.board.len(), 20);
        assert!(summary.board.iter().all(|row| row.len() == 10));
        assert!(summary.board[19].chars().any(|c| c != '.'));
        // Hard drop then landing.
        assert!(summary.events >= 2);
    }

    #[test]
    fn paused_script_reports_paused() {
        let (summary, _) = run("PAUSE\nMOVE_LEFT\n");
        assert!(summary.paused);
        assert_eq!(summary.events, 1);

        let mut out = Vec::new();
        write_summary(&mut out, &summary, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("score 0 level 1\npaused\n"));
    }

    #[test]
    fn json_summary_has_all_fields() {
        let (summary, _) = run("ROTATE\nnope\nHARD_DROP\n");

        let mut out = Vec::new();
        write_summary(&mut out, &summary, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["seed"], 7);
        assert_eq!(value["actions"], 2);
        assert_eq!(value["ignored"], 1);
        assert_eq!(value["level"], 1);
        assert_eq!(value["game_over"], false);
        assert_eq!(value["board"].as_array().unwrap().len(), 20);
    }
}
