//! Terminal memory match runner (default binary).
//!
//! Owns the cursor and the event/tick loop; all game rules live in the
//! engine. Rendering happens only when the engine reports a state change or
//! the cursor moves.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::engine::GameEngine;
use tui_memory::input::{handle_key_event, should_quit, UiAction};
use tui_memory::term::{GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameConfig, Symbol, BOARD_COLUMNS, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CliArgs {
    config: GameConfig,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config = GameConfig::default();
    let mut seed: Option<u64> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--pairs" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pairs"))?;
                config.pair_count = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --pairs value: {}", v))?;
            }
            "--match-delay" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --match-delay"))?;
                config.match_delay_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --match-delay value: {}", v))?;
            }
            "--mismatch-delay" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mismatch-delay"))?;
                config.mismatch_delay_ms = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --mismatch-delay value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliArgs { config, seed })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(&Symbol::ALL, cli.config, seed)?,
        None => GameEngine::new(&Symbol::ALL, cli.config)?,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine) -> Result<()> {
    // The engine notifies on every observable change; the loop only redraws
    // when this flag is set (or the cursor moved).
    let dirty = Rc::new(Cell::new(true));
    let dirty_mark = Rc::clone(&dirty);
    engine.subscribe(move |_| dirty_mark.set(true));

    let view = GameView::default();
    let mut cursor: usize = 0;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        if dirty.replace(false) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(engine.snapshot(), cursor, Viewport::new(w, h));
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_ui_action(engine, &mut cursor, action, &dirty);
                    }
                }
                Event::Resize(..) => {
                    dirty.set(true);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
        }
    }
}

fn apply_ui_action(engine: &mut GameEngine, cursor: &mut usize, action: UiAction, dirty: &Cell<bool>) {
    let tiles = engine.snapshot().tiles.len();
    if tiles == 0 {
        return;
    }

    match action {
        UiAction::CursorLeft => {
            *cursor = (*cursor + tiles - 1) % tiles;
            dirty.set(true);
        }
        UiAction::CursorRight => {
            *cursor = (*cursor + 1) % tiles;
            dirty.set(true);
        }
        UiAction::CursorUp => {
            *cursor = (*cursor + tiles - BOARD_COLUMNS.min(tiles)) % tiles;
            dirty.set(true);
        }
        UiAction::CursorDown => {
            *cursor = (*cursor + BOARD_COLUMNS.min(tiles)) % tiles;
            dirty.set(true);
        }
        UiAction::Flip => {
            // A rejected reveal changes nothing and triggers no redraw.
            engine.reveal(*cursor);
        }
        UiAction::NewGame => {
            *cursor = 0;
            engine.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_defaults() {
        let cli = parse_args(&[]).unwrap();
        assert_eq!(cli.config, GameConfig::default());
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_parse_args_overrides() {
        let args: Vec<String> = [
            "--pairs", "4", "--match-delay", "100", "--mismatch-delay", "200", "--seed", "7",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let cli = parse_args(&args).unwrap();
        assert_eq!(cli.config.pair_count, 4);
        assert_eq!(cli.config.match_delay_ms, 100);
        assert_eq!(cli.config.mismatch_delay_ms, 200);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        let args = vec!["--bogus".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn test_parse_args_rejects_missing_value() {
        let args = vec!["--pairs".to_string()];
        assert!(parse_args(&args).is_err());
    }
}
