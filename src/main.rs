//! chess-gif runner (default binary).
//!
//! Reads move notation from a file or stdin, renders every snapshot and writes
//! one looping GIF. See `chess_gif::pipeline` for the environment variables.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;

use chess_gif::pipeline::{run, RunConfig, DEMO_NOTATION};
use chess_gif::render::SpriteSet;
use chess_gif::term::{encode_full_into, encode_plain, BoardView};

const USAGE: &str = "usage: chess-gif [MOVES_FILE | -] [--sprites DIR] [--output FILE] \
[--frames-dir DIR] [--size PX] [--delay MS] [--loop N|infinite] [--preview]";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = RunConfig::from_env().with_args(&args)?;
    let notation = read_notation(&config)?;

    let assets = SpriteSet::load_dir(&config.sprites_dir, config.style().sprite_size)
        .with_context(|| format!("load sprites from {}", config.sprites_dir.display()))?;

    let rendered = run(&notation, &assets, &config)?;

    if config.preview {
        if let Some(board) = rendered.final_board() {
            print_preview(board)?;
        }
    }
    Ok(())
}

fn read_notation(config: &RunConfig) -> Result<String> {
    if let Some(path) = &config.moves_file {
        return fs::read_to_string(path).with_context(|| format!("read {}", path.display()));
    }

    let stdin = io::stdin();
    if stdin.is_tty() {
        eprintln!("[Parse] no moves file given, rendering the demo game");
        return Ok(DEMO_NOTATION.to_string());
    }

    let mut text = String::new();
    stdin.lock().read_to_string(&mut text).context("read stdin")?;
    if text.trim().is_empty() {
        eprintln!("[Parse] empty input, rendering the demo game");
        return Ok(DEMO_NOTATION.to_string());
    }
    Ok(text)
}

fn print_preview(board: &chess_gif::core::Board) -> Result<()> {
    let fb = BoardView::default().render(board);
    let mut stdout = io::stdout();
    if stdout.is_tty() {
        let mut buf = Vec::with_capacity(4 * 1024);
        encode_full_into(&fb, &mut buf)?;
        stdout.write_all(&buf)?;
    } else {
        stdout.write_all(encode_plain(&fb).as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
