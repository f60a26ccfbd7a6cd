//! Command-line driver for the kotoba engine
//!
//! Reads a sentence tree in bracket notation, runs the fold/convert
//! pipeline against a language pack, and prints one line per resulting
//! assignment. With no tree argument it drops into an interactive loop.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use kotoba::{convert, fold, LanguagePack, Node};

/// Built-in demo pack (Japanese), used when no pack file is given.
const DEFAULT_PACK: &str = include_str!("../../../demos/pack.ja.json");

#[derive(Parser)]
#[command(name = "kotoba")]
#[command(about = "Turn parsed descriptions into attribute assignments", version)]
struct Cli {
    /// Language pack JSON (lexicon plus word classes)
    #[arg(short, long)]
    pack: Option<PathBuf>,

    /// Sentence tree in bracket notation, e.g. '[S [Subject 色] 赤 よく 跳ね]'
    tree: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let pack = match &cli.pack {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading language pack {}", path.display()))?;
            LanguagePack::from_json(&text)
                .with_context(|| format!("parsing language pack {}", path.display()))?
        }
        None => LanguagePack::from_json(DEFAULT_PACK).context("parsing built-in pack")?,
    };

    match &cli.tree {
        Some(notation) => run_line(notation, &pack),
        None => repl(&pack),
    }
}

/// Fold one sentence and print `expression => assignment` lines.
fn run_line(notation: &str, pack: &LanguagePack) -> Result<()> {
    let root = Node::parse(notation)?;
    let exprs = fold(&root, &pack.classes);
    debug!("folded {} expression(s)", exprs.len());

    for (expr, assignment) in exprs.iter().zip(convert(&exprs, &pack.lexicon)) {
        println!("{} => {}", expr, assignment);
    }
    Ok(())
}

fn repl(pack: &LanguagePack) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("kotoba> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;
                if let Err(err) = run_line(line, pack) {
                    eprintln!("error: {err}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
