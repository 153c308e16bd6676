//! `jpvocab`: vocabulary frequency reports for Japanese text.
//!
//! Reads a UTF-8 text file (or stdin), runs it through MeCab, and prints the
//! most frequent vocabulary words keyed by dictionary form.

mod output;

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use mecab_runner::{Analyzer, MecabCommand};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use vocab_freq::{count_scalar_values, count_unique_words};

use crate::output::{render_json, render_table};

const DEFAULT_TOP: usize = 50;
const USAGE: &str = "usage: jpvocab [--top N] [--json] [--mecab-path <exe>] <file | ->";

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let text = read_input(&config.input)?;
    info!(
        "read {} characters from {}",
        count_scalar_values(&text),
        config.input.display()
    );

    let analyzer = match &config.mecab_path {
        Some(path) => MecabCommand::with_program(path),
        None => MecabCommand::new(),
    };
    info!("analyzing with {}", analyzer.program().display());
    let report = analyzer
        .analyze(&text)
        .context("morphological analysis failed")?;

    let counts = count_unique_words(&report);
    info!("{} distinct vocabulary words", counts.len());

    if config.json {
        println!("{}", render_json(&counts)?);
    } else {
        print!("{}", render_table(&counts, config.top));
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    input: PathBuf,
    top: usize,
    json: bool,
    mecab_path: Option<PathBuf>,
}

fn load_config() -> Result<Config> {
    let default_top = env::var("JPVOCAB_TOP")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TOP);
    parse_args(env::args().skip(1), default_top)
}

fn parse_args(args: impl Iterator<Item = String>, default_top: usize) -> Result<Config> {
    let mut input: Option<PathBuf> = None;
    let mut top = default_top;
    let mut json = false;
    let mut mecab_path: Option<PathBuf> = None;

    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--top" => {
                let value = args.next().with_context(|| format!("--top needs a value\n{USAGE}"))?;
                top = parse_top(&value)?;
            }
            "--mecab-path" => {
                let value = args
                    .next()
                    .with_context(|| format!("--mecab-path needs a value\n{USAGE}"))?;
                mecab_path = Some(PathBuf::from(value));
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--top=") {
                    top = parse_top(value)?;
                } else if let Some(value) = arg.strip_prefix("--mecab-path=") {
                    mecab_path = Some(PathBuf::from(value));
                } else if arg.starts_with("--") {
                    bail!("unknown flag `{arg}`\n{USAGE}");
                } else if input.is_some() {
                    bail!("more than one input given\n{USAGE}");
                } else {
                    input = Some(PathBuf::from(arg));
                }
            }
        }
    }

    let Some(input) = input else {
        bail!("no input given\n{USAGE}");
    };
    Ok(Config {
        input,
        top,
        json,
        mecab_path,
    })
}

fn parse_top(raw: &str) -> Result<usize> {
    let top: usize = raw
        .parse()
        .with_context(|| format!("--top expects a number, got `{raw}`"))?;
    if top == 0 {
        bail!("--top must be at least 1");
    }
    Ok(top)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> impl Iterator<Item = String> + use<> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn positional_input_with_defaults() {
        let config = parse_args(args(&["book.txt"]), DEFAULT_TOP).expect("parse");
        assert_eq!(config.input, PathBuf::from("book.txt"));
        assert_eq!(config.top, DEFAULT_TOP);
        assert!(!config.json);
        assert!(config.mecab_path.is_none());
    }

    #[test]
    fn flags_in_both_spellings() {
        let config = parse_args(
            args(&["--top", "10", "--json", "--mecab-path=/opt/mecab/bin/mecab", "-"]),
            DEFAULT_TOP,
        )
        .expect("parse");
        assert_eq!(config.top, 10);
        assert!(config.json);
        assert_eq!(
            config.mecab_path,
            Some(PathBuf::from("/opt/mecab/bin/mecab"))
        );
        assert_eq!(config.input, PathBuf::from("-"));

        let config = parse_args(args(&["--top=7", "book.txt"]), DEFAULT_TOP).expect("parse");
        assert_eq!(config.top, 7);
    }

    #[test]
    fn rejects_missing_input_and_bad_flags() {
        assert!(parse_args(args(&[]), DEFAULT_TOP).is_err());
        assert!(parse_args(args(&["--frobnicate", "x.txt"]), DEFAULT_TOP).is_err());
        assert!(parse_args(args(&["a.txt", "b.txt"]), DEFAULT_TOP).is_err());
        assert!(parse_args(args(&["--top", "0", "x.txt"]), DEFAULT_TOP).is_err());
        assert!(parse_args(args(&["--top", "many", "x.txt"]), DEFAULT_TOP).is_err());
    }

    #[test]
    fn reads_a_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all("猫が好き".as_bytes()).expect("write");
        let text = read_input(file.path()).expect("read");
        assert_eq!(text, "猫が好き");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_input(Path::new("/no/such/book.txt")).expect_err("must fail");
        assert!(err.to_string().contains("/no/such/book.txt"));
    }
}
