use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use pdnf_rs::formula::Formula;
use pdnf_rs::truth_table::TableConfig;

/// Print the principal disjunctive normal form of each formula, one per line.
#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// File with one formula per line (standard input if absent or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the truth table of each formula
    #[arg(long)]
    table: bool,

    /// Number of truth table rows shown before folding
    #[arg(long, value_name = "N", default_value_t = TableConfig::default().fold_line)]
    fold: usize,

    /// Print every truth table row
    #[arg(long)]
    no_fold: bool,

    /// Print the postfix form of each formula
    #[arg(long)]
    postfix: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// What to print for each formula besides its PDNF.
#[derive(Debug, Clone, Default)]
struct Output {
    postfix: bool,
    table: Option<TableConfig>,
}

impl From<&Cli> for Output {
    fn from(args: &Cli) -> Self {
        Self {
            postfix: args.postfix,
            table: args.table.then(|| TableConfig {
                fold: !args.no_fold,
                fold_line: args.fold,
            }),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    TermLogger::init(args.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).wrap_err_with(|| format!("Could not open '{}'", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let failed = process(reader, &mut stdout.lock(), &Output::from(&args))?;
    info!("done, {} formula(s) rejected", failed);

    Ok(())
}

/// Compiles every non-blank line of `reader`, writing results to `out`.
///
/// A formula that fails is logged and skipped. Returns the number of such
/// formulas; only I/O errors abort.
fn process(reader: impl BufRead, out: &mut impl Write, output: &Output) -> color_eyre::Result<usize> {
    let mut failed = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line.wrap_err("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match render(&line, output) {
            Ok(text) => out.write_all(text.as_bytes())?,
            Err(e) => {
                error!("line {}: {:?}: {}", i + 1, line, e);
                failed += 1;
            }
        }
    }
    Ok(failed)
}

/// Everything printed for one formula, so nothing is written for a formula
/// that fails halfway.
fn render(line: &str, output: &Output) -> pdnf_rs::error::Result<String> {
    let formula = Formula::new(line)?;
    let mut text = String::new();

    if output.postfix {
        text.push_str(&format!("{}\n", formula.postfix()?));
    }
    if let Some(config) = &output.table {
        text.push_str(&formula.truth_table()?.render_with_config(config));
    }
    text.push_str(&format!("{}\n", formula.pdnf()?));

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn run(input: &str, output: &Output) -> (String, usize) {
        let mut out = Vec::new();
        let failed = process(input.as_bytes(), &mut out, output).unwrap();
        (String::from_utf8(out).unwrap(), failed)
    }

    #[test]
    fn test_one_pdnf_per_line() {
        let (out, failed) = run("a+b\n!a\n", &Output::default());
        assert_eq!(out, "ab+a!b+!ab\n!a\n");
        assert_eq!(failed, 0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let (out, failed) = run("\na\n   \n\nb\n", &Output::default());
        assert_eq!(out, "a\nb\n");
        assert_eq!(failed, 0);
    }

    #[test]
    fn test_bad_lines_do_not_stop_processing() {
        let (out, failed) = run("a?b\na\na+\nabcdefghijk\na*!a\n", &Output::default());
        assert_eq!(out, "a\nContradictory Formula\n");
        assert_eq!(failed, 3);
    }

    #[test]
    fn test_postfix_then_table_then_pdnf() {
        let output = Output {
            postfix: true,
            table: Some(TableConfig::default()),
        };
        let (out, _) = run("!a\n", &output);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "a!",
                "     a     Truth Value",
                "----------------------------",
                " False     True",
                "  True     False",
                "!a",
            ]
        );
    }

    #[test]
    fn test_table_folding() {
        let folded = Output {
            postfix: false,
            table: Some(TableConfig { fold: true, fold_line: 2 }),
        };
        let (out, _) = run("abc\n", &folded);
        assert_eq!(out.lines().filter(|l| *l == "......").count(), 1);

        let args = Cli::parse_from(["pdnf", "--table", "--no-fold"]);
        let (out, _) = run("abcd\n", &Output::from(&args));
        assert!(!out.contains("......"));
        assert_eq!(out.lines().count(), 2 + 16 + 1);
    }

    #[test]
    fn test_cli_defaults() {
        let args = Cli::parse_from(["pdnf"]);
        let output = Output::from(&args);
        assert!(!output.postfix);
        assert!(output.table.is_none());
        assert_eq!(args.fold, 10);
        assert_eq!(args.log_level, LevelFilter::Warn);
    }
}
