use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use ptl_dispatch::{Contract, DispatchError, Dispatcher};
use ptl_state::FileStateStore;
use serde_json::json;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(state) = cli.state {
        config.state_path = state;
    }
    let store = FileStateStore::open(&config.state_path)
        .with_context(|| format!("opening state {}", config.state_path.display()))?;
    tracing::debug!(path = %store.path().display(), "state store ready");
    let dispatcher = Dispatcher::with_config(store, config.dispatch);
    let format = cli.format;

    match cli.command {
        Command::Init(args) => cmd_init(&dispatcher, args, format, out),
        Command::Invoke(args) => cmd_invoke(&dispatcher, args, format, out),
        Command::Query(args) => cmd_query(&dispatcher, args, format, out),
        Command::Show(args) => cmd_show(&dispatcher, args, format, out),
    }
}

fn cmd_init(
    d: &Dispatcher<FileStateStore>,
    args: InitArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    d.init(&[args.value])?;
    match format {
        OutputFormat::Text => writeln!(
            out,
            "{} Bootstrap value written to {}",
            "✓".green().bold(),
            d.config().bootstrap_key.yellow()
        )?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "ok": true }))?,
    }
    Ok(())
}

fn cmd_invoke(
    d: &Dispatcher<FileStateStore>,
    args: OperationArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    d.invoke(&args.operation, &args.args)?;
    match format {
        OutputFormat::Text => writeln!(out, "{} {}", "✓".green().bold(), args.operation.bold())?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "ok": true }))?,
    }
    Ok(())
}

fn cmd_query(
    d: &Dispatcher<FileStateStore>,
    args: OperationArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let result = d.query(&args.operation, &args.args)?;
    match format {
        OutputFormat::Text => writeln!(out, "{}", String::from_utf8_lossy(&result))?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            json!({ "result": String::from_utf8_lossy(&result) })
        )?,
    }
    Ok(())
}

fn cmd_show(
    d: &Dispatcher<FileStateStore>,
    args: ShowArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let history = d
        .engine()
        .load(&args.product_id)
        .map_err(DispatchError::from)?;
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?,
        OutputFormat::Text if history.is_empty() => {
            writeln!(out, "No entries for {}.", args.product_id.yellow())?
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "{} ({} entries)",
                args.product_id.yellow().bold(),
                history.len()
            )?;
            for (i, entry) in history.iter().enumerate() {
                writeln!(
                    out,
                    "  {}  {}  {}  {}",
                    format!("#{}", i + 1).dimmed(),
                    entry.place_id.cyan(),
                    entry.temperature,
                    entry.timestamp.dimmed()
                )?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ptl_dispatch::ErrorKind;

    fn run(state: &std::path::Path, argv: &[&str]) -> anyhow::Result<String> {
        colored::control::set_override(false);
        let mut full = vec!["ptl", "--state", state.to_str().unwrap()];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full)?;
        let mut out = Vec::new();
        run_command(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn init_then_query_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("state.json");
        let out = run(&state, &["init", "seed"]).unwrap();
        assert!(out.contains("hello_world"));
        let out = run(&state, &["query", "read", "hello_world"]).unwrap();
        assert_eq!(out.trim(), "seed");
    }

    #[test]
    fn writes_persist_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("state.json");
        run(&state, &["invoke", "write", "P1", "Loc1", "21.5", "t1"]).unwrap();
        run(&state, &["invoke", "write", "P1", "Loc2", "-3", "t2"]).unwrap();

        let out = run(&state, &["show", "P1"]).unwrap();
        assert!(out.contains("P1 (2 entries)"));
        assert!(out.contains("#1  Loc1  21.5  t1"));
        assert!(out.contains("#2  Loc2  -3  t2"));

        let out = run(&state, &["--format", "json", "show", "P1"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[1]["placeid"], "Loc2");
    }

    #[test]
    fn state_in_missing_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("data").join("state.json");
        run(&state, &["init", "seed"]).unwrap();
        assert!(state.exists());
        let out = run(&state, &["query", "read", "hello_world"]).unwrap();
        assert_eq!(out.trim(), "seed");
    }

    #[test]
    fn store_failure_message_is_not_repeated() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("s.json");
        // The snapshot's temp file cannot be created over a directory.
        std::fs::create_dir(dir.path().join("s.json.tmp")).unwrap();
        let err = run(&state, &["init", "seed"]).unwrap_err();
        let dispatch = err.downcast_ref::<DispatchError>().unwrap();
        assert_eq!(dispatch.kind(), ErrorKind::StoreUnavailable);
        let message = err.to_string();
        assert!(message.starts_with("store unavailable: I/O error"));
        assert_eq!(message.matches("store unavailable").count(), 1);
    }

    #[test]
    fn show_unknown_product() {
        let dir = tempfile::tempdir().unwrap();
        let out = run(&dir.path().join("s.json"), &["show", "P9"]).unwrap();
        assert!(out.contains("No entries for P9."));
    }

    #[test]
    fn dispatch_errors_carry_kind() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("s.json");
        let err = run(&state, &["invoke", "write", "P1"]).unwrap_err();
        let kind = err.downcast_ref::<DispatchError>().map(DispatchError::kind);
        assert_eq!(kind, Some(ErrorKind::InvalidArguments));
        assert!(err.to_string().starts_with("incorrect number of arguments for 'write'"));

        let err = run(&state, &["invoke", "bogus", "x"]).unwrap_err();
        let kind = err.downcast_ref::<DispatchError>().map(DispatchError::kind);
        assert_eq!(kind, Some(ErrorKind::UnknownOperation));
        assert_eq!(err.to_string(), "unknown invoke operation: 'bogus'");
    }

    #[test]
    fn json_query_wraps_result() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("s.json");
        run(&state, &["init", "seed"]).unwrap();
        let out = run(&state, &["--format", "json", "query", "read", "hello_world"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["result"], "seed");
    }
}
