use crate::cli::{Cli, run};
use clap::{CommandFactory, Parser};
use stack_logger::{Buffer, Inspector, Method, Output, StackLogger};
use std::rc::Rc;

/// Parse `args` and run them against buffers, returning (stdout, stderr)
fn run_captured(args: &[&str]) -> (String, String) {
    let cli = Cli::try_parse_from(std::iter::once("stack-logger").chain(args.iter().copied()))
        .expect("arguments should parse");

    let (stdout, stderr) = (Buffer::new(), Buffer::new());
    let logger = StackLogger::new(cli.options().expect("options should load"))
        .with_output(Output::new(stdout.clone(), stderr.clone()))
        .with_formatter(Rc::new(Inspector::plain()));

    run(&cli, logger, cli.messages.iter().cloned().map(Ok)).expect("run failed");

    (stdout.contents(), stderr.contents())
}

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_default_staircase() {
    let (stdout, stderr) = run_captured(&["build", "compile", "link"]);
    insta::assert_snapshot!(stdout, @r"
    build
      compile
        link
    ");
    assert_eq!(stderr, "");
}

#[test]
fn test_flags_shape_output() {
    let (stdout, stderr) = run_captured(&[
        "--indentor",
        ".",
        "--indent-size",
        "1",
        "--method",
        "warn",
        "a",
        "b",
    ]);
    assert_eq!(stdout, "");
    assert_eq!(stderr, "a\n.b\n");
}

#[test]
fn test_no_auto_tick() {
    let (stdout, _) = run_captured(&["--no-auto-tick", "--indent", "2", "a", "b"]);
    assert_eq!(stdout, "  a\n  b\n");
}

#[test]
fn test_write_method_concatenates() {
    let (stdout, _) = run_captured(&["--method", "write", "--indent", "4", "a", "b"]);
    assert_eq!(stdout, "ab");
}

#[test]
fn test_json_messages() {
    let (stdout, _) = run_captured(&["--json", "--indent-size", "0", "42", r#"{"k":[1]}"#, "plain"]);
    assert_eq!(stdout, "42\n{ k: [ 1 ] }\nplain\n");
}

#[test]
fn test_json_keys_stay_in_input_order() {
    let (stdout, _) = run_captured(&["--json", r#"{"zone":"eu","app":"web","id":3}"#]);
    assert_eq!(stdout, "{ zone: 'eu', app: 'web', id: 3 }\n");
}

#[test]
fn test_config_file_under_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("logger.json");
    std::fs::write(&config, r#"{"indentor": "~", "indentSize": 3, "indent": 9}"#).unwrap();

    let config = config.to_string_lossy().into_owned();
    let (stdout, _) = run_captured(&["--config", config.as_str(), "--indent", "1", "x", "y"]);
    assert_eq!(stdout, "~x\n~~~~y\n");
}

#[test]
fn test_default_method_is_log() {
    let cli = Cli::try_parse_from(["stack-logger"]).unwrap();
    assert_eq!(cli.method, Method::Log);
    assert!(cli.messages.is_empty());
    assert!(Cli::try_parse_from(["stack-logger", "--method", "shout"]).is_err());
}
