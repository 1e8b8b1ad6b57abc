use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["tree-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.root.is_none());
            assert!(args.script.is_none());
            assert_eq!(args.format, OutputFormat::Csv);
            assert!(args.output.is_none());
            assert!(!args.warn_only);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_root_and_script() {
    let cli = Cli::parse_from(["tree-guard", "check", "data", "-s", "layout.toml"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.root, Some(PathBuf::from("data")));
            assert_eq!(args.script, Some(PathBuf::from("layout.toml")));
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_format_and_output() {
    let cli = Cli::parse_from([
        "tree-guard",
        "check",
        "--format",
        "json",
        "--output",
        "report.json",
        "--warn-only",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.output, Some(PathBuf::from("report.json")));
            assert!(args.warn_only);
        }
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["tree-guard", "check", "-f", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["tree-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".tree-guard.toml"));
            assert!(!args.force);
        }
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_force() {
    let cli = Cli::parse_from(["tree-guard", "init", "-o", "layout.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("layout.toml"));
            assert!(args.force);
        }
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["tree-guard", "check", "-vv", "--color", "never"]);
    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));

    let cli = Cli::parse_from(["tree-guard", "-q", "init"]);
    assert!(cli.quiet);
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["tree-guard"]).is_err());
}
