use super::*;
use pretty_assertions::assert_eq;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_no_args_runs_everything() {
    assert_eq!(Command::parse(&[]), Command::Run(DemoConfig::default()));
}

#[test]
fn test_run_with_options() {
    let command = Command::parse(&args(&["run", "--filter=nest", "-v"]));
    assert_eq!(
        command,
        Command::Run(DemoConfig {
            filter: Some("nest".to_string()),
            verbose: true,
        })
    );
}

#[test]
fn test_flags_without_command() {
    let command = Command::parse(&args(&["--verbose"]));
    assert_eq!(
        command,
        Command::Run(DemoConfig {
            filter: None,
            verbose: true,
        })
    );
}

#[test]
fn test_list_and_help() {
    assert_eq!(Command::parse(&args(&["list"])), Command::List);
    assert_eq!(Command::parse(&args(&["-h"])), Command::Help);
}

#[test]
fn test_unknown() {
    assert_eq!(
        Command::parse(&args(&["frobnicate"])),
        Command::Unknown("frobnicate".to_string())
    );
    assert_eq!(
        Command::parse(&args(&["run", "--fast"])),
        Command::Unknown("--fast".to_string())
    );
}

#[test]
fn test_filter_matches_substring() {
    let config = DemoConfig {
        filter: Some("key".to_string()),
        verbose: false,
    };
    assert!(config.matches("quoted-keys"));
    assert!(!config.matches("arrays"));
    assert!(DemoConfig::default().matches("arrays"));
}
