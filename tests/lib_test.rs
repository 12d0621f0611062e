//! Library integration tests.

use podpin::PodpinError;

#[test]
fn error_types_are_public() {
    let err = PodpinError::InstallFailed {
        version: "1.11.3".into(),
        code: Some(1),
    };
    assert!(err.to_string().contains("1.11.3"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> podpin::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use podpin::cli::{Cli, Commands};

    let cli = Cli::parse_from(["podpin", "status", "--expect", "1.11.3"]);

    if let Commands::Status(args) = cli.command {
        assert_eq!(args.expect.as_deref(), Some("1.11.3"));
    } else {
        panic!("Expected Status command");
    }
}
