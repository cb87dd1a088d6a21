//! Library integration tests.

use rumdl_config::ConfigError;

#[test]
fn error_types_are_public() {
    let err = ConfigError::DocumentNotFound {
        path: ".rumdl.toml".into(),
    };
    assert!(err.to_string().contains(".rumdl.toml"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> rumdl_config::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use rumdl_config::cli::{Cli, Commands};

    let cli = Cli::parse_from(["rumdl-config", "explain", "MD013"]);

    if let Commands::Explain(args) = cli.command {
        assert_eq!(args.rule, "MD013");
    } else {
        panic!("Expected Explain command");
    }
}

#[test]
fn ui_types_are_public() {
    use rumdl_config::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::with_mode(OutputMode::Verbose);
    ui.show_hint("Run rumdl-config rules");
    assert!(ui.has_hint("rumdl-config rules"));
}
