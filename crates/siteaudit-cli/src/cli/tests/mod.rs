use super::*;


fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["siteaudit", "--config", "/tmp/sa.toml", "reports"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/sa.toml")));
    assert!(matches!(cli.command, CliCommand::Reports));
}

#[test]
fn cli_parse_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["siteaudit", "config", "--config", "x.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["siteaudit", "crawl"]).is_err());
}
