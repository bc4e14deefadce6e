use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["gmx-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["gmx-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn extract_without_flags_defaults_to_prompting() {
    let cli = Cli::try_parse_from(["gmx-cli", "extract"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Extract {
            keyword: None,
            location: None,
            dry_run: false
        })
    ));
}

#[test]
fn extract_with_keyword_and_location() {
    let cli = Cli::try_parse_from([
        "gmx-cli",
        "extract",
        "--keyword",
        "IT Company",
        "--location",
        "New York",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Extract {
            keyword: Some(ref k),
            location: Some(ref l),
            dry_run: false
        }) if k == "IT Company" && l == "New York"
    ));
}

#[test]
fn extract_dry_run() {
    let cli = Cli::try_parse_from(["gmx-cli", "extract", "--dry-run"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Extract { dry_run: true, .. })
    ));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["gmx-cli", "report"]).is_err());
}

fn config_with_database_url(database_url: Option<&str>) -> gmx_core::AppConfig {
    gmx_core::AppConfig {
        database_url: database_url.map(str::to_owned),
        google_api_key: "key".to_string(),
        log_level: "info".to_string(),
        db_max_connections: 5,
        db_min_connections: 1,
        db_acquire_timeout_secs: 10,
        places_request_timeout_secs: 30,
        places_user_agent: "ua".to_string(),
        details_concurrency: 1,
    }
}

#[test]
fn require_database_url_returns_configured_url() {
    let config = config_with_database_url(Some("postgres://example"));
    assert_eq!(
        require_database_url(&config, "db ping").unwrap(),
        "postgres://example"
    );
}

#[test]
fn require_database_url_names_the_command_when_unset() {
    let config = config_with_database_url(None);
    let err = require_database_url(&config, "db ping").unwrap_err();
    assert!(
        err.to_string().contains("DATABASE_URL is not set; cannot run db ping"),
        "unexpected error: {err}"
    );
}
