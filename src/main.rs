use clap::Parser;
use f1_pickem::config::Command;
use f1_pickem::utils::error::ErrorSeverity;
use f1_pickem::utils::{logger, validation::Validate};
use f1_pickem::{CliConfig, ErgastClient, FetchContext, PickemError, RaceDataClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let config = match config.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let client = ErgastClient::from_config(&config)?;
    let ctx = FetchContext::background();

    let output = match &config.command {
        Command::Races { season } => client
            .get_races(&ctx, season)
            .await
            .and_then(|races| Ok(serde_json::to_string_pretty(&races)?)),
        Command::Results {
            season,
            race_number,
        } => client
            .get_race_results(&ctx, season, race_number)
            .await
            .and_then(|results| Ok(serde_json::to_string_pretty(&results)?)),
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &PickemError) -> ! {
    tracing::error!(
        "Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2, // worth retrying
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
