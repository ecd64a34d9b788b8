use clap::Parser;
use period::utils::logger;
use period::{CliConfig, Period, PeriodNames};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 載入名稱表
    let names = match &config.names {
        Some(path) => match PeriodNames::from_file(path) {
            Ok(names) => names,
            Err(e) => {
                tracing::error!("❌ Failed to load names from '{}': {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => PeriodNames::english().clone(),
    };
    let names = if config.no_weeks {
        names.without_weeks()
    } else {
        names
    };

    let mut failed = false;
    for input in &config.periods {
        match input.parse::<Period>() {
            Ok(period) => {
                println!("{}\t{}", period, period.format_with_names(&names));
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
