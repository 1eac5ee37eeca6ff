use clap::Parser;
use hello_fortune::utils::{logger, validation::Validate};
use hello_fortune::{
    load_fortunes, CliConfig, FortuneList, FortuneProvider, HelloApp, HelloError, OutputFormat,
    SystemClock,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::debug!("Run failed: {:?}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), HelloError> {
    config.validate()?;

    let fortunes = match &config.fortunes {
        Some(path) => load_fortunes(path)?,
        None => FortuneList::builtin(),
    };

    let app = HelloApp::new(FortuneProvider::new(fortunes), SystemClock)
        .with_fortune(config.fortune);
    let report = app.run(config.who());

    match config.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
