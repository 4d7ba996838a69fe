use clap::Parser;
use tedious::app::App;
use tedious::cli::Args;
use tedious::config::Config;
use tedious::speech::Speech;
use tedious::ui::TuiManager;
use tedious::{input, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    config.apply_args(&args);
    config.validate()?;

    logging::init(&config.log)?;
    tracing::info!("Starting tedious v{}", env!("CARGO_PKG_VERSION"));

    // Fail on a bad file before the terminal switches to the alternate screen
    let preload = args
        .file
        .as_ref()
        .map(|path| input::file::load(path))
        .transpose()?;

    let speech = Speech::detect(config.speech.enabled);
    let mut app = App::new(&config, speech);
    if let Some(loaded) = preload {
        app.load_text(loaded);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
