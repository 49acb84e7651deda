use clap::Parser;

use mrun::{
    app::{App, AppError},
    logging,
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mrun")]
struct Args {
    #[clap(short, long, help = "Seed for deterministic maze generation")]
    seed: Option<u64>,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.reset_config {
        Settings::reset_config(Settings::default_path());
        return Ok(());
    }

    if args.show_config_path {
        println!("{}", Settings::default_path().display());
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(Settings::default_path());
    logging::init(settings.get_log_level());

    App::new(settings, args.seed).run()
}
