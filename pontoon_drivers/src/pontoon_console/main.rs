use clap::Parser;
use pontoon::{Options, Session};
use pontoon_drivers::parse_config_from_file;

mod input;
mod ui;

const DEFAULT_CONFIG_PATH: &str = "~/.pontoon.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

fn main() {
    env_logger::init();

    let args = CommandLineArgs::parse();
    let options = resolve_options(&args);
    log::debug!("table options: {:?}", options);

    let mut session = Session::new(options);
    let mut input = input::ConsoleInput::new();
    let mut display = ui::ConsoleDisplay::new();
    if let Err(e) = session.run(&mut input, &mut display) {
        eprintln!("The game cannot continue: {}", e);
        std::process::exit(1);
    }
}

/// Resolves the table options, preferring an explicit --config path, then a
/// config file in the home directory, then the built-in defaults.
fn resolve_options(args: &CommandLineArgs) -> Options {
    if args.config == DEFAULT_CONFIG_PATH {
        let home_dir = home::home_dir().expect("Cannot find home directory");
        let config_file_path = home_dir.join(".pontoon.yml");
        if !config_file_path.exists() {
            return Options::default();
        }
        let path = config_file_path
            .to_str()
            .expect("Config path is not valid UTF-8");
        let config = parse_config_from_file(path);
        config.table.try_into().expect("Invalid config values")
    } else {
        let config = parse_config_from_file(&args.config);
        config.table.try_into().expect("Invalid config values")
    }
}
