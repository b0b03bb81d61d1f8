use clap::Parser;

use termuwu::cli::{self, Args, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Command::Show(show) => cli::run_show(&show, args.config.as_deref()),
        Command::Config { action } => cli::handle_config_action(action, args.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
