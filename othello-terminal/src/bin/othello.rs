use othello_engine::{BoardConfig, Game};
use othello_terminal::{Session, TerminalConnector};
use std::error::Error;
use std::io;

const USAGE: &str = "usage: othello [ROWSxCOLS]";

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config: BoardConfig = match std::env::args().nth(1) {
        Some(size) => size.parse()?,
        None => BoardConfig::default(),
    };
    let game = Game::with_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let connector = TerminalConnector::new(stdin.lock(), stdout.lock());

    Session::new(game, connector).run()?;
    Ok(())
}
