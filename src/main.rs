use std::io;

use eat_n_split::ledger::{run_dispatcher, Config, Session};

pub fn main() {
    pretty_env_logger::init();
    dotenv::dotenv().ok();

    let config = Config::from_env();
    log::info!("Starting session with {:?}", config);
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = run_dispatcher(&mut session, stdin.lock(), &mut stdout) {
        log::error!("Session stopped: {}", err);
        std::process::exit(1);
    }
}
