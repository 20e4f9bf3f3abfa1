use std::io;
use std::process::exit;

use find_git::config::{build_cli, AppConfig};
use find_git::logging::init_logging;
use find_git::{resolve_root, run};

fn main() {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);

    if let Err(err) = init_logging(config.verbose) {
        eprintln!("Failed to initialise logging: {}", err);
    }
    log::debug!("{:?}", config);

    let result = resolve_root().and_then(|root| {
        log::debug!("scanning {}", root.display());
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&root, &mut out)
    });

    if let Err(err) = result {
        // "<context>: <cause>" on a single line.
        eprintln!("{:#}", err);
        exit(1);
    }
}
