use clap::Parser;
use smart_grid_gen::cli::{self, Command};
use smart_grid_tracing::{init_tracing_subscriber, println_error};

fn main() {
    let command = Command::parse();
    init_tracing_subscriber(command.tracing_options());
    if let Err(err) = cli::exec(command) {
        println_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
