//! gen-version-vars - docker-bake version variables from poetry.lock

use clap::Parser;

use image_pins::cli::GenVersionVarsCli;

fn main() {
    let cli = GenVersionVarsCli::parse();
    image_pins::logging::init();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
