//! lock-base-images - pin base images to registry digests

use clap::Parser;

use image_pins::cli::LockBaseImagesCli;

#[tokio::main]
async fn main() {
    let cli = LockBaseImagesCli::parse();
    image_pins::logging::init();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
