//! Interactive chess session over stdin/stdout.
//!
//! Run with:
//! `cargo run --release`

use cherry_chess::cli::cli_top::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
