//! Imposter Table Binary
//!
//! Deals a round and walks the group through it on one terminal:
//! each player picks their name, reads their role privately, and clears
//! the screen before handing over. Run with `--help` for setup flags.
mod args;
mod screen;
mod table;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    imp_core::log(args.level())?;
    table::Table::new(&args)?.run()
}
