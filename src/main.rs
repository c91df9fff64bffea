use clap::Parser;

use rcrd_scan::cli::{Cli, Commands};
use rcrd_scan::commands::{run_config, run_diff, run_fixture, run_init, run_scan};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
        Commands::Diff(args) => run_diff(args, &cli),
        Commands::Fixture(args) => run_fixture(args, &cli),
    };

    std::process::exit(exit_code);
}
