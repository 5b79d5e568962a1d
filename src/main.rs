use clap::Parser;

use literal_guard::cli::{Cli, Commands};
use literal_guard::commands::{run_audit, run_yaml};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Yaml(args) => run_yaml(args, &cli),
        Commands::Audit(args) => run_audit(args, &cli),
    };

    std::process::exit(exit_code);
}
