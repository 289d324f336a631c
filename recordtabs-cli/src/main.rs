use clap::Parser;
use recordtabs_cli::cli::{Cli, Commands};
use recordtabs_cli::commands::{config, tree};
use recordtabs_cli::error::{handle_cli_result, CliResult};
use recordtabs_cli::logging::configure_logging;
use std::process;

fn main() {
    let cli = Cli::parse();
    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let exit_code = handle_cli_result(run(cli.command));
    process::exit(exit_code);
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Config { format } => config::handle_command(format),
        Commands::Tree {
            fixture,
            hierarchy,
            query,
            post,
            base_url,
            context,
            render,
            format,
        } => tree::handle_command(tree::TreeArgs {
            fixture,
            hierarchy,
            query,
            post,
            base_url,
            context,
            render,
            format,
        }),
    }
}
