use asciify::cli::{Cli, Commands};
use asciify::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions(args)) => asciify::cli::completions::run(args)?,
        None => {
            let printer = Printer::new().with_quiet(cli.convert.quiet);
            asciify::cli::convert::run(cli.convert, &printer)?
        }
    }

    Ok(())
}
