//! Demo CLI for the category theory exercises.

mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;
use ctfp_common::logging::{self, LoggerConfig};

use crate::cli::{Cli, Commands, KleisliArgs, ReaderArgs, WriterArgs};

fn main() -> Result<()> {
    logging::init(LoggerConfig::with_base_name("ctfp"));

    let cli = Cli::parse();
    run(cli.command)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compose => handlers::handle_compose(),
        Commands::Memo(args) => handlers::handle_memo(args),
        Commands::Kleisli(args) => handlers::handle_kleisli(args),
        Commands::Writer(args) => handlers::handle_writer(args),
        Commands::Coproduct => handlers::handle_coproduct(),
        Commands::Shapes => handlers::handle_shapes(),
        Commands::Reader(args) => handlers::handle_reader(args),
        Commands::All(memo_args) => {
            handlers::handle_compose()?;
            handlers::handle_memo(memo_args)?;
            handlers::handle_kleisli(KleisliArgs { x: 4.0 })?;
            handlers::handle_writer(WriterArgs {
                text: "hello world".to_string(),
            })?;
            handlers::handle_coproduct()?;
            handlers::handle_shapes()?;
            handlers::handle_reader(ReaderArgs {
                text: "42".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    #[test]
    fn parses_memo_flags() {
        let cli = Cli::try_parse_from(["ctfp", "memo", "--arg", "5", "--delay-ms", "10"])
            .expect("valid arguments");
        match cli.command {
            Commands::Memo(args) => {
                assert_eq!(args.arg, 5);
                assert_eq!(args.delay_ms, 10);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn all_forwards_the_memo_delay() {
        let cli = Cli::try_parse_from(["ctfp", "all", "--delay-ms", "25"]).expect("valid arguments");
        match cli.command {
            Commands::All(args) => {
                assert_eq!(args.delay_ms, 25);
                assert_eq!(args.arg, 0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_negative_kleisli_input() {
        let cli = Cli::try_parse_from(["ctfp", "kleisli", "-4"]).expect("valid arguments");
        assert!(matches!(cli.command, Commands::Kleisli(args) if args.x == -4.0));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["ctfp", "monad"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
