use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ctfp",
    about = "Runs the category theory exercises and prints what they compute",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    /// Ordinary function composition and its identity laws.
    Compose,

    Memo(MemoArgs),

    Kleisli(KleisliArgs),

    Writer(WriterArgs),

    /// The `Either` coproduct and its factorizer.
    Coproduct,

    /// Areas and circumferences of a few shapes.
    Shapes,

    Reader(ReaderArgs),

    /// Every demo above. The memo demo takes the same flags as `memo`.
    All(MemoArgs),
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Memoize a slow factorial and time two calls")]
pub(crate) struct MemoArgs {
    #[arg(long, default_value_t = 0, help = "the argument to call the factorial with")]
    pub(crate) arg: u32,

    #[arg(
        long,
        env = "CTFP_DELAY_MS",
        default_value_t = 2_000,
        help = "how long the first call sleeps, in milliseconds"
    )]
    pub(crate) delay_ms: u64,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Apply the composed partial function sqrt(1/x)")]
pub(crate) struct KleisliArgs {
    #[arg(allow_negative_numbers = true, help = "the input x")]
    pub(crate) x: f64,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Upper-case and split a string, printing the log")]
pub(crate) struct WriterArgs {
    #[arg(help = "the text to process")]
    pub(crate) text: String,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Read a float out of a string environment")]
pub(crate) struct ReaderArgs {
    #[arg(help = "the environment to run the reader with")]
    pub(crate) text: String,
}
