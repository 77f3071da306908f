use clap::{ArgEnum, Parser};
use log::info;
use std::{fmt::Display, fmt::Formatter};

use crate::huffman_coding::codec::{CodecConfig, DEFAULT_THRESHOLD};
use crate::huffman_coding::symbol_table::SymbolLookup;
use crate::huffman_coding::tree::TreeStrategy;
use crate::tools::freq_count::CountMode;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

impl Verbosity {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where the demo text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text given on the command line
    Literal(String),
    /// Random paragraph of this many letters
    Random { size: usize, capitals: bool },
}
impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Literal(text) => write!(f, "literal text ({} chars)", text.chars().count()),
            Source::Random { size, .. } => write!(f, "random paragraph ({} letters)", size),
        }
    }
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Text to compress
    pub source: Source,
    /// Seed for the random paragraph; None picks one at random
    pub seed: Option<u64>,
    /// Codec settings
    pub config: CodecConfig,
    /// Also pack the encoded bits into bytes and decode from those
    pub packed: bool,
    /// Print the symbol table
    pub show_table: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Parallel Huffman text codec demo",
    long_about = "
    Counts symbol frequencies, builds a Huffman tree, encodes the text to a bit-string
    and decodes it again. Counting, codeword assignment and encoding split their work
    fork-join style above the sequential threshold."
)]
pub struct Args {
    /// Text to compress. A random paragraph is generated when omitted.
    #[clap()]
    text: Option<String>,

    /// Letters in the random paragraph
    #[clap(short = 's', long = "size", default_value_t = 64)]
    size: usize,

    /// Use capital letters in the random paragraph
    #[clap(short = 'C', long = "capitals")]
    capitals: bool,

    /// Seed for the random paragraph
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Ranges of at most this many symbols are processed without forking
    #[clap(short = 't', long = "threshold", default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Tree construction algorithm
    #[clap(long = "strategy", arg_enum, default_value = "priority-queue")]
    strategy: StrategyArg,

    /// How concurrent counting chunks share the table
    #[clap(long = "count-mode", arg_enum, default_value = "merged")]
    count_mode: CountModeArg,

    /// How symbols are looked up in the table
    #[clap(long = "lookup", arg_enum, default_value = "scan")]
    lookup: LookupArg,

    /// Pack the encoded bits into bytes and decode from those
    #[clap(short = 'p', long = "packed")]
    packed: bool,

    /// Do not print the symbol table
    #[clap(short = 'q', long = "no-table")]
    no_table: bool,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum StrategyArg {
    PriorityQueue,
    LinearMerge,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum CountModeArg {
    Locked,
    Merged,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum LookupArg {
    Scan,
    Hashed,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let source = match args.text {
            Some(text) => Source::Literal(text),
            None => Source::Random {
                size: args.size,
                capitals: args.capitals,
            },
        };
        let config = CodecConfig {
            threshold: args.threshold,
            strategy: match args.strategy {
                StrategyArg::PriorityQueue => TreeStrategy::PriorityQueue,
                StrategyArg::LinearMerge => TreeStrategy::LinearMerge,
            },
            count_mode: match args.count_mode {
                CountModeArg::Locked => CountMode::Locked,
                CountModeArg::Merged => CountMode::Merged,
            },
            lookup: match args.lookup {
                LookupArg::Scan => SymbolLookup::Scan,
                LookupArg::Hashed => SymbolLookup::Hashed,
            },
        };
        HuffOpts {
            source,
            seed: args.seed,
            config,
            packed: args.packed,
            show_table: !args.no_table,
            verbose: Verbosity::from(args.v),
        }
    }
}

/// Parse the process arguments, set the log level and report the settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Input is {}", opts.source);
    info!("Sequential threshold set to {}", opts.config.threshold);
    info!("Tree strategy set to {:?}", opts.config.strategy);
    info!("Count mode set to {:?}", opts.config.count_mode);
    if opts.packed {
        info!("Packing encoded bits")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::*;

    fn opts(args: &[&str]) -> HuffOpts {
        HuffOpts::from(Args::parse_from(std::iter::once("parhuff").chain(args.iter().copied())))
    }

    #[test]
    fn defaults() {
        let o = opts(&[]);
        assert_eq!(
            o.source,
            Source::Random {
                size: 64,
                capitals: false
            }
        );
        assert_eq!(o.config, CodecConfig::default());
        assert_eq!(o.verbose, Verbosity::Info);
        assert!(o.show_table);
        assert!(!o.packed);
        assert_eq!(o.seed, None);
    }

    #[test]
    fn literal_text_and_settings() {
        let o = opts(&[
            "hello world",
            "-t",
            "16",
            "--strategy",
            "linear-merge",
            "--count-mode",
            "locked",
            "--lookup",
            "hashed",
            "-p",
            "-v",
            "5",
        ]);
        assert_eq!(o.source, Source::Literal("hello world".to_string()));
        assert_eq!(o.config.threshold, 16);
        assert_eq!(o.config.strategy, TreeStrategy::LinearMerge);
        assert_eq!(o.config.count_mode, CountMode::Locked);
        assert_eq!(o.config.lookup, SymbolLookup::Hashed);
        assert!(o.packed);
        assert_eq!(o.verbose, Verbosity::Trace);
    }

    #[test]
    fn verbosity_takes_a_level() {
        assert_eq!(opts(&["-v1"]).verbose, Verbosity::Errors);
        assert_eq!(opts(&["-v", "0"]).verbose, Verbosity::Quiet);
        assert_eq!(opts(&["-v9"]).verbose, Verbosity::Trace);
        assert_eq!(Verbosity::Warnings.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn random_source_options() {
        let o = opts(&["--size", "10", "-C", "--seed", "9", "-q"]);
        assert_eq!(
            o.source,
            Source::Random {
                size: 10,
                capitals: true
            }
        );
        assert_eq!(o.seed, Some(9));
        assert!(!o.show_table);
    }
}
