//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::error::Error;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use parhuff::tools::cli::{huffopts_init, HuffOpts, Source};
use parhuff::tools::word_gen::random_paragraph;
use parhuff::HuffmanCodec;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), Box<dyn Error>> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )?;

    let opts = huffopts_init();

    let text = match &opts.source {
        Source::Literal(text) => text.clone(),
        Source::Random { size, capitals } => {
            let seed = opts.seed.unwrap_or_else(rand::random);
            info!("Random paragraph seed {}", seed);
            random_paragraph(*size, *capitals, seed)
        }
    };

    if let Err(e) = round_trip(&text, &opts) {
        error!("Fatal error: {}", e);
        return Err(e.into());
    }
    info!("Done.\n");
    Ok(())
}

/// Count, build, encode and decode `text`, printing each stage.
fn round_trip(text: &str, opts: &HuffOpts) -> parhuff::Result<()> {
    println!("---- Input ----\n{}\n", text);

    let mut codec = HuffmanCodec::with_config(text, opts.config)?;
    codec.count_frequencies().build_tree()?;

    if opts.show_table {
        println!("---- Letter Table ----\n{}", codec.display_table());
    }

    let encoded = codec.encode()?;
    println!("---- Encoded ({} bits) ----\n{}\n", encoded.len(), encoded);

    let decoded = if opts.packed {
        let packed = codec.encode_packed()?;
        info!(
            "Packed {} bits into {} bytes ({} bytes of input)",
            packed.bit_len(),
            packed.bytes().len(),
            text.len()
        );
        codec.decode_packed(&packed)?
    } else {
        codec.decode(&encoded)?
    };
    println!("---- Decoded ----\n{}\n", decoded);

    if decoded != text {
        error!("Decoded text does not match the input");
    } else {
        info!(
            "Round trip ok: {} symbols, {} bits",
            codec.len(),
            encoded.len()
        );
    }
    Ok(())
}
