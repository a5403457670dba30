//! RV32 memory backend CLI.
//!
//! This binary loads a program's hex images the way the simulator does and
//! lets the user inspect the result. It performs:
//! 1. **Region table:** Print every region's base, size and capacity.
//! 2. **Memory dump:** Print (or write to a file) the words in an address range.
//! 3. **Word read:** Print a single word, failing if the access would halt the machine.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rvmem_core::config::Config;
use rvmem_core::core::CpuState;
use rvmem_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "rvmem",
    author,
    version,
    about = "Inspect RV32 program images through the simulator's memory backend",
    long_about = "Loads <program>.text.hex, <program>.data.hex, <program>.ktext.hex and \
                  <program>.kdata.hex into the simulated address space.\n\nExamples:\n  \
                  rvmem regions build/hello\n  \
                  rvmem mdump build/hello 0x00400000 0x0040001c\n  \
                  rvmem read build/hello 0x10000000"
)]
struct Cli {
    /// JSON configuration overriding the default memory map.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program and print its region table.
    Regions {
        /// Program path prefix shared by the hex images.
        program: PathBuf,
    },

    /// Dump the words from START through END (inclusive).
    Mdump {
        /// Program path prefix shared by the hex images.
        program: PathBuf,
        /// First address (hex with 0x prefix, or decimal).
        #[arg(value_parser = parse_addr)]
        start: u32,
        /// Last address (hex with 0x prefix, or decimal).
        #[arg(value_parser = parse_addr)]
        end: u32,
        /// Write the dump to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read a single word.
    Read {
        /// Program path prefix shared by the hex images.
        program: PathBuf,
        /// Address to read (hex with 0x prefix, or decimal).
        #[arg(value_parser = parse_addr)]
        addr: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Regions { program } => cmd_regions(&config, &program),
        Commands::Mdump {
            program,
            start,
            end,
            output,
        } => cmd_mdump(&config, &program, start, end, output.as_deref()),
        Commands::Read { program, addr } => cmd_read(&config, &program, addr),
    }
}

/// Reads the configuration file if one was given, otherwise the defaults.
/// Exits with code 1 on an unreadable or invalid file.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    Config::from_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    })
}

/// Builds a machine and loads `program`, exiting with code 1 if loading fails.
fn load(config: &Config, program: &Path) -> CpuState {
    let mut cpu = CpuState::new(config);
    if let Err(e) = loader::load_program(&mut cpu, program) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    cpu
}

fn cmd_regions(config: &Config, program: &Path) {
    let cpu = load(config, program);

    println!(
        "{:<6} {:>10} {:>10} {:>10} {:>10}",
        "region", "base", "end", "size", "max_size"
    );
    for region in cpu.memory.regions() {
        println!(
            "{:<6} {:#010x} {:#010x} {:#10x} {:#10x}",
            region.role().name(),
            region.base_addr(),
            region.end_addr(),
            region.size(),
            region.max_size()
        );
    }
    println!();
    println!("pc={:#010x}", cpu.pc);
    print!("{}", cpu.regs.dump());
}

fn cmd_mdump(config: &Config, program: &Path, start: u32, end: u32, output: Option<&Path>) {
    let cpu = load(config, program);

    let words = match cpu.memory.dump_words(start, end) {
        Ok(words) => words,
        Err(fault) => {
            eprintln!("Error: cannot dump [{start:#010x}, {end:#010x}]: {fault}");
            process::exit(1);
        }
    };

    let result = match output {
        Some(path) => File::create(path).and_then(|f| write_dump(BufWriter::new(f), &words)),
        None => write_dump(io::stdout().lock(), &words),
    };
    if let Err(e) = result {
        eprintln!("Error: unable to write memory dump: {e}");
        process::exit(1);
    }
}

fn write_dump<W: Write>(mut out: W, words: &[(u32, u32)]) -> io::Result<()> {
    for (addr, word) in words {
        writeln!(out, "{addr:#010x}: {word:#010x}")?;
    }
    out.flush()
}

fn cmd_read(config: &Config, program: &Path, addr: u32) {
    let mut cpu = load(config, program);
    let value = cpu.mem_read32(addr);
    if cpu.halted {
        process::exit(2);
    }
    println!("{addr:#010x}: {value:#010x}");
}

/// Parses a 32-bit address written as `0x`-prefixed hex or decimal.
fn parse_addr(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid address '{s}': {e}"))
}
