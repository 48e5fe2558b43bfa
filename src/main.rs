//! snptraits: a thin command-line demonstration over the library.
//!
//! This binary is not part of the crate's contract — it exists to make the
//! library's operations exercisable from a shell. Every subcommand is a
//! direct forward onto a `snptraits` library call.

use clap::{Parser, Subcommand};
use snptraits::generate::{self, GenerateConfig};
use snptraits::genome::Genome;
use snptraits::parser;
use snptraits::setops;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "snptraits")]
#[command(version)]
#[command(about = "Parse and query personal genotyping SNP files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a genotype file and print summary stats.
    Stats {
        /// Input genotype file.
        input: PathBuf,
    },
    /// Parse a genotype file and look up one RSID.
    Lookup {
        /// Input genotype file.
        input: PathBuf,
        /// RSID to look up, e.g. 123 or -456 for an internal id.
        rsid: i32,
    },
    /// RSIDs present in both files.
    IntersectRsid { a: PathBuf, b: PathBuf },
    /// RSIDs present in both files with matching genotype calls.
    IntersectSnp { a: PathBuf, b: PathBuf },
    /// Generate a synthetic genotype file, for benchmarking and fixtures.
    Generate {
        /// Output path.
        output: PathBuf,
        /// Number of records to write.
        #[arg(long, default_value_t = 100_000)]
        count: usize,
        /// RNG seed; the same seed always produces the same file.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn load(path: &PathBuf) -> Genome {
    let mut genome = Genome::default();
    if let Err(e) = parser::parse_file(path, &mut genome) {
        eprintln!("error reading {}: {e}", path.display());
        process::exit(1);
    }
    genome
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { input } => {
            let genome = load(&input);
            println!("records: {}", genome.len());
            println!("first rsid: {}", genome.first());
            println!("last rsid: {}", genome.last());
            println!("y_chromosome: {}", genome.y_chromosome());
            println!("load_factor: {:.3}", genome.load_factor());
        }
        Commands::Lookup { input, rsid } => {
            let genome = load(&input);
            if genome.has(rsid) {
                let snp = genome.lookup(rsid);
                println!(
                    "{rsid}\tchr{}\t{}\t{}",
                    snp.chromosome, snp.position, snp.genotype
                );
            } else {
                eprintln!("no such rsid: {rsid}");
                process::exit(1);
            }
        }
        Commands::IntersectRsid { a, b } => {
            let ga = load(&a);
            let gb = load(&b);
            for rsid in setops::intersect_rsid(&ga, &gb) {
                println!("{rsid}");
            }
        }
        Commands::IntersectSnp { a, b } => {
            let ga = load(&a);
            let gb = load(&b);
            for rsid in setops::intersect_snp(&ga, &gb) {
                println!("{rsid}");
            }
        }
        Commands::Generate {
            output,
            count,
            seed,
        } => {
            let config = GenerateConfig {
                count,
                seed,
                ..GenerateConfig::default()
            };
            if let Err(e) = generate::write_file(&output, config) {
                eprintln!("error writing {}: {e}", output.display());
                process::exit(1);
            }
            println!("wrote {count} records to {}", output.display());
        }
    }
}
