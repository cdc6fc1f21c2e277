//! # Boleto CLI
//!
//! Command-line interface for bank slip numbers.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a bank slip number (masked or bare digits)
//! boleto show "34191.09008 87379.487108 00106.511017 6 79120000010651"
//!
//! # Same, as JSON
//! boleto show --json 34191090088737948710800106511017679120000010651
//!
//! # Validate many numbers (arguments, or one per line on stdin)
//! boleto validate < numbers.txt
//!
//! # Convert between printed number and barcode
//! boleto barcode 34191090088737948710800106511017679120000010651
//! boleto number 34196791200000106511090087379487100010651101
//!
//! # Save the barcode symbol as PNG
//! boleto render --png slip.png 34191090088737948710800106511017679120000010651
//!
//! # Serve the HTTP API
//! boleto serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;

use boleto::{
    Boleto, BoletoError, bank,
    batch::validate_batch,
    logging,
    server::{self, ServerConfig},
    symbol::{ItfEncoder, PngFileRenderer, SymbolConfig},
};

/// Boleto - Brazilian bank slip utility
#[derive(Parser, Debug)]
#[command(name = "boleto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a bank slip number
    Show {
        /// Printed number (separators are ignored)
        number: String,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate bank slip numbers (reads stdin when none are given)
    Validate {
        numbers: Vec<String>,
    },

    /// Print the 44-digit barcode of a printed number
    Barcode {
        number: String,
    },

    /// Print the 47-digit printed number of a barcode
    Number {
        barcode: String,
    },

    /// Render the barcode symbol to a PNG file
    Render {
        number: String,

        /// Output PNG file
        #[arg(long, value_name = "FILE")]
        png: PathBuf,

        /// Symbol profile (standard, compact)
        #[arg(long, default_value = "standard")]
        profile: String,

        /// Do not print the number under the bars
        #[arg(long)]
        no_caption: bool,
    },

    /// List known banks
    Banks,

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Symbol profile for rendered PNGs
        #[arg(long, default_value = "standard")]
        profile: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run a command. `Ok(false)` means it ran but found invalid input.
fn run(command: Commands) -> Result<bool, BoletoError> {
    match command {
        Commands::Show { number, json } => {
            let boleto = Boleto::new(&number)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&boleto.summary())?);
            } else {
                print_boleto(&boleto);
            }
        }

        Commands::Validate { numbers } => {
            let numbers = if numbers.is_empty() {
                read_numbers(io::stdin().lock())?
            } else {
                numbers
            };

            let results = validate_batch(&numbers);
            let mut all_valid = true;
            for (input, result) in numbers.iter().zip(&results) {
                match result {
                    Ok(boleto) => println!("valid    {}", boleto),
                    Err(e) => {
                        all_valid = false;
                        println!("invalid  {} ({})", input, e);
                    }
                }
            }
            return Ok(all_valid);
        }

        Commands::Barcode { number } => {
            let boleto = Boleto::new(&number)?;
            println!("{}", boleto.barcode());
        }

        Commands::Number { barcode } => {
            let boleto = Boleto::from_barcode(&barcode)?;
            println!("{}", boleto.pretty_number());
        }

        Commands::Render {
            number,
            png,
            profile,
            no_caption,
        } => {
            let config = profile_by_name(&profile)?;
            let boleto = Boleto::new(&number)?;

            let mut renderer = PngFileRenderer::new(config);
            if !no_caption {
                renderer = renderer.with_caption(boleto.pretty_number());
            }
            boleto.render_symbol(&ItfEncoder, &mut renderer, png.as_path())?;
            println!("Saved to {}", png.display());
        }

        Commands::Banks => {
            for (code, name) in bank::BANKS {
                println!("{}  {}", code, name);
            }
        }

        Commands::Serve { listen, profile } => {
            let config = ServerConfig {
                listen_addr: listen,
                symbol: profile_by_name(&profile)?,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(true)
}

fn print_boleto(boleto: &Boleto) {
    let currency = boleto.currency();
    println!("Number:    {}", boleto.pretty_number());
    println!("Barcode:   {}", boleto.barcode());
    println!("Bank:      {} ({})", boleto.bank(), boleto.bank_code());
    println!("Currency:  {}", currency);
    println!("Due date:  {}", boleto.due_date());
    println!("Amount:    {}", boleto.pretty_amount());
}

fn profile_by_name(name: &str) -> Result<SymbolConfig, BoletoError> {
    SymbolConfig::by_name(name).ok_or_else(|| {
        BoletoError::InvalidInput(format!(
            "unknown profile '{}', expected one of: {}",
            name,
            SymbolConfig::list().join(", ")
        ))
    })
}

/// One number per line; only blank lines are skipped.
fn read_numbers(reader: impl BufRead) -> Result<Vec<String>, BoletoError> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            numbers.push(line);
        }
    }
    Ok(numbers)
}
