//! # Ticketera CLI
//!
//! Command-line interface for the receipt printing service.
//!
//! ## Usage
//!
//! ```bash
//! # Run the HTTP server
//! ticketera serve --listen 0.0.0.0:8083 --device-dir /dev/usb
//!
//! # Print a request file directly
//! ticketera print request.json
//!
//! # Send it to another printer
//! ticketera print --printer /dev/usb/lp1 request.json
//!
//! # Inspect the bytes without printing
//! ticketera print --dump request.json
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use ticketera::{
    TicketeraError,
    ir::{Encoder, EncoderConfig},
    job::Job,
    json_api::PrintRequest,
    protocol::cp850,
    server::{self, ServerConfig},
    transport::{Delivery, DeviceDelivery},
};

/// Ticketera - ESC/POS receipt printing service
#[derive(Parser, Debug)]
#[command(name = "ticketera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP print server
    Serve {
        /// Address to listen on
        #[arg(long, env = "TICKETERA_LISTEN", default_value = "0.0.0.0:8083")]
        listen: String,

        /// Directory holding the printer devices; requests name a device
        /// inside it
        #[arg(long, env = "TICKETERA_DEVICE_DIR", value_name = "DIR")]
        device_dir: PathBuf,

        /// Log every encoded operation
        #[arg(long, env = "TICKETERA_TRACE_OPERATIONS")]
        trace_operations: bool,
    },

    /// Compile a JSON print request and send it to the printer
    Print {
        /// Request file (same JSON body the server accepts)
        request: PathBuf,

        /// Override the request's printer identifier
        #[arg(long)]
        printer: Option<String>,

        /// Write the job to this file instead of the printer
        #[arg(long, value_name = "FILE", conflicts_with = "dump")]
        output: Option<PathBuf>,

        /// Print a hex dump of the job instead of sending it
        #[arg(long)]
        dump: bool,

        /// Log every encoded operation
        #[arg(long)]
        trace_operations: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TicketeraError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            listen,
            device_dir,
            trace_operations,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                device_dir,
                encoder: EncoderConfig { trace_operations },
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }

        Commands::Print {
            request,
            printer,
            output,
            dump,
            trace_operations,
        } => {
            let body = fs::read_to_string(&request)?;
            let mut request: PrintRequest = serde_json::from_str(&body)?;
            if let Some(printer) = printer {
                request.printer = printer;
            }

            let encoder = Encoder::new(EncoderConfig { trace_operations });
            let job = Job::compile(&request, &encoder)?;

            if dump {
                print!("{}", hex_dump(&job.bytes));
                return Ok(());
            }

            match output {
                Some(path) => {
                    fs::write(&path, &job.bytes)?;
                    println!("Wrote {} bytes to {}", job.bytes.len(), path.display());
                }
                None => {
                    DeviceDelivery::new().deliver(&job.printer, &job.bytes)?;
                    println!("Sent {} bytes to {}", job.bytes.len(), job.printer);
                }
            }
            Ok(())
        }
    }
}

/// Format bytes as 16-byte hex rows with a code page 850 text column.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02X}", b)).collect();
        let text: String = cp850::decode(chunk)
            .chars()
            .map(|c| if c.is_control() { '.' } else { c })
            .collect();
        out.push_str(&format!("{:08X}  {:<47}  {}\n", row * 16, hex.join(" "), text));
    }
    out
}
