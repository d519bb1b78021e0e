// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sedona_wkb::{ReadOptions, DEFAULT_MAX_DEPTH};
use sedona_wkb_cli::{
    exec::{exec_decode, exec_encode, ByteOrderArg, OutputEncoding},
    print_format::PrintFormat,
    CliError, SEDONA_WKB_CLI_VERSION,
};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    #[clap(
        short,
        long,
        help = "Reduce printing other than the results and work quietly"
    )]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode raw WKB or Base64 encoded WKB
    Decode {
        #[clap(help = "Base64 encoded WKB. Reads --file or stdin when omitted")]
        input: Option<String>,

        #[clap(
            short,
            long,
            help = "Read raw or Base64 WKB from a file",
            value_parser(parse_valid_file)
        )]
        file: Option<PathBuf>,

        #[clap(long, value_enum, default_value_t = PrintFormat::Json)]
        format: PrintFormat,

        #[clap(
            long,
            help = "Maximum geometry nesting depth",
            default_value_t = DEFAULT_MAX_DEPTH
        )]
        max_depth: usize,
    },
    /// Encode a JSON geometry as WKB
    Encode {
        #[clap(help = "Geometry JSON. Reads --file or stdin when omitted")]
        input: Option<String>,

        #[clap(
            short,
            long,
            help = "Read geometry JSON from a file",
            value_parser(parse_valid_file)
        )]
        file: Option<PathBuf>,

        #[clap(long, value_enum, default_value_t = ByteOrderArg::Little)]
        byte_order: ByteOrderArg,

        #[clap(long, value_enum, default_value_t = OutputEncoding::Base64)]
        output: OutputEncoding,
    },
}

/// Calls [`main_inner`], then handles printing errors and returning the correct exit code
pub fn main() -> ExitCode {
    if let Err(e) = main_inner() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Main CLI entrypoint
fn main_inner() -> Result<(), CliError> {
    env_logger::init();

    let args = Args::parse();

    if !args.quiet {
        eprintln!("Sedona WKB CLI v{SEDONA_WKB_CLI_VERSION}");
    }

    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Decode {
            input,
            file,
            format,
            max_depth,
        } => {
            let bytes = read_input(input, file.as_deref())?;
            let out = exec_decode(&bytes, &ReadOptions { max_depth }, format)?;
            writeln!(stdout, "{out}")?;
        }
        Command::Encode {
            input,
            file,
            byte_order,
            output,
        } => {
            let bytes = read_input(input, file.as_deref())?;
            let json = String::from_utf8_lossy(&bytes);
            let out = exec_encode(&json, byte_order.into(), output)?;
            stdout.write_all(&out)?;
            if output == OutputEncoding::Base64 {
                writeln!(stdout)?;
            }
        }
    }

    Ok(())
}

fn read_input(input: Option<String>, file: Option<&Path>) -> Result<Vec<u8>, CliError> {
    if let Some(input) = input {
        return Ok(input.into_bytes());
    }

    if let Some(path) = file {
        log::debug!("Reading input from {}", path.display());
        return Ok(fs::read(path)?);
    }

    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf)?;
    Ok(buf)
}

fn parse_valid_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("Invalid file '{file}'"))
    }
}
