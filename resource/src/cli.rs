//! Process surface shared by the check, in and out binaries

use std::fmt::Display;
use std::io::{Read, Write};
use std::path::PathBuf;

use colored::Colorize;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ResourceError;
use crate::utils::version_info;

/// Parse one JSON request from `reader`
pub fn read_request_from<T: DeserializeOwned, R: Read>(reader: R) -> Result<T, ResourceError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse one JSON request from stdin
pub fn read_request<T: DeserializeOwned>() -> Result<T, ResourceError> {
    read_request_from(std::io::stdin().lock())
}

/// Write one JSON response followed by a newline to `writer`
pub fn write_response_to<T: Serialize, W: Write>(mut writer: W, response: &T) -> Result<(), ResourceError> {
    serde_json::to_writer(&mut writer, response)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write one JSON response to stdout
pub fn write_response<T: Serialize>(response: &T) -> Result<(), ResourceError> {
    write_response_to(std::io::stdout().lock(), response)
}

/// Directory argument of the in and out binaries
pub fn directory_arg(args: &[String]) -> Option<PathBuf> {
    args.get(1)
        .filter(|arg| !arg.starts_with("--"))
        .map(PathBuf::from)
}

/// Handle `--version`; returns true when the process should exit
pub fn handle_version_flag(args: &[String]) -> bool {
    if !args.iter().skip(1).any(|arg| arg == "--version") {
        return false;
    }
    match serde_json::to_string_pretty(&version_info()) {
        Ok(json) => println!("{}", json),
        Err(e) => fatal("printing version", e),
    }
    true
}

/// Report a failure on stderr and exit with status 1
pub fn fatal(doing: &str, err: impl Display) -> ! {
    eprintln!("{}", format!("error {}: {}", doing, err).red());
    std::process::exit(1)
}

/// Print usage for a binary that needs a directory argument and exit
pub fn usage(program: &str, directory: &str) -> ! {
    eprintln!("usage: {} <{} directory>", program, directory);
    std::process::exit(1)
}
