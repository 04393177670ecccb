use clap::Args;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use crate::cli::global::GlobalArgs;

/// Where a tool reads its input from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input text (reads --file or stdin if not provided)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Read raw input bytes, enforcing the size limit.
///
/// One trailing newline on stdin is dropped.
pub fn read_bytes(
    input: &InputArgs,
    global: &GlobalArgs,
    max_size: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    read_input(input, global, max_size, true)
}

fn read_input(
    input: &InputArgs,
    global: &GlobalArgs,
    max_size: usize,
    strip_newline: bool,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(text) = &input.text {
        return Ok(text.as_bytes().to_vec());
    }

    if let Some(file_path) = &input.file {
        // Check file size if max_size is set
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > max_size {
                if global.force {
                    if !global.quiet {
                        log::warn!(
                            "processing large file ({} bytes, limit: {} bytes)",
                            file_size,
                            max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
            }
        }

        log::debug!("reading input from {}", file_path.display());
        return Ok(fs::read(file_path)?);
    }

    if io::stdin().is_terminal() {
        log::info!("reading input from terminal, end with Ctrl-D");
    }
    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if max_size > 0 && buffer.len() > max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --file with --force for large inputs.",
            buffer.len(),
            max_size
        )
        .into());
    }

    // Drop the newline a shell pipe or heredoc appends
    if strip_newline {
        if buffer.ends_with(b"\r\n") {
            buffer.truncate(buffer.len() - 2);
        } else if buffer.ends_with(b"\n") {
            buffer.truncate(buffer.len() - 1);
        }
    }

    Ok(buffer)
}

/// Read input as UTF-8 text.
pub fn read_text(
    input: &InputArgs,
    global: &GlobalArgs,
    max_size: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = read_bytes(input, global, max_size)?;
    String::from_utf8(bytes).map_err(|_| "Input must be valid UTF-8".into())
}

/// Read input as UTF-8 text, keeping a trailing newline on stdin.
pub fn read_text_verbatim(
    input: &InputArgs,
    global: &GlobalArgs,
    max_size: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = read_input(input, global, max_size, false)?;
    String::from_utf8(bytes).map_err(|_| "Input must be valid UTF-8".into())
}
