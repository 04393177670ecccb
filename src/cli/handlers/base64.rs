use crate::cli::{
    args::Base64Action,
    global::GlobalArgs,
    input::{read_bytes, read_text},
};
use devtoolbox::codecs::base64;
use devtoolbox::{InvalidInputError, ToolboxConfig};
use std::fs;
use std::io::{self, Write};

pub fn handle(
    action: Base64Action,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_size = global.max_size(config);

    match action {
        Base64Action::Encode { url_safe, input } => {
            // Files are encoded byte for byte
            let data = read_bytes(&input, global, max_size)?;
            let mut encoded = base64::bytes_to_base64(&data);
            if url_safe {
                encoded = base64::convert_to_url_safe(&encoded);
            }
            println!("{}", encoded);
        }
        Base64Action::Decode { output, input } => {
            let text = read_text(&input, global, max_size)?;
            let text = text.trim();
            if !base64::is_valid_base64(text) {
                return Err(InvalidInputError::new(
                    "base64 decode",
                    text,
                    "input is not valid Base64 (check length, alphabet and padding)",
                )
                .into());
            }
            let blob = base64::base64_to_blob(text).ok_or_else(|| {
                InvalidInputError::new("base64 decode", text, "input could not be decoded")
            })?;
            if let Some(extension) = blob.extension {
                log::info!("decoded payload looks like .{} ({})", extension, blob.mime);
            }

            if let Some(output_path) = &output {
                fs::write(output_path, &blob.bytes)?;
            } else {
                io::stdout().write_all(&blob.bytes)?;
            }
        }
        Base64Action::Validate { input } => {
            let text = read_text(&input, global, max_size)?;
            let valid = base64::is_valid_base64(text.trim());
            if global.json {
                let output = serde_json::json!({ "valid": valid });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
            if !valid {
                std::process::exit(1);
            }
        }
        Base64Action::Inspect { input } => {
            let text = read_text(&input, global, max_size)?;
            let report = base64::inspect(&text);
            if global.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Valid: {}", yes_no(report.valid));
                println!("Probably Base64: {}", yes_no(report.probably_base64));
                println!("URL-safe: {}", yes_no(report.url_safe));
                if let Some(size) = report.decoded_size {
                    println!("Decoded size: {} bytes", size);
                }
                match report.file_type {
                    Some(sig) => println!("File type: {} ({})", sig.extension, sig.mime),
                    None => println!("File type: unknown"),
                }
            }
        }
        Base64Action::Standardize { input } => {
            let text = read_text(&input, global, max_size)?;
            println!("{}", base64::standardize_base64(text.trim()));
        }
        Base64Action::UrlSafe { input } => {
            let text = read_text(&input, global, max_size)?;
            println!("{}", base64::convert_to_url_safe(text.trim()));
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
