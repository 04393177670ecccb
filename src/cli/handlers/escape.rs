use crate::cli::{args::EscapeAction, global::GlobalArgs, input::read_text};
use devtoolbox::codecs::escape::{self, EscapeType};
use devtoolbox::{FormatSelector, InvalidInputError, ToolboxConfig};

pub fn handle(
    action: EscapeAction,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_size = global.max_size(config);

    match action {
        EscapeAction::Encode { format, input } => {
            let format: EscapeType = format.parse()?;
            let text = read_text(&input, global, max_size)?;
            let encoded = escape::encode(&text, format);
            if global.json {
                let output = serde_json::json!({ "format": format, "output": encoded });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", encoded);
            }
        }
        EscapeAction::Decode { format, input } => {
            let choice = format.map(|f| f.parse::<EscapeType>()).transpose()?;
            let text = read_text(&input, global, max_size)?;
            if text.is_empty() {
                println!();
                return Ok(());
            }

            let mut selector = FormatSelector::from_choice(choice);
            let format = selector.on_input(&text, escape::detect).ok_or_else(|| {
                InvalidInputError::new(
                    "escape decode",
                    &text,
                    "no escape notation recognised; pass --format to pick one",
                )
            })?;

            let decoded = escape::decode(&text, Some(format)).ok_or_else(|| {
                InvalidInputError::new(
                    "escape decode",
                    &text,
                    format!("nothing in the input decodes as {}", format),
                )
            })?;

            if global.json {
                let output = serde_json::json!({
                    "format": format,
                    "detected": selector.is_auto(),
                    "output": decoded,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", decoded);
            }
        }
        EscapeAction::Detect { input } => {
            let text = read_text(&input, global, max_size)?;
            let detected = escape::detect(&text);
            if global.json {
                let output = serde_json::json!({ "format": detected });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let format = detected.ok_or_else(|| {
                    InvalidInputError::new("escape detect", &text, "no escape notation recognised")
                })?;
                println!("{}", format);
            }
        }
    }

    Ok(())
}
