use crate::cli::{args::UrlAction, global::GlobalArgs, input::read_text};
use devtoolbox::codecs::url;
use devtoolbox::{InvalidInputError, ToolboxConfig};

const DECODE_HINT: &str = "every % must be followed by two hex digits that decode to UTF-8";

pub fn handle(
    action: UrlAction,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_size = global.max_size(config);

    match action {
        UrlAction::Encode { input } => {
            let text = read_text(&input, global, max_size)?;
            print_result(global, "encode", &url::encode_to_url(&text))?;
        }
        UrlAction::Decode { input } => {
            let text = read_text(&input, global, max_size)?;
            let decoded = url::decode_from_url(&text)
                .ok_or_else(|| InvalidInputError::new("url decode", &text, DECODE_HINT))?;
            print_result(global, "decode", &decoded)?;
        }
        UrlAction::Detect { input } => {
            let text = read_text(&input, global, max_size)?;
            let encoded = url::is_valid_url_encoded(&text);
            if global.json {
                let output = serde_json::json!({ "encoded": encoded });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", if encoded { "encoded" } else { "plain" });
            }
        }
        UrlAction::Auto { input } => {
            let text = read_text(&input, global, max_size)?;
            let mode = if url::is_valid_url_encoded(&text) {
                "decode"
            } else {
                "encode"
            };
            log::info!("url auto: {}", mode);
            let converted = url::auto_convert(&text)
                .ok_or_else(|| InvalidInputError::new("url auto", &text, DECODE_HINT))?;
            print_result(global, mode, &converted)?;
        }
    }

    Ok(())
}

fn print_result(
    global: &GlobalArgs,
    mode: &str,
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if global.json {
        let value = serde_json::json!({ "mode": mode, "output": output });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}
