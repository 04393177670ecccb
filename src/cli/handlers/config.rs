use crate::cli::{
    args::{ConfigAction, ConfigCategory},
    global::GlobalArgs,
};
use devtoolbox::codecs::{
    color::ColorFormat, date::DateFormatKey, escape::EscapeType, uuid::UuidVersion,
};
use devtoolbox::{HashAlgorithm, ToolboxConfig};

pub fn handle(
    action: ConfigAction,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { category } => handle_list(category, global.json),
        ConfigAction::Show => handle_show(global, config),
    }
}

fn handle_list(
    category: Option<ConfigCategory>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Collect all data
    let date_list: Vec<&str> = DateFormatKey::ALL.iter().map(|k| k.as_str()).collect();
    let uuid_list: Vec<&str> = UuidVersion::ALL.iter().map(|v| v.as_str()).collect();
    let hash_list: Vec<&str> = HashAlgorithm::ALL.iter().map(|a| a.as_str()).collect();
    let escape_list: Vec<&str> = EscapeType::ALL.iter().map(|e| e.as_str()).collect();
    let color_list: Vec<&str> = ColorFormat::ALL.iter().map(|c| c.as_str()).collect();

    // JSON output
    if json {
        let output = match category {
            Some(ConfigCategory::Dates) => serde_json::json!({ "dates": date_list }),
            Some(ConfigCategory::Uuids) => serde_json::json!({ "uuids": uuid_list }),
            Some(ConfigCategory::Hashes) => serde_json::json!({ "hashes": hash_list }),
            Some(ConfigCategory::Escapes) => serde_json::json!({ "escapes": escape_list }),
            Some(ConfigCategory::Colors) => serde_json::json!({ "colors": color_list }),
            None => serde_json::json!({
                "dates": date_list,
                "uuids": uuid_list,
                "hashes": hash_list,
                "escapes": escape_list,
                "colors": color_list,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    // Comma-separated output for specific categories
    match category {
        Some(ConfigCategory::Dates) => println!("{}", date_list.join(",")),
        Some(ConfigCategory::Uuids) => println!("{}", uuid_list.join(",")),
        Some(ConfigCategory::Hashes) => println!("{}", hash_list.join(",")),
        Some(ConfigCategory::Escapes) => println!("{}", escape_list.join(",")),
        Some(ConfigCategory::Colors) => println!("{}", color_list.join(",")),
        None => {
            // Human-readable format for all
            println!("Date formats: {}", date_list.join(", "));
            println!("UUID versions: {}", uuid_list.join(", "));
            println!("Hash algorithms: {}", hash_list.join(", "));
            println!("Escape notations: {}", escape_list.join(", "));
            println!("Color formats: {}", color_list.join(", "));
            println!(
                "\nUse 'config list dates|uuids|hashes|escapes|colors' for machine-readable output"
            );
            println!("Use --json for structured output");
        }
    }

    Ok(())
}

fn handle_show(
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if global.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
