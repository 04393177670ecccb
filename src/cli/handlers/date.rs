use crate::cli::{args::DateArgs, global::GlobalArgs};
use chrono::Utc;
use devtoolbox::codecs::date::{self, DateFormatKey};
use devtoolbox::{FormatSelector, InvalidInputError, ToolboxConfig};

pub fn handle(
    args: DateArgs,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let zone_name = args.tz.as_deref().unwrap_or(&config.date.timezone);
    let tz = date::resolve_timezone(zone_name)?;
    let choice = args
        .from
        .as_deref()
        .map(str::parse::<DateFormatKey>)
        .transpose()?;

    let (instant, format) = match args.input.as_deref().map(str::trim) {
        None | Some("") => (Utc::now(), None),
        Some(text) => {
            let mut selector = FormatSelector::from_choice(choice);
            let key = selector
                .on_input(text, date::detect_date_format)
                .ok_or_else(|| {
                    InvalidInputError::new(
                        "date",
                        text,
                        "format not recognised; pass --from to pick one",
                    )
                })?;
            let instant = (key.format().parse)(text).ok_or_else(|| {
                InvalidInputError::new("date", text, format!("input is not a valid {} date", key))
            })?;
            (instant, Some(key))
        }
    };

    let conversions = date::convert_all(&instant, Some(tz));

    if global.json {
        let rendered: Vec<_> = conversions
            .iter()
            .map(|(key, value)| serde_json::json!({ "format": key.as_str(), "value": value }))
            .collect();
        let output = serde_json::json!({
            "input_format": format.map(|key| key.as_str()),
            "timezone": tz.name(),
            "conversions": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(key) = format {
        println!("Input format: {}", key);
    }
    println!("Timezone: {}", tz.name());
    println!();
    for (key, value) in conversions {
        println!("  {:<22} {}", key.as_str(), value);
    }

    Ok(())
}
