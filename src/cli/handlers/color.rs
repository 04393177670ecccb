use crate::cli::{args::ColorArgs, global::GlobalArgs};
use devtoolbox::codecs::color::{self, ColorFormat};
use devtoolbox::codecs::color_names;
use devtoolbox::{InvalidInputError, ToolboxConfig};

pub fn handle(
    args: ColorArgs,
    global: &GlobalArgs,
    _config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = args
        .to
        .as_deref()
        .map(str::parse::<ColorFormat>)
        .transpose()?;

    let input = args.input.trim();
    let parsed = color::parse_color(input).ok_or_else(|| {
        InvalidInputError::new(
            "color",
            input,
            "use hex, rgb(), hsl(), hwb(), lch(), device-cmyk() or a CSS color name",
        )
    })?;
    // Keywords parse but have no format of their own
    let detected = color::get_color_format(input);

    if let Some(target) = target {
        let rendered = color::format_color(&parsed, target);
        if global.json {
            let output = serde_json::json!({ "format": target, "value": rendered });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", rendered);
        }
        return Ok(());
    }

    let conversions = color::convert_all(&parsed);
    let name = if parsed.a >= 1.0 {
        color_names::name_of(parsed.to_rgb24())
    } else {
        None
    };

    if global.json {
        let rendered: Vec<_> = conversions
            .iter()
            .map(|(format, value)| serde_json::json!({ "format": format, "value": value }))
            .collect();
        let output = serde_json::json!({
            "input_format": detected,
            "name": name,
            "conversions": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match detected {
        Some(format) => println!("Input format: {}", format),
        None => println!("Input format: named color"),
    }
    if let Some(name) = name {
        println!("Name: {}", name);
    }
    println!();
    for (format, value) in conversions {
        println!("  {:<5} {}", format.as_str(), value);
    }

    Ok(())
}
