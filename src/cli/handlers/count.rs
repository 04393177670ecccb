use crate::cli::{
    global::GlobalArgs,
    input::{InputArgs, read_text_verbatim},
};
use devtoolbox::ToolboxConfig;
use devtoolbox::codecs::count;

pub fn handle(
    input: InputArgs,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Every newline counts, so stdin is taken as is
    let text = read_text_verbatim(&input, global, global.max_size(config))?;
    let counts = count::count(&text);

    if global.json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let rows = [
        ("Characters", counts.total),
        ("Words", counts.words),
        ("Lines", counts.lines),
        ("Whitespace", counts.whitespace),
        ("Latin", counts.latin),
        ("Non-Latin", counts.non_latin),
        ("Digits", counts.digit),
        ("Symbols", counts.symbols),
    ];
    for (label, value) in rows {
        println!("{:<11} {}", format!("{}:", label), value);
    }

    Ok(())
}
