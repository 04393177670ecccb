use crate::cli::{args::HashArgs, global::GlobalArgs, input::read_bytes};
use devtoolbox::{DigestEncoding, HashAlgorithm, ToolboxConfig};

pub fn handle(
    args: HashArgs,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse hash algorithm
    let algorithm: HashAlgorithm = args
        .algorithm
        .as_deref()
        .unwrap_or(&config.hash.algorithm)
        .parse()?;
    let encoding: DigestEncoding = args
        .encoding
        .as_deref()
        .unwrap_or(&config.hash.encoding)
        .parse()?;

    // Files hash byte for byte, text as UTF-8
    let data = read_bytes(&args.input, global, global.max_size(config))?;
    let digest = encoding.encode(&devtoolbox::hash(&data, algorithm));

    if global.json {
        let output = serde_json::json!({
            "algorithm": algorithm.as_str(),
            "encoding": encoding.as_str(),
            "digest": digest,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", digest);
    }

    Ok(())
}
