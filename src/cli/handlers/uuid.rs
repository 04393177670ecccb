use crate::cli::{args::UuidArgs, global::GlobalArgs};
use devtoolbox::codecs::uuid::{self, UuidOptions, UuidVersion};
use devtoolbox::ToolboxConfig;

pub fn handle(
    args: UuidArgs,
    global: &GlobalArgs,
    config: &ToolboxConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(candidate) = &args.validate {
        let valid = uuid::validate(candidate.trim());
        if global.json {
            let output = serde_json::json!({ "valid": valid });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", if valid { "valid" } else { "invalid" });
        }
        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    let defaults = &config.uuid;
    let version: UuidVersion = args.version.as_deref().unwrap_or(&defaults.version).parse()?;

    if uuid::requires_namespace(version) {
        let namespace = args
            .namespace
            .as_deref()
            .ok_or_else(|| format!("UUID {} requires --namespace and --name", version))?;
        if uuid::resolve_namespace(namespace).is_none() {
            return Err(format!(
                "Invalid namespace '{}'. Use a UUID or one of: dns, url, oid, x500",
                namespace
            )
            .into());
        }
        if args.name.as_deref().is_none_or(str::is_empty) {
            return Err(format!("UUID {} requires a non-empty --name", version).into());
        }
    } else if args.namespace.is_some() || args.name.is_some() {
        log::warn!("--namespace and --name only apply to v3 and v5");
    }

    let options = UuidOptions {
        version,
        namespace: args.namespace,
        name: args.name,
        quantity: args.quantity.unwrap_or(defaults.quantity),
        hyphens: defaults.hyphens && !args.no_hyphens,
        uppercase: defaults.uppercase || args.uppercase,
        braces: defaults.braces || args.braces,
        quotes: defaults.quotes || args.quotes,
        commas: defaults.commas || args.commas,
    };
    log::debug!("generating {} x {}", options.quantity.max(1), version);

    let uuids = uuid::generate_many(&options);
    if global.json {
        println!("{}", serde_json::to_string_pretty(&uuids)?);
    } else {
        for id in uuids {
            println!("{}", id);
        }
    }

    Ok(())
}
