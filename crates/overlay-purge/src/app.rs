use clap::{Arg, Command};

pub fn build_cli() -> Command {
    Command::new("overlay-purge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clear transformations using a specific overlay.")
        .long_about("Finds every used Cloudinary transformation that references the given overlay image and deletes the derived images built from it, in batches of 100. Original assets are kept; cached copies are invalidated.\n\nCredentials come from CLOUDINARY_URL or the [cloudinary] section of ~/.overlay-purge/config.toml / ./.overlay-purge/config.toml.")
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Overlay image name, without the 'l_' prefix")
                .value_name("NAME")
                .required(true)
                .value_parser(parse_overlay),
        )
}

/// Reject blank overlay names before any configuration is loaded.
fn parse_overlay(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("overlay image name must not be empty".to_string());
    }
    Ok(value.to_string())
}
