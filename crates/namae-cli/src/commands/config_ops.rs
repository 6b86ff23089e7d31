use std::fs;

use namae_core::settings;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: segment.min_chars={}, segment.max_chars={}, normalize.spoiler_placeholder={:?}",
        s.segment.min_chars, s.segment.max_chars, s.normalize.spoiler_placeholder
    );
}

/// Install a custom settings file for the rest of the process.
pub fn load_config(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}
