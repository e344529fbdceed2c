use std::fs::File;
use std::io::prelude::*;
use std::error::Error;

use crate::engine::settings::PolicySettings;

pub fn read_settings_from_file(filename: &str) -> Result<PolicySettings, Box<dyn Error>> {
    let mut file = File::open(filename)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    read_settings_from_str(&content)
}

/// Missing fields keep their defaults.
pub fn read_settings_from_str(content: &str) -> Result<PolicySettings, Box<dyn Error>> {
    let settings: PolicySettings = serde_json::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
