use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use std::{fs, io::Read};

/// Resolves a CLI argument that is either an inline json string, a path to a
/// `*.json` file, or `-` for stdin.
pub fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).map_err(|e| anyhow!("Failed to read file '{}': {}", arg, e))
    } else {
        Ok(arg.to_string())
    }
}

pub fn load_json<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = read_input(arg)?;
    serde_json::from_str::<T>(&content).map_err(|e| anyhow!("Failed to parse json: {}", e))
}
