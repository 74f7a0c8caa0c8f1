use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use dolphin_engine::config::parse_by_extension;
use dolphin_engine::{SimulatorRegistry, SimulatorSpec, TunerConfig};
use encoding_rs::Encoding;
use tracing::debug;

/// Read a text file, honouring a UTF-8/UTF-16 byte-order mark if present.
pub fn read_text_auto(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

pub fn load_config(path: Option<&Path>) -> Result<TunerConfig> {
    let Some(path) = path else {
        return Ok(TunerConfig::default());
    };
    let text = read_text_auto(path)?;
    TunerConfig::parse(path, &text)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

pub fn load_simulator(path: &Path) -> Result<SimulatorSpec> {
    let text = read_text_auto(path)?;
    parse_by_extension(path, &text)
        .with_context(|| format!("failed to parse simulator: {}", path.display()))
}

/// Built-in simulators plus any extra definition files, in that order.
pub fn load_registry(extra: &[PathBuf]) -> Result<SimulatorRegistry> {
    let mut registry = SimulatorRegistry::with_builtins()?;
    for path in extra {
        let spec = load_simulator(path)?;
        debug!(key = %spec.key, path = %path.display(), "registered simulator file");
        registry.register(spec)?;
    }
    Ok(registry)
}
