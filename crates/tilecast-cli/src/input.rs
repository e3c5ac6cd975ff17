//! Map loading and provenance strings.

use anyhow::{Context, Result};
use std::path::Path;
use tiled::{Loader, Map};

use tilecast_export::GeneratorInfo;

/// Version of the map loader, stamped into scene header comments.
const MAP_LOADER: &str = "rs-tiled 0.15";

/// Loads a TMX map from disk, resolving external tilesets relative to it.
pub fn load_map(path: &Path) -> Result<Map> {
    Loader::new()
        .load_tmx_map(path)
        .with_context(|| format!("Failed to load map: {}", path.display()))
}

/// Provenance for the scene header: tool version, loader and platform,
/// and the local export time.
pub fn generator_info() -> GeneratorInfo {
    GeneratorInfo {
        tool: format!("tilecast v{}", env!("CARGO_PKG_VERSION")),
        host: format!(
            "{} @ {} ({})",
            MAP_LOADER,
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        timestamp: chrono::Local::now().to_rfc2822(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_info_carries_tool_version() {
        let info = generator_info();
        assert!(info.tool.starts_with("tilecast v"));
        assert!(info.host.starts_with(MAP_LOADER));
        assert!(!info.timestamp.is_empty());
    }

    #[test]
    fn test_load_map_reports_the_path_on_failure() {
        let err = load_map(Path::new("/definitely/not/here.tmx")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.tmx"));
    }
}
