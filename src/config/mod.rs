// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::ast::{ConstantSet, Value};
use crate::printer::{render_value, LineEnding};
use crate::Icinga2Error;

mod conversion;

pub use conversion::{attributes_from_json, classify_string, UNPARSED_PREFIX};

/// Names Icinga2 defines itself; they are never quoted in attribute values.
pub const BUILTIN_GLOBALS: &[&str] = &[
    "PrefixDir",
    "SysconfDir",
    "ZonesDir",
    "LocalStateDir",
    "RunDir",
    "PkgDataDir",
    "StatePath",
    "ObjectsPath",
    "PidPath",
    "NodeName",
    "ZoneName",
    "ApplicationType",
    "ApplicationVersion",
    "BuildHostName",
    "BuildCompilerName",
    "BuildCompilerVersion",
    "EnableNotifications",
    "EnableEventHandlers",
    "EnableFlapping",
    "EnableHostChecks",
    "EnableServiceChecks",
    "EnablePerfdata",
    "UseVfork",
    "RunAsUser",
    "RunAsGroup",
    "Math",
    "Json",
    "Types",
    "System",
    "Internal",
    "Deprecated",
    "current_filename",
    "current_line",
];

/// Target operating system family of the rendered configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Posix,
    Windows,
}

impl Platform {
    pub fn line_ending(self) -> LineEnding {
        match self {
            Platform::Posix => LineEnding::Lf,
            Platform::Windows => LineEnding::CrLf,
        }
    }

    fn plugin_dir(self) -> &'static str {
        match self {
            Platform::Posix => "/usr/lib/nagios/plugins",
            Platform::Windows => "C:/Program Files/ICINGA2/sbin",
        }
    }
}

/// Module-wide settings shared by every rendered object.
///
/// `constants` are the user-declared Icinga2 constants written to
/// `constants.conf`; `globals` are additional names that must stay
/// unquoted. Both feed the default [`ConstantSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleConfig {
    pub platform: Platform,
    pub constants: IndexMap<String, Value>,
    pub globals: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawModuleConfig {
    #[serde(default)]
    platform: Platform,
    #[serde(default)]
    constants: Option<IndexMap<String, serde_json::Value>>,
    #[serde(default)]
    globals: Option<Vec<String>>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl ModuleConfig {
    /// Defaults for a platform: plugin directories, zone and ticket salt.
    pub fn for_platform(platform: Platform) -> Self {
        let mut constants = IndexMap::new();
        for key in ["PluginDir", "PluginContribDir", "ManubulonPluginDir"] {
            constants.insert(key.to_string(), Value::from(platform.plugin_dir()));
        }
        constants.insert("ZoneName".to_string(), Value::from("NodeName"));
        constants.insert("TicketSalt".to_string(), Value::from(""));

        Self {
            platform,
            constants,
            globals: BUILTIN_GLOBALS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load module settings from a JSON file.
    ///
    /// # Example
    /// ```ignore
    /// let config = ModuleConfig::from_file("icinga2.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Icinga2Error> {
        let content = fs::read_to_string(&path).map_err(|e| Icinga2Error::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            message: format!("Failed to read file: {}", e),
        })?;
        Self::from_str(&content)
    }

    /// Parse module settings from JSON text.
    ///
    /// Omitted `constants` or `globals` fall back to the defaults of the
    /// configured platform.
    pub fn from_str(content: &str) -> Result<Self, Icinga2Error> {
        let raw: RawModuleConfig = serde_json::from_str(content)?;
        let mut config = Self::for_platform(raw.platform);

        if let Some(constants) = raw.constants {
            config.constants = constants
                .into_iter()
                .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                .collect::<Result<_, _>>()?;
        }
        if let Some(globals) = raw.globals {
            config.globals = globals;
        }

        debug!(
            platform = ?config.platform,
            constants = config.constants.len(),
            globals = config.globals.len(),
            "loaded module config"
        );
        Ok(config)
    }

    pub fn line_ending(&self) -> LineEnding {
        self.platform.line_ending()
    }

    /// Union of declared constant names and global names.
    pub fn constant_set(&self) -> ConstantSet {
        self.constants
            .keys()
            .map(String::as_str)
            .chain(self.globals.iter().map(String::as_str))
            .collect()
    }

    /// Body of `constants.conf`: one `const Name = value` line per constant.
    pub fn render_constants(&self) -> String {
        let constants = self.constant_set();
        let newline = self.line_ending();

        self.constants
            .iter()
            .map(|(name, value)| {
                format!(
                    "const {} = {}{}",
                    name,
                    render_value(value, &constants, 0, newline),
                    newline.as_str()
                )
            })
            .collect()
    }
}
