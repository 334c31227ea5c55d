//! The amplifier reference prompt extension.
//!
//! [`AmplifierContext`] runs during the `system_prompt` stage. It resolves
//! the amplifier reference prompt (`fw.amplifier.reference.md` by default)
//! through the host's prompt store and appends it to the fragment list when
//! the store returns non-empty text. A missing or empty prompt leaves the
//! list untouched.

use crate::extension::{Extension, ExtensionFuture, ExtensionRegistry};
use crate::store::PromptContext;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Prompt name resolved by [`AmplifierContext`] unless configured otherwise.
pub const AMPLIFIER_REFERENCE_PROMPT: &str = "fw.amplifier.reference.md";

// ── AmplifierConfig ────────────────────────────────────────────────

/// Settings for the amplifier extension, loadable from JSON.
///
/// # Example JSON
///
/// ```json
/// {
///   "reference_prompt": "fw.amplifier.reference.md",
///   "enabled": true
/// }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct AmplifierConfig {
    /// Prompt name to resolve. Default: [`AMPLIFIER_REFERENCE_PROMPT`].
    pub reference_prompt: String,
    /// Whether [`register_amplifier`] installs the extension. Default: `true`.
    pub enabled: bool,
}

impl Default for AmplifierConfig {
    fn default() -> Self {
        Self {
            reference_prompt: AMPLIFIER_REFERENCE_PROMPT.to_string(),
            enabled: true,
        }
    }
}

impl AmplifierConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("failed to parse amplifier config: {e}"))
    }

    /// Load a config from a JSON file. Returns the default config if the
    /// file doesn't exist or can't be parsed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                warn!("{e} ({})", path.display());
                Self::default()
            }),
            Err(_) => {
                debug!("No amplifier config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

// ── AmplifierContext ───────────────────────────────────────────────

/// Appends the amplifier reference prompt to the system prompt fragments.
///
/// Contextual arguments on the [`PromptContext`] are ignored. Errors from
/// the prompt store propagate unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmplifierContext {
    reference_prompt: String,
}

impl Default for AmplifierContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AmplifierContext {
    /// Create the extension for [`AMPLIFIER_REFERENCE_PROMPT`].
    pub fn new() -> Self {
        Self {
            reference_prompt: AMPLIFIER_REFERENCE_PROMPT.to_string(),
        }
    }

    /// Create the extension for the prompt named in `config`.
    pub fn from_config(config: &AmplifierConfig) -> Self {
        Self {
            reference_prompt: config.reference_prompt.clone(),
        }
    }

    /// The prompt name this extension resolves.
    pub fn reference_prompt(&self) -> &str {
        &self.reference_prompt
    }
}

impl Extension for AmplifierContext {
    fn name(&self) -> &str {
        "amplifier_context"
    }

    fn system_prompt<'a>(
        &'a self,
        ctx: &'a PromptContext,
        system_prompt: &'a mut Vec<String>,
    ) -> ExtensionFuture<'a> {
        Box::pin(async move {
            match ctx.read_prompt(&self.reference_prompt).await? {
                Some(prompt) if !prompt.is_empty() => {
                    debug!(
                        "Appending {} ({} bytes) to system prompt",
                        self.reference_prompt,
                        prompt.len()
                    );
                    system_prompt.push(prompt);
                }
                Some(_) => debug!("Reference prompt {} is empty, skipping", self.reference_prompt),
                None => debug!("Reference prompt {} not found, skipping", self.reference_prompt),
            }
            Ok(())
        })
    }
}

/// Register [`AmplifierContext`] into `registry` when `config.enabled` is set.
pub fn register_amplifier(registry: &mut ExtensionRegistry, config: &AmplifierConfig) {
    if config.enabled {
        registry.register(AmplifierContext::from_config(config));
    } else {
        debug!("Amplifier extension disabled by config");
    }
}
