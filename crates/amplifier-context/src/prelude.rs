//! Convenience re-exports for common `amplifier-context` types.
//!
//! Meant to be glob-imported by hosts wiring up prompt construction:
//!
//! ```ignore
//! use amplifier_context::prelude::*;
//! ```

// ── Amplifier ───────────────────────────────────────────────────────
pub use crate::amplifier::{
    AMPLIFIER_REFERENCE_PROMPT, AmplifierConfig, AmplifierContext, register_amplifier,
};

// ── Extensions ──────────────────────────────────────────────────────
pub use crate::extension::{Extension, ExtensionFuture, ExtensionRegistry, join_fragments};

// ── Prompt store ────────────────────────────────────────────────────
pub use crate::store::{PromptContext, PromptFuture, PromptStore, StaticPromptStore};
