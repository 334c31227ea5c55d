//! System-prompt extension that appends the amplifier reference prompt.
//!
//! At system-prompt construction time the host runs its registered
//! extensions over a list of prompt fragments. [`AmplifierContext`] is one of
//! them: it asks the host's [`PromptStore`] for `fw.amplifier.reference.md`
//! and, when the store returns non-empty text, pushes it onto the end of the
//! list.
//!
//! The crate also defines the seams the extension plugs into:
//!
//! - [`extension::Extension`]: one method per lifecycle stage, all with no-op
//!   defaults.
//! - [`extension::ExtensionRegistry`]: ordered extensions run sequentially.
//! - [`store::PromptStore`]: async name-to-text lookup owned by the host,
//!   with [`store::StaticPromptStore`] as an in-memory implementation.
//! - [`store::PromptContext`]: the store plus pass-through arguments handed
//!   to each stage.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use amplifier_context::prelude::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = StaticPromptStore::new()
//!     .with(AMPLIFIER_REFERENCE_PROMPT, "Prefer small, reviewable changes.");
//! let ctx = PromptContext::new(Arc::new(store));
//!
//! let mut registry = ExtensionRegistry::new();
//! register_amplifier(&mut registry, &AmplifierConfig::default());
//!
//! let fragments = registry.build_system_prompt(&ctx).await?;
//! assert_eq!(fragments, vec!["Prefer small, reviewable changes."]);
//! # Ok::<(), String>(())
//! # }).unwrap();
//! ```

pub mod amplifier;
pub mod extension;
pub mod prelude;
pub mod store;

pub use amplifier::{AMPLIFIER_REFERENCE_PROMPT, AmplifierConfig, AmplifierContext};
pub use store::PromptStore;
