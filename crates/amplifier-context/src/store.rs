//! Named prompt resolution and the per-cycle prompt context.
//!
//! The host owns its prompt files. Extensions only see them through the
//! [`PromptStore`] trait, reached via the [`PromptContext`] passed to each
//! lifecycle stage. [`StaticPromptStore`] is an in-memory store for hosts
//! that embed their prompts and for tests.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by [`PromptStore::read_prompt`].
///
/// `Ok(None)` means the name is unknown. `Err` means the backing resource
/// failed; callers propagate it unchanged.
pub type PromptFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<String>, String>> + Send + 'a>>;

/// Host capability that maps a prompt name to its text.
///
/// Uses a boxed future so that the trait is dyn-compatible (object-safe)
/// and implementations can suspend on I/O.
pub trait PromptStore: Send + Sync {
    /// Resolve `name` (e.g. `"fw.amplifier.reference.md"`) to prompt text.
    fn read_prompt<'a>(&'a self, name: &'a str) -> PromptFuture<'a>;
}

// ── StaticPromptStore ──────────────────────────────────────────────

/// In-memory [`PromptStore`] keyed by prompt name.
///
/// Text is returned verbatim, including empty strings.
///
/// # Example
///
/// ```
/// use amplifier_context::store::StaticPromptStore;
///
/// let store = StaticPromptStore::new()
///     .with("fw.amplifier.reference.md", "Prefer small, reviewable changes.");
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticPromptStore {
    prompts: HashMap<String, String>,
}

impl StaticPromptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a prompt.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.prompts.insert(name.into(), text.into());
    }

    /// Insert a prompt (builder pattern).
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Number of stored prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl PromptStore for StaticPromptStore {
    fn read_prompt<'a>(&'a self, name: &'a str) -> PromptFuture<'a> {
        let text = self.prompts.get(name).cloned();
        Box::pin(async move { Ok(text) })
    }
}

// ── PromptContext ──────────────────────────────────────────────────

/// Context handed to every extension during a prompt-construction cycle.
///
/// Carries the host's prompt store plus free-form string arguments. The
/// arguments are pass-through: an extension reads the ones it cares about
/// and ignores the rest.
#[derive(Clone)]
pub struct PromptContext {
    store: Arc<dyn PromptStore>,
    args: HashMap<String, String>,
}

impl fmt::Debug for PromptContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptContext")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl PromptContext {
    /// Create a context backed by `store` with no extra arguments.
    pub fn new(store: Arc<dyn PromptStore>) -> Self {
        Self {
            store,
            args: HashMap::new(),
        }
    }

    /// Attach a contextual argument (builder pattern).
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Look up a contextual argument.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    /// Resolve a named prompt through the host store.
    pub fn read_prompt<'a>(&'a self, name: &'a str) -> PromptFuture<'a> {
        self.store.read_prompt(name)
    }
}
