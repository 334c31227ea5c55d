//! Ordered registry that dispatches lifecycle stages to extensions.

use super::Extension;
use crate::store::PromptContext;
use std::fmt;
use tracing::{debug, warn};

/// An ordered collection of extensions.
///
/// Registration order is execution order. Each stage awaits one extension
/// before starting the next, so the fragment list is never mutated
/// concurrently.
///
/// # Example
///
/// ```ignore
/// let registry = ExtensionRegistry::new()
///     .with(MainPrompt::new())
///     .with_if(config.enabled, AmplifierContext::from_config(&config));
///
/// let fragments = registry.build_system_prompt(&ctx).await?;
/// let prompt = join_fragments(&fragments);
/// ```
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("extensions", &self.names())
            .finish()
    }
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extension to the end of the execution order.
    pub fn register(&mut self, extension: impl Extension + 'static) {
        debug!("Registered extension '{}'", extension.name());
        self.extensions.push(Box::new(extension));
    }

    /// Register an extension (builder pattern).
    pub fn with(mut self, extension: impl Extension + 'static) -> Self {
        self.register(extension);
        self
    }

    /// Conditionally register an extension (builder pattern).
    pub fn with_if(self, condition: bool, extension: impl Extension + 'static) -> Self {
        if condition { self.with(extension) } else { self }
    }

    /// Extension names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Number of registered extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Run the `system_prompt` stage of every extension against `system_prompt`.
    ///
    /// Stops at the first error and returns it unchanged. Fragments appended
    /// by earlier extensions are left in place.
    pub async fn run_system_prompt(
        &self,
        ctx: &PromptContext,
        system_prompt: &mut Vec<String>,
    ) -> Result<(), String> {
        for extension in &self.extensions {
            let before = system_prompt.len();
            if let Err(e) = extension.system_prompt(ctx, system_prompt).await {
                warn!("Extension '{}' failed in system_prompt: {e}", extension.name());
                return Err(e);
            }
            debug!(
                "Extension '{}' added {} system prompt fragment(s)",
                extension.name(),
                system_prompt.len().saturating_sub(before)
            );
        }
        Ok(())
    }

    /// Run the `system_prompt` stage on a fresh, empty fragment list.
    pub async fn build_system_prompt(&self, ctx: &PromptContext) -> Result<Vec<String>, String> {
        let mut system_prompt = Vec::new();
        self.run_system_prompt(ctx, &mut system_prompt).await?;
        Ok(system_prompt)
    }
}

/// Join fragments into one prompt, separated by blank lines.
///
/// Empty fragments are skipped.
pub fn join_fragments(fragments: &[String]) -> String {
    fragments
        .iter()
        .filter(|f| !f.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionFuture;
    use crate::store::StaticPromptStore;
    use std::sync::Arc;

    struct Push(&'static str);

    impl Extension for Push {
        fn name(&self) -> &str {
            self.0
        }

        fn system_prompt<'a>(
            &'a self,
            _ctx: &'a PromptContext,
            system_prompt: &'a mut Vec<String>,
        ) -> ExtensionFuture<'a> {
            Box::pin(async move {
                system_prompt.push(self.0.to_string());
                Ok(())
            })
        }
    }

    struct Fail;

    impl Extension for Fail {
        fn name(&self) -> &str {
            "fail"
        }

        fn system_prompt<'a>(
            &'a self,
            _ctx: &'a PromptContext,
            _system_prompt: &'a mut Vec<String>,
        ) -> ExtensionFuture<'a> {
            Box::pin(async { Err("boom".to_string()) })
        }
    }

    fn ctx() -> PromptContext {
        PromptContext::new(Arc::new(StaticPromptStore::new()))
    }

    #[tokio::test]
    async fn runs_in_registration_order() {
        let registry = ExtensionRegistry::new()
            .with(Push("first"))
            .with(Push("second"))
            .with(Push("third"));
        let fragments = registry.build_system_prompt(&ctx()).await.unwrap();
        assert_eq!(fragments, vec!["first", "second", "third"]);
        assert_eq!(registry.names(), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn appends_after_existing_fragments() {
        let registry = ExtensionRegistry::new().with(Push("x"));
        let mut fragments = vec!["a".to_string()];
        registry
            .run_system_prompt(&ctx(), &mut fragments)
            .await
            .unwrap();
        assert_eq!(fragments, vec!["a", "x"]);
    }

    #[tokio::test]
    async fn first_error_stops_the_pass() {
        let registry = ExtensionRegistry::new()
            .with(Push("kept"))
            .with(Fail)
            .with(Push("never"));
        let mut fragments = Vec::new();
        let err = registry
            .run_system_prompt(&ctx(), &mut fragments)
            .await
            .unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(fragments, vec!["kept"]);
    }

    #[tokio::test]
    async fn empty_registry_builds_nothing() {
        let registry = ExtensionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.build_system_prompt(&ctx()).await.unwrap().is_empty());
    }

    #[test]
    fn with_if_false_skips_registration() {
        let registry = ExtensionRegistry::new()
            .with_if(false, Push("hidden"))
            .with_if(true, Push("shown"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["shown"]);
    }

    #[test]
    fn debug_lists_extension_names() {
        let registry = ExtensionRegistry::new().with(Push("one"));
        assert!(format!("{registry:?}").contains("one"));
    }

    #[test]
    fn join_fragments_uses_blank_lines() {
        let fragments = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(join_fragments(&fragments), "a\n\nb");
    }

    #[test]
    fn join_fragments_empty() {
        assert_eq!(join_fragments(&[]), "");
    }
}
