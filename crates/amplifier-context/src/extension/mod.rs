//! Typed extension points for the prompt-construction lifecycle.
//!
//! An [`Extension`] exposes one method per lifecycle stage. Every stage has a
//! no-op default, so an extension implements only the stages it needs and is
//! registered into an [`ExtensionRegistry`], which runs the stage across all
//! extensions in registration order.

pub mod registry;

pub use registry::{ExtensionRegistry, join_fragments};

use crate::store::PromptContext;
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by extension stage methods.
pub type ExtensionFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// A unit of host-invoked logic attached to lifecycle stages.
///
/// # Example
///
/// ```
/// use amplifier_context::extension::{Extension, ExtensionFuture};
/// use amplifier_context::store::PromptContext;
///
/// struct Signature;
///
/// impl Extension for Signature {
///     fn name(&self) -> &str {
///         "signature"
///     }
///
///     fn system_prompt<'a>(
///         &'a self,
///         _ctx: &'a PromptContext,
///         system_prompt: &'a mut Vec<String>,
///     ) -> ExtensionFuture<'a> {
///         Box::pin(async move {
///             system_prompt.push("Sign every answer.".into());
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Extension: Send + Sync {
    /// Name used in logs and [`ExtensionRegistry::names`].
    fn name(&self) -> &str;

    /// Called while the host assembles the system prompt.
    ///
    /// `system_prompt` is the caller-owned fragment list for this cycle;
    /// extensions append to it in place.
    fn system_prompt<'a>(
        &'a self,
        _ctx: &'a PromptContext,
        _system_prompt: &'a mut Vec<String>,
    ) -> ExtensionFuture<'a> {
        Box::pin(async { Ok(()) })
    }
}
