//! Provider-facing hooks (behavior) and the DocuSign configuration (data).
//!
//! `hooks` defines [`ProviderHooks`] and [`ResourceOwner`], the extension points a generic
//! OAuth 2.0 engine drives when it builds authorization URLs, exchanges codes, and fetches
//! user profiles. `docusign` supplies the one concrete implementation: base URLs for the
//! production and sandbox environments, the three well-known endpoints, default scopes, and
//! HTTP Basic client authentication.

pub mod docusign;
pub mod hooks;

pub use docusign::*;
pub use hooks::*;
