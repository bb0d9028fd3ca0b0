//! Extension points a generic OAuth 2.0 engine drives when talking to a provider.
//!
//! The hooks intentionally use primitive data (status codes, reason phrases, byte slices,
//! `BTreeMap` headers) so implementations never depend on any particular HTTP client. The
//! engine owns every flow: it asks the hooks for endpoint URLs and headers, performs the
//! exchanges itself, and hands raw response parts back for validation.

// self
use crate::_prelude::*;

/// Header name used by the authorization hooks.
pub const AUTHORIZATION: &str = "Authorization";

/// Provider hooks consumed by a generic OAuth 2.0 engine.
///
/// Implementors are required to be `Send + Sync` so a single configuration can be shared
/// across threads. Override only what the provider changes—`scope_separator`,
/// `scope_parameter`, `default_headers`, and `authorization_headers` all carry default
/// implementations that match common provider behavior.
pub trait ProviderHooks: Send + Sync {
	/// Resource-owner value produced by [`build_resource_owner`](Self::build_resource_owner).
	type Owner: ResourceOwner;

	/// URL the engine redirects the user to for interactive authorization.
	fn authorization_endpoint(&self) -> Result<Url>;

	/// URL the engine posts to when exchanging codes or refreshing tokens.
	fn token_endpoint(&self) -> Result<Url>;

	/// URL the engine fetches the resource-owner profile from.
	///
	/// The token is part of the hook signature because some providers embed it in the URL;
	/// implementations are free to ignore it.
	fn user_info_endpoint(&self, token: &AccessToken) -> Result<Url>;

	/// Scopes requested when the caller supplies none.
	fn default_scopes(&self) -> &[&str];

	/// Separator used to join a scope list into one query parameter.
	fn scope_separator(&self) -> &str {
		" "
	}

	/// Joins the requested scopes into the `scope` parameter value, falling back to
	/// [`default_scopes`](Self::default_scopes) when the list is empty.
	fn scope_parameter(&self, scopes: &[&str]) -> String {
		let scopes = if scopes.is_empty() { self.default_scopes() } else { scopes };

		scopes.join(self.scope_separator())
	}

	/// Headers attached to every request the engine sends to the provider.
	fn default_headers(&self) -> BTreeMap<String, String> {
		BTreeMap::new()
	}

	/// Headers authenticating a request on behalf of the resource owner.
	///
	/// The default implementation produces a standard bearer header; providers that
	/// authenticate differently override this hook.
	fn authorization_headers(&self, token: &AccessToken) -> BTreeMap<String, String> {
		BTreeMap::from([(AUTHORIZATION.to_owned(), format!("Bearer {}", token.secret()))])
	}

	/// Checks a raw provider response before the engine parses it further.
	fn validate_response(&self, status: u16, reason: &str, body: &[u8]) -> Result<()>;

	/// Builds the resource-owner value from a parsed user-info payload and the token used to
	/// fetch it.
	fn build_resource_owner(&self, user_info: Map<String, Value>, token: AccessToken)
	-> Self::Owner;
}

/// Read contract the engine exposes for a fetched resource owner.
pub trait ResourceOwner {
	/// Unique identifier of the resource owner.
	fn id(&self) -> Result<&str>;

	/// Stored user-info payload, verbatim.
	fn to_map(&self) -> &Map<String, Value>;

	/// Access token used to retrieve this profile.
	fn token(&self) -> &AccessToken;
}
