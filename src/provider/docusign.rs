//! DocuSign provider configuration.
//!
//! A flat, immutable configuration table: two fixed base URLs (production and sandbox), three
//! well-known endpoint suffixes, the default scope set, and HTTP Basic client authentication
//! derived from the configured credentials. Every method is a pure function of
//! construction-time state—no caches, no retries, no I/O.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	error::IdentityProviderError,
	provider::hooks::{AUTHORIZATION, ProviderHooks},
	user::DocusignUser,
};

/// Production OAuth root.
pub const URL_ROOT: &str = "https://account.docusign.com/oauth";
/// Sandbox (demo environment) OAuth root.
pub const URL_ROOT_SANDBOX: &str = "https://account-d.docusign.com/oauth";

/// Scope covering eSignature operations.
pub const SCOPE_SIGNATURE: &str = "signature";
/// Scope allowing token refresh beyond the initial grant window.
pub const SCOPE_EXTENDED: &str = "extended";
/// Scope for acting on behalf of other users; intentionally not part of the default set.
pub const SCOPE_IMPERSONATION: &str = "impersonation";
/// Scopes requested when the caller supplies none.
pub const SCOPES_DEFAULT: &[&str] = &[SCOPE_SIGNATURE, SCOPE_EXTENDED];

const ENDPOINT_AUTHORIZATION: &str = "auth";
const ENDPOINT_ACCESS_TOKEN: &str = "token";
const ENDPOINT_USER_INFO: &str = "userinfo";
const SCOPE_SEPARATOR: &str = " ";

/// Immutable DocuSign provider configuration consumed by a generic OAuth 2.0 engine.
///
/// Created once per application configuration and freely shareable across threads; the
/// sandbox flag is fixed at construction and cannot be toggled afterward.
#[derive(Clone)]
pub struct Docusign {
	client_id: String,
	client_secret: String,
	redirect_uri: Url,
	sandbox: bool,
}
impl Docusign {
	/// Creates a production configuration from client credentials and the redirect URI
	/// registered with DocuSign.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri,
			sandbox: false,
		}
	}

	/// Selects the sandbox environment instead of production.
	pub fn sandbox(mut self, sandbox: bool) -> Self {
		self.sandbox = sandbox;

		self
	}

	/// Configured client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Redirect URI registered with the provider.
	pub fn redirect_uri(&self) -> &Url {
		&self.redirect_uri
	}

	/// Whether this configuration targets the sandbox environment.
	pub fn is_sandbox(&self) -> bool {
		self.sandbox
	}

	/// Resolves a path against the environment's OAuth root.
	///
	/// Exposed so callers holding an authenticated session can reach same-provider endpoints
	/// beyond the three well-known ones.
	pub fn resolve_url(&self, path: &str) -> Result<Url> {
		Url::parse(&format!("{}/{path}", self.base_url()))
			.map_err(|source| Error::InvalidEndpoint { source })
	}

	/// HTTP Basic credential value, recomputed on every call.
	pub fn basic_authorization(&self) -> String {
		format!(
			"Basic {}",
			STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret))
		)
	}

	fn base_url(&self) -> &'static str {
		if self.sandbox { URL_ROOT_SANDBOX } else { URL_ROOT }
	}
}
impl ProviderHooks for Docusign {
	type Owner = DocusignUser;

	fn authorization_endpoint(&self) -> Result<Url> {
		self.resolve_url(ENDPOINT_AUTHORIZATION)
	}

	fn token_endpoint(&self) -> Result<Url> {
		self.resolve_url(ENDPOINT_ACCESS_TOKEN)
	}

	fn user_info_endpoint(&self, _token: &AccessToken) -> Result<Url> {
		// DocuSign authenticates the user-info fetch via headers, never the URL.
		self.resolve_url(ENDPOINT_USER_INFO)
	}

	fn default_scopes(&self) -> &[&str] {
		SCOPES_DEFAULT
	}

	fn scope_separator(&self) -> &str {
		SCOPE_SEPARATOR
	}

	fn default_headers(&self) -> BTreeMap<String, String> {
		BTreeMap::from([(AUTHORIZATION.to_owned(), self.basic_authorization())])
	}

	fn validate_response(&self, status: u16, reason: &str, body: &[u8]) -> Result<()> {
		if status >= 400 {
			#[cfg(feature = "tracing")]
			tracing::warn!(status, reason, "Identity provider rejected the request.");

			return Err(IdentityProviderError::from_response(status, reason, body).into());
		}

		#[cfg(feature = "tracing")]
		tracing::debug!(status, "Identity provider response accepted.");

		Ok(())
	}

	fn build_resource_owner(
		&self,
		user_info: Map<String, Value>,
		token: AccessToken,
	) -> Self::Owner {
		DocusignUser::new(user_info, token)
	}
}
impl Debug for Docusign {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Docusign")
			.field("client_id", &self.client_id)
			.field("client_secret", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri.as_str())
			.field("sandbox", &self.sandbox)
			.finish()
	}
}
