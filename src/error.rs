//! Provider-level error types shared across hooks and the resource-owner model.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical provider error exposed by public APIs.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// Provider answered a token or user-info request with an error status.
	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
	/// User-info payload lookup failed.
	#[error(transparent)]
	UserInfo(#[from] UserInfoError),
	/// Endpoint URL could not be constructed.
	#[error("Endpoint URL could not be constructed.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Error response surfaced by the identity provider.
///
/// Any status of 400 or above maps to this single kind; client and server error classes are
/// deliberately not distinguished, and nothing here is retried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Identity provider returned HTTP {status}: {reason}.")]
pub struct IdentityProviderError {
	/// HTTP status code returned by the provider.
	pub status: u16,
	/// Provider-supplied reason phrase.
	pub reason: String,
	/// Preview of the response body, truncated for safe logging.
	pub body_preview: Option<String>,
}
impl IdentityProviderError {
	const BODY_PREVIEW_LIMIT: usize = 256;

	/// Builds an error from raw response parts, keeping only a bounded body preview.
	pub fn from_response(status: u16, reason: &str, body: &[u8]) -> Self {
		let body_preview = if body.is_empty() {
			None
		} else {
			Some(truncate_preview(String::from_utf8_lossy(body).into_owned()))
		};

		Self { status, reason: reason.to_owned(), body_preview }
	}
}

fn truncate_preview(body: String) -> String {
	if body.chars().count() <= IdentityProviderError::BODY_PREVIEW_LIMIT {
		return body;
	}

	let mut buf = String::new();

	for (idx, ch) in body.chars().enumerate() {
		if idx >= IdentityProviderError::BODY_PREVIEW_LIMIT {
			buf.push('…');

			break;
		}
		buf.push(ch);
	}

	buf
}

/// Lookup failures raised while reading the user-info payload.
///
/// The provider contract guarantees the required fields are present, so hitting one of these is
/// effectively a broken upstream response rather than a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum UserInfoError {
	/// Required field is absent from the payload.
	#[error("User info field `{field}` is missing.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
	/// Field is present but carries an unexpected JSON type.
	#[error("User info field `{field}` is not a string.")]
	UnexpectedType {
		/// Name of the mistyped field.
		field: &'static str,
	},
}
