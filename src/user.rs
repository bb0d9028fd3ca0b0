//! Resource-owner model for the DocuSign user-info endpoint.

// self
use crate::{_prelude::*, error::UserInfoError, provider::hooks::ResourceOwner};

const FIELD_SUB: &str = "sub";
const FIELD_NAME: &str = "name";
const FIELD_EMAIL: &str = "email";
const FIELD_ACCOUNTS: &str = "accounts";
const FIELD_IS_DEFAULT: &str = "is_default";

/// Immutable read-view over the payload returned by DocuSign's user-info endpoint, paired
/// with the access token used to fetch it.
///
/// The payload is stored verbatim; typed accessors cover the documented fields and
/// [`to_map`](ResourceOwner::to_map) exposes everything else.
#[derive(Clone, Debug)]
pub struct DocusignUser {
	user_info: Map<String, Value>,
	token: AccessToken,
}
impl DocusignUser {
	/// Wraps a parsed user-info payload and its token.
	///
	/// No field validation happens here; absent fields surface later as lookup failures in
	/// the accessors.
	pub fn new(user_info: Map<String, Value>, token: AccessToken) -> Self {
		Self { user_info, token }
	}

	/// Display name of the user.
	pub fn name(&self) -> Result<&str> {
		self.str_field(FIELD_NAME)
	}

	/// Email address of the user.
	pub fn email(&self) -> Result<&str> {
		self.str_field(FIELD_EMAIL)
	}

	/// Account record marked as the user's default, if any.
	///
	/// Accounts are scanned in provider order and the first record with `is_default: true`
	/// wins; duplicate defaults are a provider data anomaly handled by that tie-break rather
	/// than an error. Returns `None` when `accounts` is absent, empty, or nothing is marked
	/// default.
	pub fn default_account(&self) -> Option<&Map<String, Value>> {
		let accounts = self.user_info.get(FIELD_ACCOUNTS)?.as_array()?;

		accounts
			.iter()
			.filter_map(Value::as_object)
			.find(|account| account.get(FIELD_IS_DEFAULT).and_then(Value::as_bool) == Some(true))
	}

	fn str_field(&self, field: &'static str) -> Result<&str> {
		let value =
			self.user_info.get(field).ok_or(UserInfoError::MissingField { field })?;

		value.as_str().ok_or_else(|| UserInfoError::UnexpectedType { field }.into())
	}
}
impl ResourceOwner for DocusignUser {
	fn id(&self) -> Result<&str> {
		self.str_field(FIELD_SUB)
	}

	fn to_map(&self) -> &Map<String, Value> {
		&self.user_info
	}

	fn token(&self) -> &AccessToken {
		&self.token
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn token() -> AccessToken {
		AccessToken::new("YTdhNWQ1NzUtY2E0Yy00ZmUxLThkMDAtYzZ".into())
	}

	fn user_info() -> Map<String, Value> {
		json!({
			"sub": "564f7988-0823-409a-ac8a",
			"name": "Example J Smith",
			"given_name": "Example",
			"family_name": "Smith",
			"created": "2018-04-13T22:03:03.45",
			"email": "Example.Smith@exampledomain.com",
			"accounts": [
				{
					"account_id": "18b4799a-b53a-4475-ba4d-b5b4b8a97604",
					"is_default": false,
					"account_name": "ExampleAccount1",
					"base_uri": "https://demo.docusign.net/account1",
				},
				{
					"account_id": "18b4799a-b53a-4475-ba4d-b5b4b8a97999",
					"is_default": true,
					"account_name": "ExampleAccount2",
					"base_uri": "https://demo.docusign.net/account2",
				},
			],
		})
		.as_object()
		.cloned()
		.expect("Fixture should be a JSON object.")
	}

	fn user() -> DocusignUser {
		DocusignUser::new(user_info(), token())
	}

	#[test]
	fn typed_accessors_read_documented_fields() {
		let user = user();

		assert_eq!(user.id().expect("`sub` should be present."), "564f7988-0823-409a-ac8a");
		assert_eq!(user.name().expect("`name` should be present."), "Example J Smith");
		assert_eq!(
			user.email().expect("`email` should be present."),
			"Example.Smith@exampledomain.com",
		);
		assert_eq!(user.token().secret(), token().secret());
	}

	#[test]
	fn to_map_preserves_payload_verbatim() {
		assert_eq!(user().to_map(), &user_info());
	}

	#[test]
	fn default_account_returns_first_record_marked_default() {
		let user = user();
		let account = user.default_account().expect("Second account is marked default.");

		assert_eq!(
			account.get("account_id").and_then(Value::as_str),
			Some("18b4799a-b53a-4475-ba4d-b5b4b8a97999"),
		);
		assert_eq!(
			account.get("account_name").and_then(Value::as_str),
			Some("ExampleAccount2"),
		);
	}

	#[test]
	fn default_account_is_none_without_a_marked_record() {
		let mut user_info = user_info();

		user_info.insert(
			"accounts".into(),
			json!([{ "account_id": "only", "is_default": false }]),
		);

		assert!(DocusignUser::new(user_info.clone(), token()).default_account().is_none());

		user_info.remove("accounts");

		assert!(DocusignUser::new(user_info, token()).default_account().is_none());
	}

	#[test]
	fn duplicate_defaults_resolve_to_the_first_record() {
		let mut user_info = user_info();

		user_info.insert(
			"accounts".into(),
			json!([
				{ "account_id": "first", "is_default": true },
				{ "account_id": "second", "is_default": true },
			]),
		);

		let user = DocusignUser::new(user_info, token());
		let account = user.default_account().expect("A default account exists.");

		assert_eq!(account.get("account_id").and_then(Value::as_str), Some("first"));
	}

	#[test]
	fn missing_and_mistyped_fields_surface_as_lookup_failures() {
		let mut user_info = user_info();

		user_info.remove("sub");
		user_info.insert("email".into(), json!(42));

		let user = DocusignUser::new(user_info, token());

		assert_eq!(
			user.id().expect_err("`sub` was removed."),
			Error::UserInfo(UserInfoError::MissingField { field: "sub" }),
		);
		assert_eq!(
			user.email().expect_err("`email` is not a string."),
			Error::UserInfo(UserInfoError::UnexpectedType { field: "email" }),
		);
	}
}
