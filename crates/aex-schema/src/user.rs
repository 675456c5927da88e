//! # User Account Shapes (API 11–14)
//!
//! The account record returned by `GET /getUserDetailByEmail` and the form
//! bodies of the create, update and delete endpoints.
//!
//! Only `company` and `address2` are optional on an account. The update
//! request inverts this: `email` identifies the account and every other
//! field is optional.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Honorific accepted by the account endpoints. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
    Miss,
    Ms,
}

impl Title {
    pub const ALL: [Title; 4] = [Title::Mr, Title::Mrs, Title::Miss, Title::Ms];

    pub fn as_str(self) -> &'static str {
        match self {
            Title::Mr => "Mr",
            Title::Mrs => "Mrs",
            Title::Miss => "Miss",
            Title::Ms => "Ms",
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user account.
///
/// The live service also returns an `id`; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub title: Title,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
}

/// Form body of `POST /createAccount`: an account plus its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub title: Title,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
}

impl CreateUserRequest {
    /// Same request registered under a different email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// The account record this request would create.
    pub fn account(&self) -> UserAccount {
        UserAccount {
            name: self.name.clone(),
            email: self.email.clone(),
            title: self.title,
            birth_date: self.birth_date.clone(),
            birth_month: self.birth_month.clone(),
            birth_year: self.birth_year.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            company: self.company.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            country: self.country.clone(),
            zipcode: self.zipcode.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            mobile_number: self.mobile_number.clone(),
        }
    }
}

/// Form body of `PUT /updateAccount`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_month: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl UpdateUserRequest {
    /// An update that changes nothing but identifies the account.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}

/// Form body of `DELETE /deleteAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    pub email: String,
    pub password: String,
}

/// `GET /getUserDetailByEmail` success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserAccountResponse {
    #[serde(deserialize_with = "crate::number::integral")]
    pub response_code: u16,
    pub user: UserAccount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_serializes_as_bare_honorific() {
        for title in Title::ALL {
            let json = serde_json::to_value(title).unwrap();
            assert_eq!(json, serde_json::Value::String(title.to_string()));
        }
    }

    #[test]
    fn empty_update_serializes_email_only() {
        let json = serde_json::to_value(UpdateUserRequest::new("a@b.com")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.com"}));
    }
}
