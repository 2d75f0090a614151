use crate::utils::error::{CardsError, Result};
use serde_json::Value;

/// How to reach a board member: a real email address, or free text
/// (a phone number, a handle, "ask at the front desk", whatever).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contact {
    Email(String),
    Text(String),
}

impl Contact {
    /// Build a contact from its wire discriminator. Only `email` and
    /// `text` exist; anything else is a shape error.
    pub fn parse(kind: &str, content: impl Into<String>) -> Result<Self> {
        match kind {
            "email" => Ok(Contact::Email(content.into())),
            "text" => Ok(Contact::Text(content.into())),
            other => Err(CardsError::InvalidContactShape {
                reason: format!(
                    "unknown contact type `{}`, expected `email` or `text`",
                    other
                ),
            }),
        }
    }

    /// Build a contact from untyped JSON, `{"type": "email"|"text", "content": "..."}`.
    ///
    /// Non-object input fails with `InvalidContactType`; a missing or
    /// non-string discriminator/content fails with `InvalidContactShape`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| CardsError::InvalidContactType {
                found: json_type_name(value).to_string(),
            })?;

        let kind = map
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| CardsError::InvalidContactShape {
                reason: "`type` must be the string `email` or `text`".to_string(),
            })?;

        let content = map
            .get("content")
            .and_then(Value::as_str)
            .ok_or_else(|| CardsError::InvalidContactShape {
                reason: "`content` must be a string".to_string(),
            })?;

        Self::parse(kind, content)
    }

    pub fn content(&self) -> &str {
        match self {
            Contact::Email(address) => address,
            Contact::Text(content) => content,
        }
    }
}

/// One officer entry on a club card. Immutable after construction.
///
/// `name`, `image_url` and `role` are display text and deliberately
/// unvalidated; the contact is the only field with structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMember {
    name: String,
    image_url: String,
    role: String,
    contact: Contact,
}

impl BoardMember {
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        role: impl Into<String>,
        contact: Contact,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            role: role.into(),
            contact,
        }
    }

    /// Build a member from untyped JSON with the keys `name`,
    /// `imageURL`, `role`, `contact`. Non-contact fields are coerced
    /// to display strings; a missing contact counts as a contact-type
    /// error, not an absent field.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| CardsError::InvalidMemberList {
                reason: format!(
                    "member entry must be an object, got {}",
                    json_type_name(value)
                ),
            })?;

        let contact = Contact::from_value(map.get("contact").unwrap_or(&Value::Null))?;

        Ok(Self {
            name: display_string(map.get("name")),
            image_url: display_string(map.get("imageURL")),
            role: display_string(map.get("role")),
            contact,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

/// One club. Owns its board members; their order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubCard {
    name: String,
    image_url: String,
    description: String,
    members: Vec<BoardMember>,
}

impl ClubCard {
    /// The typed constructor cannot receive an invalid member, so it is
    /// infallible; `from_value` is the validated ingestion path.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        members: Vec<BoardMember>,
    ) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
            description: description.into(),
            members,
        }
    }

    /// Build a card from untyped JSON with the keys `clubName`,
    /// `clubImageURL`, `clubDescription`, `clubEBoardMembers`.
    /// A members field that is not a sequence, or
    /// an element that is not a member object, fails with
    /// `InvalidMemberList`; a member's own contact errors propagate as
    /// their own kinds.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| CardsError::InvalidMemberList {
                reason: format!("club card must be an object, got {}", json_type_name(value)),
            })?;

        let raw_members = map
            .get("clubEBoardMembers")
            .and_then(Value::as_array)
            .ok_or_else(|| CardsError::InvalidMemberList {
                reason: "`clubEBoardMembers` must be a sequence of members".to_string(),
            })?;

        let members = raw_members
            .iter()
            .map(BoardMember::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: display_string(map.get("clubName")),
            image_url: display_string(map.get("clubImageURL")),
            description: display_string(map.get("clubDescription")),
            members,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn members(&self) -> &[BoardMember] {
        &self.members
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Display-text fields accept anything string-coercible.
fn display_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
