use serde::Serialize;
use thiserror::Error;

/// An error reported by the Reddit API itself.
///
/// `status` is the status code of the HTTP call that carried the payload, set by the
/// caller; it is never read from the JSON body.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{message} ({code})")]
pub struct ApiError {
    /// Human readable message sent by the API
    pub message: String,
    /// Application-level error code, sent as `error` on the wire
    pub code: i64,
    /// Transport (HTTP) status of the response
    pub status: u16,
}

impl ApiError {
    /// True if the transport status is in the 4xx band
    pub fn is_client_error(&self) -> bool {
        (400..=499).contains(&self.status)
    }

    /// True if the transport status is in the 5xx band
    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status)
    }
}

/// Result of a call to the `access_token` endpoint with a refresh grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenRefreshResult {
    pub access_token: String,
    pub refresh_token: String,
}

/// The identity of the logged-in user, as returned by `/api/v1/me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentityResult {
    /// The id of the user
    pub id: String,
    /// The user's username, as typed at signup
    pub name: String,
}

impl IdentityResult {
    /// Lowercased username. Reddit usernames are case-insensitive.
    pub fn normalized_username(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The kind prefix of a Reddit object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    /// t1
    Comment,
    /// t2
    Account,
    /// t3
    Link,
    /// t4
    Message,
    /// t5
    Subreddit,
    /// t6
    Award,
    /// t8
    PromoCampaign,
    Listing,
    More,
    Other(String),
}

impl ItemKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "t1" => ItemKind::Comment,
            "t2" => ItemKind::Account,
            "t3" => ItemKind::Link,
            "t4" => ItemKind::Message,
            "t5" => ItemKind::Subreddit,
            "t6" => ItemKind::Award,
            "t8" => ItemKind::PromoCampaign,
            "Listing" => ItemKind::Listing,
            "more" => ItemKind::More,
            other => ItemKind::Other(other.to_string()),
        }
    }
}

/// A single Reddit object: a comment, a private message, a link and so on.
///
/// All kinds share this one flat record. Fields a kind does not carry are left
/// empty (or `0.0` for `created_at`); no field is required for any kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    /// The kind of object this is, eg: `t1`, `t4`
    pub kind: String,
    /// The ID of the object in base-36 form, without the kind prefix
    pub id: String,
    /// Sent as `type` on the wire, eg: `comment_reply`, `post_reply`
    pub item_type: String,
    pub author: String,
    /// Message subject
    pub subject: String,
    pub body: String,
    /// A timestamp of the time when the object was created, in **UTC** seconds
    pub created_at: f64,
    /// Permalink to the comment context of a message
    pub context: String,
    /// Full name of the parent object, including its kind prefix
    pub parent_id: String,
    pub link_title: String,
    /// Recipient of a message, sent as `dest` on the wire
    pub destination: String,
    pub subreddit: String,
}

impl Item {
    /// The full 'Thing ID', `<kind>_<id>`, eg: `t1_c3v7f8u`
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.kind, self.id)
    }

    pub fn item_kind(&self) -> ItemKind {
        ItemKind::parse(&self.kind)
    }
}

/// One page of a 'listing' endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPage {
    /// Number of children on this page
    pub count: usize,
    /// Children, in the order the API returned them
    pub children: Vec<Item>,
    /// Cursor for the next page, empty on the last page
    pub after: String,
    /// Cursor for the previous page, empty on the first page
    pub before: String,
}

impl ItemPage {
    pub const EMPTY: ItemPage = ItemPage {
        count: 0,
        children: Vec::new(),
        after: String::new(),
        before: String::new(),
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.children.iter()
    }
}

/// Shared "no results" page.
pub static EMPTY_ITEM_PAGE: ItemPage = ItemPage::EMPTY;
