//! Decoders from a parsed JSON tree into the typed response records.
//!
//! Scalar fields that are missing (or of the wrong type) read as their zero value.
//! The only decode failure is a `data` node that is missing or not an object, which
//! is reported as [`ReddModelsError::MalformedData`].

use crate::errors::ReddModelsError;
use crate::structures::{ApiError, IdentityResult, Item, ItemPage, TokenRefreshResult};
use crate::utils::{get_array, get_f64, get_i64, get_str};
use log::debug;
use serde_json::Value;

/// Records that can be built from a single JSON node.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, ReddModelsError>;
}

impl FromValue for TokenRefreshResult {
    fn from_value(value: &Value) -> Result<Self, ReddModelsError> {
        Ok(decode_token_refresh(value))
    }
}

impl FromValue for IdentityResult {
    fn from_value(value: &Value) -> Result<Self, ReddModelsError> {
        Ok(decode_identity(value))
    }
}

impl FromValue for Item {
    fn from_value(value: &Value) -> Result<Self, ReddModelsError> {
        decode_item(value)
    }
}

impl FromValue for ItemPage {
    fn from_value(value: &Value) -> Result<Self, ReddModelsError> {
        decode_item_page(value)
    }
}

/// Decode any [`FromValue`] record from an already parsed node
pub fn decode<T: FromValue>(value: &Value) -> Result<T, ReddModelsError> {
    T::from_value(value)
}

/// Parse a raw payload and decode it in one go
pub fn parse<T: FromValue>(payload: &str) -> Result<T, ReddModelsError> {
    let value: Value = serde_json::from_str(payload)?;
    T::from_value(&value)
}

/// Parse a raw error payload, attaching the transport status of the response
pub fn parse_error(payload: &str, status: u16) -> Result<ApiError, ReddModelsError> {
    let value: Value = serde_json::from_str(payload)?;
    Ok(decode_error(&value, status))
}

pub fn decode_error(value: &Value, status: u16) -> ApiError {
    ApiError {
        message: get_str(value, "message"),
        code: get_i64(value, "error"),
        status,
    }
}

pub fn decode_token_refresh(value: &Value) -> TokenRefreshResult {
    TokenRefreshResult {
        access_token: get_str(value, "access_token"),
        refresh_token: get_str(value, "refresh_token"),
    }
}

pub fn decode_identity(value: &Value) -> IdentityResult {
    IdentityResult {
        id: get_str(value, "id"),
        name: get_str(value, "name"),
    }
}

pub fn decode_item(value: &Value) -> Result<Item, ReddModelsError> {
    let kind = get_str(value, "kind");
    let data = data_node(value, "item")?;

    Ok(Item {
        kind,
        id: get_str(data, "id"),
        item_type: get_str(data, "type"),
        author: get_str(data, "author"),
        subject: get_str(data, "subject"),
        body: get_str(data, "body"),
        created_at: get_f64(data, "created_utc"),
        context: get_str(data, "context"),
        parent_id: get_str(data, "parent_id"),
        link_title: get_str(data, "link_title"),
        destination: get_str(data, "dest"),
        subreddit: get_str(data, "subreddit"),
    })
}

pub fn decode_item_page(value: &Value) -> Result<ItemPage, ReddModelsError> {
    let data = data_node(value, "listing")?;
    let children = get_array(data, "children");

    let mut page = ItemPage {
        count: children.len(),
        children: Vec::new(),
        after: get_str(data, "after"),
        before: get_str(data, "before"),
    };
    debug!(
        "Decoding listing with {} children (after: {:?}, before: {:?})",
        page.count, page.after, page.before
    );

    if page.count == 0 {
        return Ok(page);
    }

    let mut items = Vec::with_capacity(page.count);
    for child in children {
        items.push(decode_item(child)?);
    }
    page.children = items;

    Ok(page)
}

/// Get the nested `data` object, refusing to read fields from anything else
fn data_node<'v>(value: &'v Value, record: &'static str) -> Result<&'v Value, ReddModelsError> {
    match value.get("data") {
        Some(data) if data.is_object() => Ok(data),
        _ => {
            debug!("Payload for {} has no `data` object", record);
            Err(ReddModelsError::MalformedData(record))
        }
    }
}
