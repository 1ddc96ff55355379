//! Response models for the Reddit API.
//!
//! Payloads are parsed with `serde_json` and handed to the decoders in [`decode`],
//! which build the flat records in [`structures`].

pub mod decode;
pub mod errors;
pub mod structures;
pub mod utils;

pub use decode::{
    decode, decode_error, decode_identity, decode_item, decode_item_page, decode_token_refresh,
    parse, parse_error, FromValue,
};
pub use errors::ReddModelsError;
pub use structures::{
    ApiError, IdentityResult, Item, ItemKind, ItemPage, TokenRefreshResult, EMPTY_ITEM_PAGE,
};
