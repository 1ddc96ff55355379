use reddmodels::{decode, decode_item, decode_item_page, parse, ItemKind, ItemPage, EMPTY_ITEM_PAGE};
use serde_json::{json, Value};

fn inbox() -> Value {
    json!({
        "kind": "Listing",
        "data": {
            "after": "t4_2xyz",
            "before": null,
            "dist": 3,
            "modhash": "",
            "children": [
                {
                    "kind": "t1",
                    "data": {
                        "id": "c1",
                        "type": "comment_reply",
                        "author": "alice",
                        "subject": "comment reply",
                        "body": "first",
                        "created_utc": 1_700_000_000.0,
                        "context": "/r/rust/comments/abc/title/c1/?context=3",
                        "parent_id": "t1_c0",
                        "link_title": "title",
                        "subreddit": "rust"
                    }
                },
                {
                    "kind": "t4",
                    "data": {
                        "id": "m1",
                        "author": "bob",
                        "subject": "hi",
                        "body": "second",
                        "created_utc": 1_700_000_100.0,
                        "dest": "carol",
                        "subreddit": null
                    }
                },
                {
                    "kind": "t1",
                    "data": {
                        "id": "c2",
                        "type": "post_reply",
                        "author": "dave",
                        "body": "third",
                        "parent_id": "t3_abc"
                    }
                }
            ]
        }
    })
}

#[test]
fn page_keeps_children_in_order() {
    let page = decode_item_page(&inbox()).unwrap();

    assert_eq!(page.count, 3);
    assert_eq!(page.children.len(), page.count);
    assert_eq!(page.after, "t4_2xyz");
    assert_eq!(page.before, "");

    let names: Vec<String> = page.iter().map(|item| item.full_name()).collect();
    assert_eq!(names, vec!["t1_c1", "t4_m1", "t1_c2"]);
}

#[test]
fn page_children_match_standalone_decode() {
    let value = inbox();
    let page = decode_item_page(&value).unwrap();
    let raw = value["data"]["children"].as_array().unwrap();

    for (item, child) in page.children.iter().zip(raw) {
        assert_eq!(item, &decode_item(child).unwrap());
    }
}

#[test]
fn kind_irrelevant_fields_stay_empty() {
    let page = decode_item_page(&inbox()).unwrap();

    let message = &page.children[1];
    assert_eq!(message.item_kind(), ItemKind::Message);
    assert_eq!(message.destination, "carol");
    assert_eq!(message.parent_id, "");
    assert_eq!(message.link_title, "");
    assert_eq!(message.subreddit, "");

    let reply = &page.children[2];
    assert_eq!(reply.item_kind(), ItemKind::Comment);
    assert_eq!(reply.created_at, 0.0);
    assert_eq!(reply.subject, "");
}

#[test]
fn empty_page_looks_like_shared_constant() {
    let page = decode_item_page(&json!({"kind": "Listing", "data": {"children": []}})).unwrap();
    assert_eq!(page, EMPTY_ITEM_PAGE);
    assert_eq!(page, ItemPage::EMPTY);
    assert!(page.is_empty());
}

#[test]
fn generic_decode_matches_named_decoder() {
    let value = inbox();
    let page: ItemPage = decode(&value).unwrap();
    assert_eq!(page, decode_item_page(&value).unwrap());

    let parsed: ItemPage = parse(&value.to_string()).unwrap();
    assert_eq!(parsed, page);
}
