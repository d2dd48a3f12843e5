use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub id: String,
}

/// A row of a post list. Only posts are tracked for visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ListItem {
    Post(PostRef),
    DateSeparator(String),
    NewMessagesLine,
    StartOfChannel,
}

impl ListItem {
    pub fn post(id: impl Into<String>) -> Self {
        ListItem::Post(PostRef { id: id.into() })
    }

    /// Id contributing to the visible set, if this row is tracked
    pub fn tracked_id(&self) -> Option<&str> {
        match self {
            ListItem::Post(post) => Some(&post.id),
            _ => None,
        }
    }
}

/// One entry of a viewable-items callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewToken {
    pub key: String,
    #[serde(default)]
    pub index: Option<usize>,
    pub is_viewable: bool,
    pub item: ListItem,
}

impl ViewToken {
    pub fn new(item: ListItem, is_viewable: bool) -> Self {
        let key = match &item {
            ListItem::Post(post) => post.id.clone(),
            ListItem::DateSeparator(date) => format!("date-{}", date),
            ListItem::NewMessagesLine => "new-messages".to_string(),
            ListItem::StartOfChannel => "start-of-channel".to_string(),
        };
        Self {
            key,
            index: None,
            is_viewable,
            item,
        }
    }
}

pub fn item_key(namespace: &str, id: &str) -> String {
    format!("{}-{}", namespace, id)
}

/// Keys of the tracked items currently inside the viewport, each mapped to
/// `true`. Serializes as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleItemSet(BTreeMap<String, bool>);

impl VisibleItemSet {
    pub fn from_tokens(namespace: &str, tokens: &[ViewToken]) -> Self {
        let items = tokens
            .iter()
            .filter(|token| token.is_viewable)
            .filter_map(|token| token.item.tracked_id())
            .map(|id| (item_key(namespace, id), true))
            .collect();
        Self(items)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
