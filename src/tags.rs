use serde::Serialize;

pub const TAG_ACTION: &str = "action";
pub const TAG_SENDER: &str = "sender";
pub const TAG_RECEIVER: &str = "receiver";
pub const TAG_CHANNEL_ID: &str = "channel_id";
pub const TAG_AMOUNT: &str = "amount";
pub const TAG_SENDER_AMOUNT: &str = "sender_amount";
pub const TAG_RECEIVER_AMOUNT: &str = "receiver_amount";

/// One key/value pair describing a successful operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub key: &'static str,
    pub value: String,
}

/// Descriptive metadata emitted alongside a successful operation, for
/// external indexing and event construction. The set of keys is
/// informational, not part of the accounting contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push(Tag {
            key,
            value: value.into(),
        });
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
