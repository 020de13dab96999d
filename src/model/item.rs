use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

/// What a stored item holds: free text or a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Note,
    Url,
}

impl ItemKind {
    /// The string the backend uses for this kind.
    pub fn as_wire(self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Url => "url",
        }
    }

    /// Parse a backend kind string.
    pub fn from_wire(s: &str) -> Option<ItemKind> {
        match s {
            "note" => Some(ItemKind::Note),
            "url" => Some(ItemKind::Url),
            _ => None,
        }
    }

    /// Short label shown in the item list and capture badge.
    pub fn badge(self) -> &'static str {
        match self {
            ItemKind::Note => "note",
            ItemKind::Url => "link",
        }
    }
}

/// A persisted unit of captured content.
///
/// `id` and `created_at` are assigned by the backend; `kind` is decided once
/// at ingestion time and never recomputed. `created_at` is `None` for rows
/// that predate the backend's timestamp column.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub kind: ItemKind,
    pub content: String,
    pub created_at: Option<String>,
}

// The backend lists items as positional records `[id, kind, content,
// created_at]`. Decoding goes through an explicit visitor so shape drift
// fails as a decode error instead of producing half-filled items. Legacy
// three-element rows decode with no timestamp.
impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = Item;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an [id, kind, content, created_at] record")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Item, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let id: i64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let kind: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let kind = ItemKind::from_wire(&kind)
                    .ok_or_else(|| de::Error::custom(format!("unknown item kind {:?}", kind)))?;
                let content: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let created_at: Option<Option<String>> = seq.next_element()?;

                Ok(Item {
                    id,
                    kind,
                    content,
                    created_at: created_at.flatten(),
                })
            }
        }

        deserializer.deserialize_seq(ItemVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_record() {
        let item: Item =
            serde_json::from_str(r#"[12, "url", "https://example.com", "2026-08-07T10:00:00Z"]"#)
                .unwrap();
        assert_eq!(item.id, 12);
        assert_eq!(item.kind, ItemKind::Url);
        assert_eq!(item.content, "https://example.com");
        assert_eq!(item.created_at.as_deref(), Some("2026-08-07T10:00:00Z"));
    }

    #[test]
    fn decode_null_timestamp() {
        let item: Item = serde_json::from_str(r#"[3, "note", "Buy milk", null]"#).unwrap();
        assert_eq!(item.kind, ItemKind::Note);
        assert_eq!(item.created_at, None);
    }

    #[test]
    fn decode_legacy_three_element_record() {
        let item: Item = serde_json::from_str(r#"[1, "note", "old row"]"#).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.created_at, None);
    }

    #[test]
    fn decode_rejects_unknown_kind() {
        let err = serde_json::from_str::<Item>(r#"[1, "image", "x", null]"#);
        assert!(err.is_err());
    }

    #[test]
    fn decode_rejects_short_record() {
        assert!(serde_json::from_str::<Item>(r#"[1, "note"]"#).is_err());
    }

    #[test]
    fn decode_rejects_non_array() {
        assert!(serde_json::from_str::<Item>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn decode_listing() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[[2, "url", "http://a.b", "2026-08-07T10:00:00Z"], [1, "note", "first", null]]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[1].id, 1);
    }

    #[test]
    fn wire_round_trip() {
        assert_eq!(ItemKind::from_wire("note"), Some(ItemKind::Note));
        assert_eq!(ItemKind::from_wire("url"), Some(ItemKind::Url));
        assert_eq!(ItemKind::from_wire("URL"), None);
        assert_eq!(ItemKind::Note.as_wire(), "note");
        assert_eq!(ItemKind::Url.as_wire(), "url");
    }
}
