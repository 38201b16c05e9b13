use serde::{Deserialize, Serialize};

/// Cursor-paged list in the shape the dashboard consumes.
#[derive(Debug, Serialize)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<u64>,
}

/// Upstream list endpoints answer either a bare array or `{items, nextCursor}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamPage<T> {
    Page {
        items: Vec<T>,
        #[serde(rename = "nextCursor")]
        next_cursor: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> UpstreamPage<T> {
    /// Flatten to items plus cursor. When the upstream omits the cursor, a
    /// short page means end of list, otherwise the next offset is computed
    /// from the one just served.
    pub fn normalize(self, offset: u64, limit: u64) -> CursorPage<T> {
        match self {
            UpstreamPage::Page {
                items,
                next_cursor: Some(cursor),
            } => CursorPage {
                items,
                next_cursor: Some(cursor),
            },
            UpstreamPage::Page {
                items,
                next_cursor: None,
            }
            | UpstreamPage::Bare(items) => {
                let next_cursor = if (items.len() as u64) < limit {
                    None
                } else {
                    Some(offset + limit)
                };
                CursorPage { items, next_cursor }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let page: UpstreamPage<u32> = serde_json::from_str("[1,2,3]").unwrap();
        let page = page.normalize(0, 10);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn parses_cursor_object() {
        let page: UpstreamPage<u32> =
            serde_json::from_str(r#"{"items":[1,2],"nextCursor":7}"#).unwrap();
        let page = page.normalize(0, 2);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next_cursor, Some(7));
    }

    #[test]
    fn computes_fallback_cursor_for_full_page() {
        let page: UpstreamPage<u32> = serde_json::from_str("[1,2,3,4,5]").unwrap();
        let page = page.normalize(10, 5);
        assert_eq!(page.next_cursor, Some(15));
    }

    #[test]
    fn null_cursor_falls_back_to_offset_arithmetic() {
        let page: UpstreamPage<u32> =
            serde_json::from_str(r#"{"items":[1,2],"nextCursor":null}"#).unwrap();
        assert_eq!(page.normalize(4, 2).next_cursor, Some(6));
    }
}
