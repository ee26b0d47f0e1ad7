use super::RecordId;

/// Category id that matches every record.
pub const CATEGORY_ALL: &str = "all";

/// A single entity of a static collection.
///
/// `category` feeds the chip filter, `search_fields` the free-text search.
pub trait Record {
    type Id: RecordId;

    fn id(&self) -> Self::Id;

    fn category(&self) -> &str;

    fn search_fields(&self) -> Vec<&str>;

    /// Ключ для рендеринга списков и выбора записи
    fn key(&self) -> String {
        self.id().as_string()
    }
}

/// Filter chip shown above a collection (`{ id, name, count }`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryChip {
    pub id: String,
    pub name: String,
    pub count: usize,
}

impl CategoryChip {
    pub fn new(id: &str, name: &str, count: usize) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            count,
        }
    }
}

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
