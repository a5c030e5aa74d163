use serde::{Deserialize, Serialize};

/// Page of items together with the size of the whole result set.
#[derive(Debug, Serialize, Deserialize)]
pub struct List<T> {
    pub list: Vec<T>,
    pub total: i64,
}

impl<T> List<T> {
    pub fn new(list: Vec<T>, total: i64) -> Self {
        List { list, total }
    }
}
