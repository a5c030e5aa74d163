#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: i64, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Applies the window to an already ordered slice of rows.
    pub fn slice<T: Clone>(&self, rows: &[T]) -> Vec<T> {
        let offset = self.offset.unwrap_or(0).max(0) as usize;
        let limit = self.limit.max(0) as usize;
        rows.iter().skip(offset).take(limit).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn slice_applies_offset_then_limit() {
        let rows = vec![1, 2, 3, 4, 5];
        assert_eq!(Pagination::new(2, None).slice(&rows), vec![1, 2]);
        assert_eq!(Pagination::new(2, Some(3)).slice(&rows), vec![4, 5]);
        assert_eq!(Pagination::new(10, Some(9)).slice(&rows), Vec::<i32>::new());
    }
}
