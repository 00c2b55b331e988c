use anyhow::Result;

use crate::row::SubSnpRow;

/// Pull-based supplier of legacy submission rows.
///
/// Implementations wrap whatever actually executes the paged query (the
/// database adapter lives outside this crate). The assembler only requires
/// that rows arrive globally ordered ascending by `ss_id`, with no
/// interleaving of two ids, and that an empty page marks the end of the
/// result set.
pub trait RowSource {
    /// Fetch the next page of at most `page_size` rows.
    ///
    /// An empty page terminates the stream; it is never transient. Errors
    /// abort the import pass and propagate to the caller unmodified.
    fn next_page(&mut self, page_size: usize) -> Result<Vec<SubSnpRow>>;
}

/// Row source over rows already held in memory.
///
/// Pages are sliced off the vector in order. Useful for tests and small
/// fixtures; real imports stream from the database instead.
pub struct VecRowSource {
    rows: Vec<SubSnpRow>,
    cursor: usize,
}

impl VecRowSource {
    pub fn new(rows: Vec<SubSnpRow>) -> Self {
        VecRowSource { rows, cursor: 0 }
    }
}

impl RowSource for VecRowSource {
    fn next_page(&mut self, page_size: usize) -> Result<Vec<SubSnpRow>> {
        let remaining = self.rows.len() - self.cursor;
        let take = remaining.min(page_size);
        let page = self.rows[self.cursor..self.cursor + take].to_vec();
        self.cursor += take;
        Ok(page)
    }
}
