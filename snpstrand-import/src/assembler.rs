use std::collections::VecDeque;

use snpstrand_core::SubSnpRecord;

use crate::config::ImportConfig;
use crate::errors::AssembleError;
use crate::row::{SubSnpRow, record_from_group};
use crate::source::RowSource;

/// Rows accumulated for the submission currently being assembled.
///
/// Exactly one of these exists at a time. It survives page boundaries (a
/// group may span any number of pages) until a row with a different `ss_id`,
/// or the end of input, closes it.
struct PendingGroup {
    ss_id: i64,
    rows: Vec<SubSnpRow>,
}

impl PendingGroup {
    fn open(row: SubSnpRow) -> Self {
        PendingGroup {
            ss_id: row.ss_id,
            rows: vec![row],
        }
    }
}

/// Merges paged, ordered rows into one [`SubSnpRecord`] per submission id.
///
/// Single-pass: the source is consumed as the iterator advances and cannot
/// be rewound. Rows sharing an id are buffered in a single pending group and
/// flushed when the id changes or the source reports an empty page. Ids must
/// arrive in strictly ascending order; a row at or below an id that was
/// already closed is a fatal [`AssembleError::OutOfOrder`], never a silent
/// merge.
///
/// After any error the iterator is fused and yields nothing further.
pub struct SubSnpAssembler<S> {
    source: S,
    page_size: usize,
    page: VecDeque<SubSnpRow>,
    pending: Option<PendingGroup>,
    last_closed: Option<i64>,
    exhausted: bool,
    failed: bool,
}

impl<S: RowSource> SubSnpAssembler<S> {
    pub fn new(source: S, page_size: usize) -> Result<Self, AssembleError> {
        if page_size == 0 {
            return Err(AssembleError::InvalidPageSize);
        }
        Ok(SubSnpAssembler {
            source,
            page_size,
            page: VecDeque::new(),
            pending: None,
            last_closed: None,
            exhausted: false,
            failed: false,
        })
    }

    /// Convenience constructor taking the caller-supplied import settings.
    pub fn with_config(source: S, config: &ImportConfig) -> Result<Self, AssembleError> {
        config.validate()?;
        SubSnpAssembler::new(source, config.page_size)
    }

    /// Next buffered row, pulling one more page when the buffer runs dry.
    fn next_row(&mut self) -> Result<Option<SubSnpRow>, AssembleError> {
        if self.page.is_empty() && !self.exhausted {
            let rows = self.source.next_page(self.page_size)?;
            if rows.is_empty() {
                self.exhausted = true;
            } else {
                self.page = rows.into();
            }
        }
        Ok(self.page.pop_front())
    }

    fn advance(&mut self) -> Result<Option<SubSnpRecord>, AssembleError> {
        loop {
            let Some(row) = self.next_row()? else {
                // end of input: flush whatever is still buffered
                let Some(group) = self.pending.take() else {
                    return Ok(None);
                };
                self.last_closed = Some(group.ss_id);
                return Ok(Some(record_from_group(&group.rows)?));
            };

            // the highest id observed so far, open or closed
            let latest = self.pending.as_ref().map(|g| g.ss_id).or(self.last_closed);
            if let Some(latest) = latest {
                if row.ss_id < latest {
                    return Err(AssembleError::OutOfOrder {
                        ss_id: row.ss_id,
                        latest,
                    });
                }
            }

            if let Some(group) = self.pending.as_mut() {
                if group.ss_id == row.ss_id {
                    group.rows.push(row);
                    continue;
                }
            }

            // id changed (or this is the very first row): open a fresh group
            // and emit the one it displaces
            let closed = self.pending.replace(PendingGroup::open(row));
            if let Some(group) = closed {
                self.last_closed = Some(group.ss_id);
                return Ok(Some(record_from_group(&group.rows)?));
            }
        }
    }
}

impl<S: RowSource> Iterator for SubSnpAssembler<S> {
    type Item = Result<SubSnpRecord, AssembleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(record) => record.map(Ok),
            Err(error) => {
                self.failed = true;
                Some(Err(error))
            }
        }
    }
}
