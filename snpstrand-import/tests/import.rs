//! End-to-end assembly checks: paginated rows in, forward-strand values out.

use anyhow::anyhow;
use pretty_assertions::assert_eq;

use snpstrand_import::{AssembleError, RowSource, SubSnpAssembler, SubSnpRow, VecRowSource};

fn row(ss_id: i64, alleles: &str, subsnp_orientation: i32) -> SubSnpRow {
    SubSnpRow {
        ss_id,
        rs_id: Some(13677177),
        subsnp_orientation,
        snp_orientation: 1,
        contig_orientation: 1,
        contig: "NT_455866.1".to_string(),
        contig_start: 1766472,
        contig_end: 1766472,
        chromosome: Some("4".to_string()),
        chromosome_start: Some(91223961),
        chromosome_end: Some(91223961),
        locus_type: 2,
        hgvs_c_reference: None,
        hgvs_c_string: None,
        hgvs_c_start: None,
        hgvs_c_stop: None,
        hgvs_c_orientation: 1,
        hgvs_t_reference: None,
        hgvs_t_string: None,
        hgvs_t_start: None,
        hgvs_t_stop: None,
        hgvs_t_orientation: 1,
        alternate: Some("A".to_string()),
        alleles: alleles.to_string(),
        batch: "chicken_batch".to_string(),
    }
}

fn with_hgvs_c(mut base: SubSnpRow, reference: &str, orientation: i32) -> SubSnpRow {
    base.hgvs_c_reference = Some(reference.to_string());
    base.hgvs_c_string = Some("NC_006091.4:g.91223961T>A".to_string());
    base.hgvs_c_start = Some(91223961);
    base.hgvs_c_stop = Some(91223961);
    base.hgvs_c_orientation = orientation;
    base
}

fn with_hgvs_t(mut base: SubSnpRow, reference: &str, orientation: i32) -> SubSnpRow {
    base.hgvs_t_reference = Some(reference.to_string());
    base.hgvs_t_string = Some("NT_455866.1:g.1766472T>A".to_string());
    base.hgvs_t_start = Some(1766472);
    base.hgvs_t_stop = Some(1766472);
    base.hgvs_t_orientation = orientation;
    base
}

/// A source that fails on its second page.
struct FlakySource {
    pages: usize,
}

impl RowSource for FlakySource {
    fn next_page(&mut self, _page_size: usize) -> anyhow::Result<Vec<SubSnpRow>> {
        self.pages += 1;
        if self.pages == 1 {
            Ok(vec![row(1, "T/A", 1)])
        } else {
            Err(anyhow!("connection reset by peer"))
        }
    }
}

#[test]
fn group_cut_at_page_boundary_assembles_once() {
    // two rows of ss 10 land on different pages
    let rows = vec![
        row(9, "T/A", 1),
        with_hgvs_c(row(10, "T/A", 1), "T", 1),
        with_hgvs_t(row(10, "T/A", 1), "T", 1),
        row(11, "T/A", 1),
    ];

    let paginated: Vec<_> = SubSnpAssembler::new(VecRowSource::new(rows.clone()), 2)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let unpaginated: Vec<_> = SubSnpAssembler::new(VecRowSource::new(rows), 1000)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(paginated, unpaginated);
    assert_eq!(paginated.len(), 3);

    let merged = &paginated[1];
    assert_eq!(merged.ss_id, 10);
    assert!(merged.hgvs_c.is_some());
    assert!(merged.hgvs_t.is_some());
    assert_eq!(merged.reference_forward_strand().unwrap(), "T");
}

#[test]
fn assembled_records_resolve_forward_strand_values() {
    let mut insertion_row = with_hgvs_c(row(1, "-/CCCT", -1), "-", 1);
    insertion_row.alternate = Some("CCCT".to_string());
    let rows = vec![insertion_row, row(2, "G/A", -1)];
    let records: Vec<_> = SubSnpAssembler::new(VecRowSource::new(rows), 10)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let insertion = &records[0];
    assert_eq!(insertion.reference_forward_strand().unwrap(), "");
    assert_eq!(insertion.alternate_forward_strand().unwrap(), "AGGG");
    assert_eq!(insertion.alleles_forward_strand(), "AGGG/");

    // no HGVS data: allele list still resolves, anchored accessors fail
    let bare = &records[1];
    assert_eq!(bare.alleles_forward_strand(), "T/C");
    assert!(bare.reference_forward_strand().is_err());
}

#[test]
fn source_failure_propagates_unmodified() {
    let mut assembler = SubSnpAssembler::new(FlakySource { pages: 0 }, 1).unwrap();

    // the buffered group for ss 1 is never flushed: the failure aborts the
    // pass before its boundary is known
    let error = assembler.next().unwrap().unwrap_err();
    match error {
        AssembleError::Source(inner) => {
            assert_eq!(inner.to_string(), "connection reset by peer")
        }
        other => panic!("expected a source error, got {other:?}"),
    }
    assert!(assembler.next().is_none());
}
