use tracing::debug;

use crate::metadata::{TrackRecord, format_publisher, format_writer};

/// Rows with fewer cells than this are skipped.
pub const MIN_COLUMNS: usize = 34;

pub const FILENAME_COL: usize = 0;
pub const TITLE_COL: usize = 1;
pub const SOURCE_PROGRAM_COL: usize = 2;
pub const BPM_COL: usize = 4;
pub const KEY_COL: usize = 5;

pub const WRITER_START: usize = 12;
pub const PUBLISHER_START: usize = 18;
/// Distance between consecutive writer (or publisher) groups. Writer and
/// publisher groups interleave in the export template, so the stride spans
/// one group of each kind.
pub const GROUP_STRIDE: usize = 10;
pub const MAX_GROUPS: usize = 5;

const WRITER_WIDTH: usize = 6;
const PUBLISHER_WIDTH: usize = 4;

/// Result of decoding one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(TrackRecord),
    /// Too few cells; carries the cell count that was seen.
    Rejected { cells: usize },
}

/// Records decoded from a whole sheet plus the number of skipped rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub records: Vec<TrackRecord>,
    pub rejected: usize,
}

/// Trimmed cell text, or `""` when the column does not exist.
fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}

/// Start offsets of the groups that fit in `row_len` cells.
///
/// A group is dropped, along with every later group, once its last cell
/// index reaches the row length.
fn group_offsets(start: usize, width: usize, row_len: usize) -> impl Iterator<Item = usize> {
    (0..MAX_GROUPS)
        .map(move |i| start + i * GROUP_STRIDE)
        .take_while(move |offset| offset + width - 1 < row_len)
}

pub fn parse_writers(row: &[String]) -> Vec<String> {
    group_offsets(WRITER_START, WRITER_WIDTH, row.len())
        .filter_map(|o| {
            format_writer(
                cell(row, o),
                cell(row, o + 1),
                cell(row, o + 2),
                cell(row, o + 3),
                cell(row, o + 4),
                cell(row, o + 5),
            )
        })
        .collect()
}

pub fn parse_publishers(row: &[String]) -> Vec<String> {
    group_offsets(PUBLISHER_START, PUBLISHER_WIDTH, row.len())
        .filter_map(|o| {
            format_publisher(
                cell(row, o),
                cell(row, o + 1),
                cell(row, o + 2),
                cell(row, o + 3),
            )
        })
        .collect()
}

pub fn decode_row(row: &[String]) -> RowOutcome {
    if row.len() < MIN_COLUMNS {
        return RowOutcome::Rejected { cells: row.len() };
    }

    RowOutcome::Accepted(TrackRecord {
        filename_from_data: cell(row, FILENAME_COL).to_string(),
        track_title: cell(row, TITLE_COL).to_string(),
        source_program: cell(row, SOURCE_PROGRAM_COL).to_string(),
        bpm: cell(row, BPM_COL).to_string(),
        key: cell(row, KEY_COL).to_string(),
        writers: parse_writers(row),
        publishers: parse_publishers(row),
    })
}

/// Decode data rows in order. Header handling is the caller's concern.
pub fn decode_rows<I>(rows: I) -> Decoded
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut decoded = Decoded::default();

    for (idx, row) in rows.into_iter().enumerate() {
        match decode_row(&row) {
            RowOutcome::Accepted(record) => {
                debug!(
                    track = decoded.records.len() + 1,
                    filename_from_data = %record.filename_from_data,
                    title = %record.track_title,
                    source_program = %record.source_program,
                    bpm = %record.bpm,
                    key = %record.key,
                    writers = record.writers.len(),
                    publishers = record.publishers.len(),
                    "decoded track"
                );
                decoded.records.push(record);
            }
            RowOutcome::Rejected { cells } => {
                debug!(row = idx + 1, cells, "skipping row: insufficient columns");
                decoded.rejected += 1;
            }
        }
    }

    decoded
}
