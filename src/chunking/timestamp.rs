//! Block-header timestamp encoding

/// Encode a recording offset as the `minutes:seconds` label shown in
/// front of each block.
///
/// Hours fold into the minute count so labels keep increasing past the
/// one-hour mark (offset 1:01:05 becomes `61:05`). The components come
/// from plain integer division on the offset, so labels stay correct
/// for recordings longer than a day.
pub fn block_header(offset_ms: u64) -> String {
    let total_seconds = offset_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", hours * 60 + minutes, seconds)
}
