use crate::error::EncodeError;

use super::layout::{
    HEADER_LEN, Layout, PLAYLIST_HEADER_FIXED_LEN, PLAYLIST_RECORD_FIXED_LEN, TRACK_RECORD_LEN,
};
use super::model::{Catalog, Playlist, Track};

const HEADER_TAG: &[u8; 4] = b"bdhs";
const TRACK_HEADER_TAG: &[u8; 4] = b"hths";
const TRACK_RECORD_TAG: &[u8; 4] = b"rths";
const PLAYLIST_HEADER_TAG: &[u8; 4] = b"hphs";
const PLAYLIST_RECORD_TAG: &[u8; 4] = b"lphs";

/// Database format and version bytes.
const FORMAT_VERSION: [u8; 4] = [0x03, 0x00, 0x00, 0x02];

/// Width of the null-padded path field in a track record.
pub const PATH_FIELD_LEN: usize = 256;
/// Longest path that still leaves room for a terminating NUL.
pub const MAX_PATH_LEN: usize = PATH_FIELD_LEN - 1;

/// Encode `catalog` into a complete `iTunesSD` image.
///
/// The output depends only on `catalog`, so the same tracks and playlists
/// always produce the same bytes.
///
/// # Errors
///
/// Returns [`EncodeError::PathTooLong`] for a track path that doesn't fit
/// the record, or [`EncodeError::ImageTooLarge`] from [`Layout::plan`].
pub fn encode(catalog: &Catalog) -> Result<Vec<u8>, EncodeError> {
    let layout = Layout::plan(catalog)?;
    let mut image = Vec::with_capacity(layout.total_len);

    image.extend_from_slice(&header(&layout, catalog));
    image.extend_from_slice(&track_header(&layout));
    for track in &catalog.tracks {
        image.extend_from_slice(&track_record(track)?);
    }
    image.extend_from_slice(&playlist_header(&layout));
    for offset in &layout.playlist_offsets {
        image.extend_from_slice(&offset.to_le_bytes());
    }
    for (playlist, len) in catalog.playlists.iter().zip(&layout.playlist_lens) {
        playlist_record(&mut image, playlist, *len);
    }

    debug_assert_eq!(image.len(), layout.total_len);
    Ok(image)
}

/// Database header.
///
/// Layout (64 bytes total):
/// ```text
/// [0..4]   tag                      b"bdhs"
/// [4..8]   format/version           03 00 00 02
/// [8..12]  header length            u32 le
/// [12..16] track count              u32 le
/// [16..20] playlist count           u32 le
/// [20..28] _pad
/// [28]     max volume               0 (no limit)
/// [29]     track voice-over enabled 1
/// [30..32] _pad
/// [32..36] music track count        u32 le (no podcasts or audiobooks)
/// [36..40] track header offset      u32 le
/// [40..44] playlist header offset   u32 le
/// [44..64] _pad
/// ```
fn header(layout: &Layout, catalog: &Catalog) -> [u8; HEADER_LEN] {
    let track_count = layout.track_offsets.len() as u32;
    let playlist_count = catalog.playlists.len() as u32;

    let mut buf = [0u8; HEADER_LEN];
    buf[0..4].copy_from_slice(HEADER_TAG);
    buf[4..8].copy_from_slice(&FORMAT_VERSION);
    buf[8..12].copy_from_slice(&layout.header_len.to_le_bytes());
    buf[12..16].copy_from_slice(&track_count.to_le_bytes());
    buf[16..20].copy_from_slice(&playlist_count.to_le_bytes());
    buf[29] = 1;
    buf[32..36].copy_from_slice(&track_count.to_le_bytes());
    buf[36..40].copy_from_slice(&layout.track_header_offset.to_le_bytes());
    buf[40..44].copy_from_slice(&layout.playlist_header_offset.to_le_bytes());
    buf
}

/// Track header: tag, own length, track count, 8 reserved bytes, then one
/// absolute offset per track record.
fn track_header(layout: &Layout) -> Vec<u8> {
    let mut buf = Vec::with_capacity(layout.track_header_len as usize);
    buf.extend_from_slice(TRACK_HEADER_TAG);
    buf.extend_from_slice(&layout.track_header_len.to_le_bytes());
    buf.extend_from_slice(&(layout.track_offsets.len() as u32).to_le_bytes());
    buf.extend_from_slice(&[0u8; 8]);
    for offset in &layout.track_offsets {
        buf.extend_from_slice(&offset.to_le_bytes());
    }
    buf
}

/// Track record.
///
/// Layout (372 bytes total):
/// ```text
/// [0..4]     tag                  b"rths"
/// [4..8]     record length        u32 le = 372
/// [8..12]    start position ms    0
/// [12..16]   stop position ms     u32 le
/// [16..20]   volume gain          0
/// [20..24]   audio type           u32 le
/// [24..280]  path                 "/" + device path, NUL padded
/// [280..284] bookmark             0
/// [284]      don't skip           1
/// [285]      remember position    0
/// [286]      uninterruptible      0
/// [287]      _pad
/// [288..296] gapless defaults     2 * u32 le 0x200
/// [296..312] _pad
/// [312..316] album id             u32 le
/// [316..318] track number         u16 le = 1
/// [318..320] disc number          u16 le = 0
/// [320..328] _pad
/// [328..336] dbid
/// [336..340] artist id            u32 le
/// [340..372] _pad
/// ```
fn track_record(track: &Track) -> Result<[u8; TRACK_RECORD_LEN], EncodeError> {
    let path = encode_path(&track.path)?;

    let mut buf = [0u8; TRACK_RECORD_LEN];
    buf[0..4].copy_from_slice(TRACK_RECORD_TAG);
    buf[4..8].copy_from_slice(&(TRACK_RECORD_LEN as u32).to_le_bytes());
    buf[12..16].copy_from_slice(&track.duration_ms.to_le_bytes());
    buf[20..24].copy_from_slice(&track.audio_type.code().to_le_bytes());
    buf[24..24 + PATH_FIELD_LEN].copy_from_slice(&path);
    buf[284] = 1;
    buf[288..292].copy_from_slice(&0x200u32.to_le_bytes());
    buf[292..296].copy_from_slice(&0x200u32.to_le_bytes());
    buf[312..316].copy_from_slice(&track.album_id.to_le_bytes());
    buf[316..318].copy_from_slice(&1u16.to_le_bytes());
    buf[328..336].copy_from_slice(&track.dbid);
    buf[336..340].copy_from_slice(&track.artist_id.to_le_bytes());
    Ok(buf)
}

/// `"/" + path`, NUL padded to the path field width.
pub(super) fn encode_path(path: &str) -> Result<[u8; PATH_FIELD_LEN], EncodeError> {
    let len = path.len() + 1;
    if len > MAX_PATH_LEN {
        return Err(EncodeError::PathTooLong {
            path: path.to_string(),
            len,
            max: MAX_PATH_LEN,
        });
    }

    let mut field = [0u8; PATH_FIELD_LEN];
    field[0] = b'/';
    field[1..len].copy_from_slice(path.as_bytes());
    Ok(field)
}

/// Playlist header, without the offset table that follows it.
///
/// The length field covers the offset table as well.
fn playlist_header(layout: &Layout) -> [u8; PLAYLIST_HEADER_FIXED_LEN] {
    let playlist_count = layout.playlist_offsets.len() as u32;

    let mut buf = [0u8; PLAYLIST_HEADER_FIXED_LEN];
    buf[0..4].copy_from_slice(PLAYLIST_HEADER_TAG);
    buf[4..8].copy_from_slice(&layout.playlist_header_len.to_le_bytes());
    buf[8..12].copy_from_slice(&playlist_count.to_le_bytes());
    // non-podcast playlists: all
    buf[12..14].copy_from_slice(&[0xff, 0xff]);
    // master playlists
    buf[14..16].copy_from_slice(&1u16.to_le_bytes());
    // non-audiobook playlists: all
    buf[16..18].copy_from_slice(&[0xff, 0xff]);
    buf
}

/// Playlist record: tag, length, member count (total and non-podcast),
/// dbid, type, 16 reserved bytes, then the member track indices.
fn playlist_record(out: &mut Vec<u8>, playlist: &Playlist, len: u32) {
    let member_count = playlist.members.len() as u32;

    let mut head = [0u8; PLAYLIST_RECORD_FIXED_LEN];
    head[0..4].copy_from_slice(PLAYLIST_RECORD_TAG);
    head[4..8].copy_from_slice(&len.to_le_bytes());
    head[8..12].copy_from_slice(&member_count.to_le_bytes());
    head[12..16].copy_from_slice(&member_count.to_le_bytes());
    head[16..24].copy_from_slice(&playlist.dbid);
    head[24..28].copy_from_slice(&playlist.kind.code().to_le_bytes());

    out.extend_from_slice(&head);
    for index in &playlist.members {
        out.extend_from_slice(&index.to_le_bytes());
    }
}
