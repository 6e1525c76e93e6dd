use crate::error::EncodeError;

use super::model::Catalog;

pub const HEADER_LEN: usize = 64;
pub const TRACK_HEADER_FIXED_LEN: usize = 20;
pub const TRACK_RECORD_LEN: usize = 372;
pub const PLAYLIST_HEADER_FIXED_LEN: usize = 20;
pub const PLAYLIST_RECORD_FIXED_LEN: usize = 44;

/// Every length and absolute offset of a catalog image.
///
/// Sections follow each other without padding:
/// ```text
/// header            64
/// track header      20 + 4 * tracks      (offset table included)
/// track records     372 * tracks
/// playlist header   20 + 4 * playlists   (offset table included)
/// playlist records  44 + 4 * members, each
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub header_len: u32,
    pub track_header_offset: u32,
    pub track_header_len: u32,
    /// Absolute offset of each track record.
    pub track_offsets: Vec<u32>,
    pub playlist_header_offset: u32,
    pub playlist_header_len: u32,
    /// Absolute offset of each playlist record.
    pub playlist_offsets: Vec<u32>,
    /// Length of each playlist record.
    pub playlist_lens: Vec<u32>,
    pub total_len: usize,
}

impl Layout {
    /// Size every section of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::ImageTooLarge`] if the image wouldn't be
    /// addressable with 32-bit offsets.
    pub fn plan(catalog: &Catalog) -> Result<Self, EncodeError> {
        let track_count = catalog.tracks.len();
        let playlist_count = catalog.playlists.len();

        let track_header_len = TRACK_HEADER_FIXED_LEN + 4 * track_count;
        let tracks_start = HEADER_LEN + track_header_len;
        let playlist_header_offset = tracks_start + TRACK_RECORD_LEN * track_count;
        let playlist_header_len = PLAYLIST_HEADER_FIXED_LEN + 4 * playlist_count;

        let playlist_lens: Vec<usize> = catalog
            .playlists
            .iter()
            .map(|p| PLAYLIST_RECORD_FIXED_LEN + 4 * p.members.len())
            .collect();
        let total_len =
            playlist_header_offset + playlist_header_len + playlist_lens.iter().sum::<usize>();

        // Every offset and length below is at most `total_len`.
        let fit = |v: usize| u32::try_from(v).map_err(|_| EncodeError::ImageTooLarge(total_len));
        fit(total_len)?;

        let track_offsets = (0..track_count)
            .map(|i| fit(tracks_start + TRACK_RECORD_LEN * i))
            .collect::<Result<Vec<_>, _>>()?;

        let mut playlist_offsets = Vec::with_capacity(playlist_count);
        let mut next = playlist_header_offset + playlist_header_len;
        for len in &playlist_lens {
            playlist_offsets.push(fit(next)?);
            next += len;
        }

        Ok(Self {
            header_len: fit(HEADER_LEN)?,
            track_header_offset: fit(HEADER_LEN)?,
            track_header_len: fit(track_header_len)?,
            track_offsets,
            playlist_header_offset: fit(playlist_header_offset)?,
            playlist_header_len: fit(playlist_header_len)?,
            playlist_offsets,
            playlist_lens: playlist_lens
                .into_iter()
                .map(fit)
                .collect::<Result<Vec<_>, _>>()?,
            total_len,
        })
    }
}
