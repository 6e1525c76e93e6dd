use std::collections::HashMap;

use md5::{Digest, Md5};

/// 8-byte identifier derived from display text.
///
/// Used as a record field and as the file name of the matching voice-over.
pub type Dbid = [u8; 8];

/// First 8 bytes of the MD5 digest of `text`.
///
/// Collisions between different texts are possible and not detected; the
/// width and byte order match what existing devices already carry.
pub fn dbid(text: &str) -> Dbid {
    let digest = Md5::digest(text.as_bytes());
    let mut id = [0u8; 8];
    id.copy_from_slice(&digest[..8]);
    id
}

/// Dense ids for distinct names, assigned in first-seen order from 0.
#[derive(Debug, Clone, Default)]
pub struct IdTable {
    ids: HashMap<String, u32>,
    names: Vec<String>,
}

impl IdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `name`, registering it if this is the first time it's seen.
    pub fn id_for(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
