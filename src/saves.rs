//! Save-slot descriptions.
//!
//! A save file starts with a fixed 24-byte, NUL padded description. The menu
//! only ever looks at that header; the rest of the file belongs to the game.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::strings::EMPTY_SLOT;
use crate::host::MapInfo;

/// Bytes reserved for a description, including the terminating NUL.
pub const SAVE_STRING_SIZE: usize = 24;

/// Result of reading one slot header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub description: String,
    /// A complete header was read and the slot can be loaded.
    pub loadable: bool,
}

impl SlotEntry {
    pub fn empty() -> Self {
        SlotEntry {
            description: EMPTY_SLOT.to_string(),
            loadable: false,
        }
    }
}

/// Interpret the result of reading a slot header. An open failure shows the
/// slot as empty; a short read keeps the text but marks the slot unloadable.
pub fn slot_entry(header: io::Result<Vec<u8>>) -> SlotEntry {
    match header {
        Err(e) => {
            debug!(error = %e, "save slot unreadable, showing as empty");
            SlotEntry::empty()
        }
        Ok(bytes) => {
            let len = bytes.len().min(SAVE_STRING_SIZE);
            let text = &bytes[..len];
            let end = text.iter().position(|&b| b == 0).unwrap_or(len);
            let description = String::from_utf8_lossy(&text[..end]).into_owned();
            SlotEntry {
                description,
                loadable: bytes.len() >= SAVE_STRING_SIZE,
            }
        }
    }
}

/// Build the default description for a joypad save: the map name, followed
/// by the add-on file name without extension when the map is not from the
/// base game. Upper cased and truncated to fit a slot.
pub fn default_save_name(map: &MapInfo) -> String {
    let name = if map.from_iwad && map.has_save_dir {
        map.lump.clone()
    } else {
        let file = Path::new(&map.wad_file);
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| map.wad_file.clone());
        format!("{} ({})", map.lump, stem)
    };
    name.to_ascii_uppercase()
        .chars()
        .take(SAVE_STRING_SIZE - 1)
        .collect()
}

/// Save files kept as `doomsav<N>.dsg` in one directory.
#[derive(Debug, Clone)]
pub struct DirSaveStore {
    dir: PathBuf,
}

impl DirSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirSaveStore { dir: dir.into() }
    }

    pub fn slot_path(&self, slot: usize) -> PathBuf {
        self.dir.join(format!("doomsav{}.dsg", slot))
    }

    /// Read up to `SAVE_STRING_SIZE` bytes from the start of the slot file.
    pub fn read_header(&self, slot: usize) -> io::Result<Vec<u8>> {
        let file = File::open(self.slot_path(slot))?;
        let mut buf = Vec::with_capacity(SAVE_STRING_SIZE);
        file.take(SAVE_STRING_SIZE as u64).read_to_end(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(s: &str) -> Vec<u8> {
        let mut v = s.as_bytes().to_vec();
        v.resize(SAVE_STRING_SIZE, 0);
        v
    }

    #[test]
    fn full_header_is_loadable() {
        let e = slot_entry(Ok(padded("HANGAR")));
        assert_eq!(e.description, "HANGAR");
        assert!(e.loadable);
    }

    #[test]
    fn short_header_is_not_loadable() {
        let e = slot_entry(Ok(b"HANG".to_vec()));
        assert_eq!(e.description, "HANG");
        assert!(!e.loadable);
    }

    #[test]
    fn open_failure_is_empty_slot() {
        let e = slot_entry(Err(io::Error::new(io::ErrorKind::NotFound, "x")));
        assert_eq!(e, SlotEntry::empty());
    }

    #[test]
    fn default_name_for_pwad_map_includes_file_stem() {
        let map = MapInfo {
            lump: "map07".into(),
            wad_file: "/wads/dead.simple.wad".into(),
            from_iwad: false,
            has_save_dir: true,
        };
        assert_eq!(default_save_name(&map), "MAP07 (DEAD.SIMPLE)");
        let iwad = MapInfo {
            from_iwad: true,
            ..map
        };
        assert_eq!(default_save_name(&iwad), "MAP07");
    }

    #[test]
    fn dir_store_reads_only_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirSaveStore::new(dir.path());
        let mut body = padded("ENTRYWAY");
        body.extend_from_slice(&[0xAA; 100]);
        std::fs::write(store.slot_path(2), &body).unwrap();
        let header = store.read_header(2).unwrap();
        assert_eq!(header.len(), SAVE_STRING_SIZE);
        assert_eq!(slot_entry(Ok(header)).description, "ENTRYWAY");
        assert!(store.read_header(3).is_err());
    }
}
