use std::fmt;
use std::path::Path;

pub const N64_MAGIC: [u8; 4] = [0x40, 0x12, 0x37, 0x80];
pub const Z64_MAGIC: [u8; 4] = [0x80, 0x37, 0x12, 0x40];
pub const V64_MAGIC: [u8; 4] = [0x37, 0x80, 0x40, 0x12];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RomFormat {
    Invalid,
    N64,
    Z64,
    V64,
}

impl RomFormat {
    pub fn classify(data: &[u8]) -> RomFormat {
        if data.starts_with(&N64_MAGIC) {
            RomFormat::N64
        } else if data.starts_with(&Z64_MAGIC) {
            RomFormat::Z64
        } else if data.starts_with(&V64_MAGIC) {
            RomFormat::V64
        } else {
            RomFormat::Invalid
        }
    }

    /// Matches a bare extension exactly as given, so `"Z64"` is not `Z64`.
    pub fn from_extension(ext: &str) -> Option<RomFormat> {
        Some(match ext {
            "n64" => RomFormat::N64,
            "z64" => RomFormat::Z64,
            "v64" => RomFormat::V64,
            _ => None?,
        })
    }

    pub fn from_path(path: &Path) -> Option<RomFormat> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(RomFormat::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            RomFormat::Invalid => "invalid",
            RomFormat::N64 => "n64",
            RomFormat::Z64 => "z64",
            RomFormat::V64 => "v64",
        }
    }

    pub fn magic(self) -> Option<[u8; 4]> {
        match self {
            RomFormat::Invalid => None,
            RomFormat::N64 => Some(N64_MAGIC),
            RomFormat::Z64 => Some(Z64_MAGIC),
            RomFormat::V64 => Some(V64_MAGIC),
        }
    }
}

impl fmt::Display for RomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_magic() {
        assert_eq!(
            RomFormat::classify(&[0x40, 0x12, 0x37, 0x80, 0xAA]),
            RomFormat::N64
        );
        assert_eq!(
            RomFormat::classify(&[0x80, 0x37, 0x12, 0x40]),
            RomFormat::Z64
        );
        assert_eq!(
            RomFormat::classify(&[0x37, 0x80, 0x40, 0x12, 0, 0, 0, 0]),
            RomFormat::V64
        );
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(RomFormat::classify(&[0; 8]), RomFormat::Invalid);
        assert_eq!(
            RomFormat::classify(&[0x40, 0x12, 0x37, 0x81]),
            RomFormat::Invalid
        );
    }

    #[test]
    fn classify_short() {
        assert_eq!(RomFormat::classify(&[]), RomFormat::Invalid);
        assert_eq!(RomFormat::classify(&[0x40, 0x12, 0x37]), RomFormat::Invalid);
    }

    #[test]
    fn magic_matches_classification() {
        for format in [RomFormat::N64, RomFormat::Z64, RomFormat::V64].iter() {
            let magic = format.magic().unwrap();

            assert_eq!(RomFormat::classify(&magic), *format);
        }

        assert_eq!(RomFormat::Invalid.magic(), None);
    }

    #[test]
    fn extension_lookup() {
        assert_eq!(RomFormat::from_extension("n64"), Some(RomFormat::N64));
        assert_eq!(RomFormat::from_extension("z64"), Some(RomFormat::Z64));
        assert_eq!(RomFormat::from_extension("v64"), Some(RomFormat::V64));
        assert_eq!(RomFormat::from_extension("Z64"), None);
        assert_eq!(RomFormat::from_extension(".z64"), None);
        assert_eq!(RomFormat::from_extension("bin"), None);
    }

    #[test]
    fn path_lookup() {
        assert_eq!(
            RomFormat::from_path(Path::new("roms/game.z64")),
            Some(RomFormat::Z64)
        );
        assert_eq!(
            RomFormat::from_path(Path::new("game.backup.v64")),
            Some(RomFormat::V64)
        );
        assert_eq!(RomFormat::from_path(Path::new("game.N64")), None);
        assert_eq!(RomFormat::from_path(Path::new("game")), None);
        assert_eq!(RomFormat::from_path(Path::new("roms.z64/game")), None);
    }
}
