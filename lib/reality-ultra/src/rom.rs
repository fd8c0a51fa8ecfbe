use crate::convert::Conversion;
use crate::endian::DataNotAligned;
use crate::format::RomFormat;
use log::debug;
use thiserror::Error;

/// No cartridge was ever larger than 128 MiB.
pub const MAX_ROM_SIZE: u64 = 128 * 1024 * 1024;

#[derive(Debug, PartialEq, Error)]
pub enum RomError {
    #[error(
        "Maximum file size is 128mb. No n64 rom should exceed this size. Is this a valid dump? ({0} bytes)"
    )]
    Oversized(u64),
    #[error("does not exist or is empty.")]
    EmptyOrMissing,
    #[error("Judging by the magic bytes ({0:02X?}), it isn't a valid Nintendo64 Rom")]
    UnrecognizedFormat(Vec<u8>),
    #[error(transparent)]
    Misaligned(#[from] DataNotAligned),
}

pub fn check_size(len: u64) -> Result<(), RomError> {
    if len > MAX_ROM_SIZE {
        Err(RomError::Oversized(len))?;
    }

    if len == 0 {
        Err(RomError::EmptyOrMissing)?;
    }

    Ok(())
}

#[derive(Debug)]
pub struct Rom {
    data: Vec<u8>,
    format: RomFormat,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Result<Rom, RomError> {
        check_size(data.len() as u64)?;

        let format = match RomFormat::classify(&data) {
            RomFormat::Invalid => Err(RomError::UnrecognizedFormat(
                data.iter().take(4).copied().collect(),
            ))?,
            f => f,
        };

        debug!("{:#x} byte ROM in {} order", data.len(), format);

        Ok(Rom { data, format })
    }

    pub fn format(&self) -> RomFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn conversion(&self, target: Option<RomFormat>) -> Result<Conversion, RomError> {
        Conversion::between(self.format, target)
            .map_err(|_| RomError::UnrecognizedFormat(self.data.iter().take(4).copied().collect()))
    }

    /// Reorders the data for `target`, or hands it back untouched when
    /// `target` is `None` or already the ROM's format.
    pub fn convert(self, target: Option<RomFormat>) -> Result<Vec<u8>, RomError> {
        let conversion = self.conversion(target)?;

        Ok(conversion.apply(self.data)?)
    }
}
