use crate::endian::{check_aligned, DataNotAligned, Swap};
use crate::format::RomFormat;
use log::debug;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("no conversion from an unrecognized byte order")]
pub struct UnrecognizedFormat;

/// The passes that take a ROM from one byte order to another, run in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Conversion(&'static [Swap]);

impl Conversion {
    pub const IDENTITY: Conversion = Conversion(&[]);

    /// `target` is `None` when the destination names no known format, which
    /// leaves the data as it is.
    pub fn between(
        source: RomFormat,
        target: Option<RomFormat>,
    ) -> Result<Conversion, UnrecognizedFormat> {
        use RomFormat::*;

        let passes: &'static [Swap] = match (source, target.unwrap_or(Invalid)) {
            (Invalid, _) => Err(UnrecognizedFormat)?,
            (_, Invalid) => &[],
            (N64, N64) | (Z64, Z64) | (V64, V64) => &[],
            (N64, Z64) | (Z64, N64) => &[Swap::Four],
            (Z64, V64) | (V64, Z64) => &[Swap::Two],
            (N64, V64) => &[Swap::Four, Swap::Two],
            (V64, N64) => &[Swap::Two, Swap::Four],
        };

        Ok(Conversion(passes))
    }

    pub fn passes(&self) -> &'static [Swap] {
        self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }

    /// Length the data must be a multiple of for every pass to cover it.
    pub fn window(&self) -> usize {
        self.0.iter().map(|s| s.window()).max().unwrap_or(1)
    }

    /// Alignment is checked once up front, so a misaligned buffer is
    /// returned as an error before any pass has touched it.
    pub fn apply(&self, mut data: Vec<u8>) -> Result<Vec<u8>, DataNotAligned> {
        check_aligned(&data, self.window())?;

        for swap in self.0 {
            debug!("{:?} swap over {:#x} bytes", swap, data.len());

            swap.run(&mut data);
        }

        Ok(data)
    }
}
