use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("{len} bytes is not a multiple of the {window}-byte swap window")]
pub struct DataNotAligned {
    pub len: usize,
    pub window: usize,
}

/// A single pass over the whole buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Swap {
    /// Exchange the bytes of every 16-bit half.
    Two,
    /// Reverse every 32-bit word.
    Four,
}

impl Swap {
    pub fn window(self) -> usize {
        match self {
            Swap::Two => 2,
            Swap::Four => 4,
        }
    }

    pub fn apply(self, data: Vec<u8>) -> Result<Vec<u8>, DataNotAligned> {
        match self {
            Swap::Two => byte_swap_two(data),
            Swap::Four => byte_swap_four(data),
        }
    }

    /// Runs the pass without a length check; `data` must already be a
    /// multiple of `window()`.
    pub(crate) fn run(self, data: &mut [u8]) {
        match self {
            Swap::Two => {
                for i in (0..data.len()).step_by(2) {
                    swap_pair(data, i);
                }
            }
            Swap::Four => {
                for i in (0..data.len()).step_by(4) {
                    swap_quad(data, i);
                }
            }
        }
    }
}

#[inline(always)]
pub fn swap_pair(data: &mut [u8], i: usize) {
    data.swap(i, i + 1);
}

#[inline(always)]
pub fn swap_quad(data: &mut [u8], i: usize) {
    data.swap(i, i + 3);
    data.swap(i + 1, i + 2);
}

pub(crate) fn check_aligned(data: &[u8], window: usize) -> Result<(), DataNotAligned> {
    if data.len() % window != 0 {
        Err(DataNotAligned {
            len: data.len(),
            window,
        })?;
    }

    Ok(())
}

pub fn byte_swap_two(mut data: Vec<u8>) -> Result<Vec<u8>, DataNotAligned> {
    check_aligned(&data, 2)?;
    Swap::Two.run(&mut data);

    Ok(data)
}

pub fn byte_swap_four(mut data: Vec<u8>) -> Result<Vec<u8>, DataNotAligned> {
    check_aligned(&data, 4)?;
    Swap::Four.run(&mut data);

    Ok(data)
}
