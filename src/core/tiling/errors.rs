use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSizeError {
    ZeroKernelSize,
    NotPowerOfTwo { kernel_size: u32 },
    TooLarge { kernel_size: u32 },
}

impl fmt::Display for KernelSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroKernelSize => write!(f, "kernel size must be greater than zero"),
            Self::NotPowerOfTwo { kernel_size } => {
                write!(f, "kernel size {} is not a power of two", kernel_size)
            }
            Self::TooLarge { kernel_size } => {
                write!(f, "kernel size {} is too large", kernel_size)
            }
        }
    }
}

impl Error for KernelSizeError {}
