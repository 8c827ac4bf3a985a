#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    FixedCapacity {
        capacity: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    CapacityOverflow {
        requested: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    SourceTooShort {
        required: usize,
        provided: usize,
    },
    Empty,
    ZeroSizedElement,
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FixedCapacity { capacity } => {
                write!(f, "exceeded fixed capacity of {}", capacity)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity of {} elements overflows the address space", requested)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
            Self::SourceTooShort { required, provided } => {
                write!(f, "source holds {} elements, {} were required", provided, required)
            },
            Self::Empty => {
                write!(f, "array is empty")
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for CapacityError {}
