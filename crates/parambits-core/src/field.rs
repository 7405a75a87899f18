//! Field descriptors and primitive field kinds.

use std::fmt;

/// `bit_size` sentinel: the field is not bit-packed and occupies the natural
/// width of its type.
pub const NATURAL_WIDTH: i32 = -1;

/// Primitive kind of a paramdef field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    S8,
    U8,
    S16,
    U16,
    S32,
    U32,
    B32,
    F32,
    Angle32,
    F64,
    /// Padding bytes or padding bits.
    Dummy8,
    /// Fixed-length narrow string.
    FixStr,
    /// Fixed-length wide (UTF-16) string.
    FixStrW,
}

impl FieldType {
    pub const ALL: [FieldType; 13] = [
        FieldType::S8,
        FieldType::U8,
        FieldType::S16,
        FieldType::U16,
        FieldType::S32,
        FieldType::U32,
        FieldType::B32,
        FieldType::F32,
        FieldType::Angle32,
        FieldType::F64,
        FieldType::Dummy8,
        FieldType::FixStr,
        FieldType::FixStrW,
    ];

    /// Parse the type name used in definition files (`u8`, `dummy8`, `fixstrW`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldType::S8 => "s8",
            FieldType::U8 => "u8",
            FieldType::S16 => "s16",
            FieldType::U16 => "u16",
            FieldType::S32 => "s32",
            FieldType::U32 => "u32",
            FieldType::B32 => "b32",
            FieldType::F32 => "f32",
            FieldType::Angle32 => "angle32",
            FieldType::F64 => "f64",
            FieldType::Dummy8 => "dummy8",
            FieldType::FixStr => "fixstr",
            FieldType::FixStrW => "fixstrW",
        }
    }

    /// Size of one element in bytes.
    pub fn element_size(self) -> u32 {
        match self {
            FieldType::S8 | FieldType::U8 | FieldType::Dummy8 | FieldType::FixStr => 1,
            FieldType::S16 | FieldType::U16 | FieldType::FixStrW => 2,
            FieldType::S32
            | FieldType::U32
            | FieldType::B32
            | FieldType::F32
            | FieldType::Angle32 => 4,
            FieldType::F64 => 8,
        }
    }

    /// Types whose natural width is multiplied by the array length.
    pub fn is_array_type(self) -> bool {
        matches!(
            self,
            FieldType::Dummy8 | FieldType::FixStr | FieldType::FixStrW
        )
    }

    pub fn is_padding(self) -> bool {
        self == FieldType::Dummy8
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width a field occupies inside its record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldWidth {
    /// Not bit-packed; addressable by its own byte offset.
    Natural(u64),
    /// Explicitly bit-packed.
    Packed(u32),
}

impl FieldWidth {
    pub fn bits(self) -> u64 {
        match self {
            FieldWidth::Natural(bits) => bits,
            FieldWidth::Packed(bits) => bits as u64,
        }
    }
}

/// A field whose declared width or length cannot be laid out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("invalid bit size {0} (expected -1 or a non-negative width)")]
    InvalidBitSize(i32),

    #[error("negative array length {0}")]
    NegativeArrayLength(i32),

    #[error("bit size {bit_size} does not fit in a {field_type} field")]
    BitSizeExceedsType { bit_size: u32, field_type: FieldType },
}

/// One field of a parameter definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Internal (code) name.
    pub name: String,
    pub field_type: FieldType,
    /// Explicit bit width, or [`NATURAL_WIDTH`].
    pub bit_size: i32,
    /// Element count for array types; `<= 0` means zero-size.
    pub array_length: i32,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// A field occupying the natural width of its type.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            bit_size: NATURAL_WIDTH,
            array_length: 1,
            display_name: None,
            description: None,
        }
    }

    /// A field packed into `bits` bits.
    pub fn bits(name: impl Into<String>, field_type: FieldType, bits: i32) -> Self {
        Self {
            bit_size: bits,
            ..Self::new(name, field_type)
        }
    }

    /// An array field (only meaningful for array types).
    pub fn array(name: impl Into<String>, field_type: FieldType, length: i32) -> Self {
        Self {
            array_length: length,
            ..Self::new(name, field_type)
        }
    }

    pub fn is_bit_packed(&self) -> bool {
        self.bit_size != NATURAL_WIDTH
    }

    /// Resolve the number of bits this field occupies.
    pub fn width(&self) -> Result<FieldWidth, FieldError> {
        if self.array_length < 0 {
            return Err(FieldError::NegativeArrayLength(self.array_length));
        }

        if self.bit_size == NATURAL_WIDTH {
            let element_bits = 8 * self.field_type.element_size() as u64;
            let count = if self.field_type.is_array_type() {
                self.array_length as u64
            } else {
                1
            };
            return Ok(FieldWidth::Natural(element_bits * count));
        }

        let bit_size =
            u32::try_from(self.bit_size).map_err(|_| FieldError::InvalidBitSize(self.bit_size))?;

        if !self.field_type.is_padding() && bit_size > 8 * self.field_type.element_size() {
            return Err(FieldError::BitSizeExceedsType {
                bit_size,
                field_type: self.field_type,
            });
        }

        Ok(FieldWidth::Packed(bit_size))
    }
}
