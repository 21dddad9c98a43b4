//! TypedArray element kinds and backing storage
//!
//! Each typed array owns its bytes; views over a shared ArrayBuffer are not
//! modelled. Elements are little-endian.

use num_bigint::BigInt;

use crate::error::{JsError, JsResult};
use crate::value::{BigIntValue, JsValue};

/// TypedArray element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedArrayKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    Uint8,
    /// 8-bit unsigned integer (clamped)
    Uint8Clamped,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 64-bit signed BigInt
    BigInt64,
    /// 64-bit unsigned BigInt
    BigUint64,
}

impl TypedArrayKind {
    /// Every kind, in constructor declaration order
    pub const ALL: [TypedArrayKind; 11] = [
        TypedArrayKind::Int8,
        TypedArrayKind::Uint8,
        TypedArrayKind::Uint8Clamped,
        TypedArrayKind::Int16,
        TypedArrayKind::Uint16,
        TypedArrayKind::Int32,
        TypedArrayKind::Uint32,
        TypedArrayKind::Float32,
        TypedArrayKind::Float64,
        TypedArrayKind::BigInt64,
        TypedArrayKind::BigUint64,
    ];

    /// Get the byte size of each element for this kind
    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Get the constructor name of this TypedArray kind ([[TypedArrayName]])
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Whether elements read back as BigInt rather than Number
    pub fn is_bigint(&self) -> bool {
        matches!(self, TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64)
    }
}

/// Backing store of a typed array
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArrayData {
    kind: TypedArrayKind,
    bytes: Vec<u8>,
}

impl TypedArrayData {
    /// Zero-filled array with `length` elements
    pub fn new(kind: TypedArrayKind, length: usize) -> Self {
        TypedArrayData {
            kind,
            bytes: vec![0u8; length * kind.bytes_per_element()],
        }
    }

    /// Wrap raw bytes; the byte count must be a multiple of the element size
    pub fn from_bytes(kind: TypedArrayKind, bytes: Vec<u8>) -> JsResult<Self> {
        if bytes.len() % kind.bytes_per_element() != 0 {
            return Err(JsError::range_error(format!(
                "byte length of {} should be a multiple of {}",
                kind.name(),
                kind.bytes_per_element()
            )));
        }
        Ok(TypedArrayData { kind, bytes })
    }

    /// Uint8Array over the given bytes
    pub fn from_octets(bytes: Vec<u8>) -> Self {
        TypedArrayData {
            kind: TypedArrayKind::Uint8,
            bytes,
        }
    }

    /// Element kind
    pub fn kind(&self) -> TypedArrayKind {
        self.kind
    }

    /// Number of elements
    pub fn length(&self) -> usize {
        self.bytes.len() / self.kind.bytes_per_element()
    }

    /// Byte length of the backing store
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Read the element at `index`
    pub fn get(&self, index: usize) -> Option<JsValue> {
        let size = self.kind.bytes_per_element();
        let chunk = self.bytes.get(index * size..(index + 1) * size)?;
        let value = match self.kind {
            TypedArrayKind::Int8 => JsValue::Number(chunk[0] as i8 as f64),
            TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => {
                JsValue::Number(chunk[0] as f64)
            }
            TypedArrayKind::Int16 => {
                JsValue::Number(i16::from_le_bytes([chunk[0], chunk[1]]) as f64)
            }
            TypedArrayKind::Uint16 => {
                JsValue::Number(u16::from_le_bytes([chunk[0], chunk[1]]) as f64)
            }
            TypedArrayKind::Int32 => {
                JsValue::Number(i32::from_le_bytes(chunk.try_into().ok()?) as f64)
            }
            TypedArrayKind::Uint32 => {
                JsValue::Number(u32::from_le_bytes(chunk.try_into().ok()?) as f64)
            }
            TypedArrayKind::Float32 => {
                JsValue::Number(f32::from_le_bytes(chunk.try_into().ok()?) as f64)
            }
            TypedArrayKind::Float64 => JsValue::Number(f64::from_le_bytes(chunk.try_into().ok()?)),
            TypedArrayKind::BigInt64 => JsValue::BigInt(BigIntValue::new(BigInt::from(
                i64::from_le_bytes(chunk.try_into().ok()?),
            ))),
            TypedArrayKind::BigUint64 => JsValue::BigInt(BigIntValue::new(BigInt::from(
                u64::from_le_bytes(chunk.try_into().ok()?),
            ))),
        };
        Some(value)
    }

    /// All elements in index order
    pub fn elements(&self) -> Vec<JsValue> {
        (0..self.length()).filter_map(|i| self.get(i)).collect()
    }
}
