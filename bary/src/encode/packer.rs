use std::fmt;
use std::str::FromStr;

/// One slot of the stimulus record: `width` bits starting at bit `shift` (bit 0 is the LSB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    pub name: &'static str,
    pub shift: u32,
    pub width: u32,
}

impl BitField {
    pub const fn new(name: &'static str, shift: u32, width: u32) -> Self {
        Self { name, shift, width }
    }

    pub const fn mask(&self) -> u128 {
        (1u128 << self.width) - 1
    }

    /// Mask of the field in place inside a record.
    pub const fn slot(&self) -> u128 {
        self.mask() << self.shift
    }

    /// Truncates `value` to the field width (two's complement for negatives) and shifts it into place.
    pub fn insert(&self, value: i64) -> u128 {
        ((value as u128) & self.mask()) << self.shift
    }

    pub fn extract(&self, record: u128) -> u64 {
        ((record >> self.shift) & self.mask()) as u64
    }
}

pub const TID: BitField = BitField::new("tID", 112, 16);
pub const Z1: BitField = BitField::new("z1", 96, 16);
pub const Y1: BitField = BitField::new("y1", 80, 8);
pub const Y2: BitField = BitField::new("y2", 72, 8);
pub const Y3: BitField = BitField::new("y3", 64, 8);
pub const X1: BitField = BitField::new("x1", 50, 9);
pub const X2: BitField = BitField::new("x2", 41, 9);
pub const X3: BitField = BitField::new("x3", 32, 9);
pub const Z2: BitField = BitField::new("z2", 16, 16);
pub const Z3: BitField = BitField::new("z3", 0, 16);

/// Every field, most significant first.
pub const LAYOUT: [BitField; 10] = [TID, Z1, Y1, Y2, Y3, X1, X2, X3, Z2, Z3];

/// Bits no field owns (59..=63 and 88..=95). Always zero in a packed record.
pub const RESERVED_BITS: u128 = !(TID.slot()
    | Z1.slot()
    | Y1.slot()
    | Y2.slot()
    | Y3.slot()
    | X1.slot()
    | X2.slot()
    | X3.slot()
    | Z2.slot()
    | Z3.slot());

/// Field values for one record, before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFields {
    pub id: i64,
    pub x: [i64; 3],
    pub y: [i64; 3],
    pub z: [i64; 3],
}

/// A 128-bit stimulus record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRecord(pub u128);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRecordError(pub String);

impl fmt::Display for ParseRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 32 hex digits, got {:?}", self.0)
    }
}

impl std::error::Error for ParseRecordError {}

impl PackedRecord {
    pub const HEX_DIGITS: usize = 32;

    pub fn pack(fields: &RecordFields) -> Self {
        let record = TID.insert(fields.id)
            | Z1.insert(fields.z[0])
            | Y1.insert(fields.y[0])
            | Y2.insert(fields.y[1])
            | Y3.insert(fields.y[2])
            | X1.insert(fields.x[0])
            | X2.insert(fields.x[1])
            | X3.insert(fields.x[2])
            | Z2.insert(fields.z[1])
            | Z3.insert(fields.z[2]);
        PackedRecord(record)
    }

    pub fn field(&self, field: BitField) -> u64 {
        field.extract(self.0)
    }

    /// Raw (unsigned, truncated) field values. Depths come back as their 16-bit patterns,
    /// see [`PackedRecord::depths`] for the signed view.
    pub fn unpack(&self) -> RecordFields {
        let get = |f: BitField| self.field(f) as i64;
        RecordFields {
            id: get(TID),
            x: [get(X1), get(X2), get(X3)],
            y: [get(Y1), get(Y2), get(Y3)],
            z: [get(Z1), get(Z2), get(Z3)],
        }
    }

    pub fn depths(&self) -> [i16; 3] {
        [self.field(Z1) as u16 as i16, self.field(Z2) as u16 as i16, self.field(Z3) as u16 as i16]
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PackedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for PackedRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_DIGITS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseRecordError(s.to_string()));
        }
        u128::from_str_radix(s, 16).map(PackedRecord).map_err(|_| ParseRecordError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn layout_fields_are_disjoint() {
        for (i, a) in LAYOUT.iter().enumerate() {
            for b in &LAYOUT[i + 1..] {
                assert_eq!(a.slot() & b.slot(), 0, "{} overlaps {}", a.name, b.name);
            }
        }
        assert_eq!(LAYOUT.iter().map(|f| f.width).sum::<u32>(), 128 - 5 - 8);
    }

    #[test]
    fn reserved_bits_are_59_to_63_and_88_to_95() {
        let expected = (0x1Fu128 << 59) | (0xFFu128 << 88);
        assert_eq!(RESERVED_BITS, expected);
    }

    #[test]
    fn packs_the_reference_layout() {
        let fields = RecordFields { id: 3, x: [0, 10, 0], y: [0, 0, 10], z: [100, 0, 0] };
        let record = PackedRecord::pack(&fields);
        assert_eq!(record.to_hex(), "000300640000000a0000140000000000");
        assert_eq!(record.0, (3u128 << 112) | (100u128 << 96) | (10u128 << 64) | (10u128 << 41));
    }

    #[rstest]
    #[case(TID, 0x1_2345, 0x2345)]
    #[case(X1, 512, 0)]
    #[case(X2, 513, 1)]
    #[case(Y1, 256 + 7, 7)]
    #[case(Z1, -1, 0xFFFF)]
    #[case(Z3, -32768, 0x8000)]
    #[case(Z2, 32767, 0x7FFF)]
    #[case(Y3, -1, 0xFF)]
    fn truncates_to_field_width(#[case] field: BitField, #[case] value: i64, #[case] expected: u64) {
        let record = field.insert(value);
        assert_eq!(record & !field.slot(), 0);
        assert_eq!(field.extract(record), expected);
    }

    #[test]
    fn negative_depths_do_not_leak_into_neighbours() {
        let fields = RecordFields { id: 0, x: [0; 3], y: [0; 3], z: [-1, -1, -1] };
        let record = PackedRecord::pack(&fields);
        assert_eq!(record.0, Z1.slot() | Z2.slot() | Z3.slot());
        assert_eq!(record.depths(), [-1, -1, -1]);
    }

    #[test]
    fn hex_is_32_lowercase_digits_and_parses_back() {
        let fields = RecordFields { id: 0xBEEF, x: [400, 1, 2], y: [127, 3, 4], z: [-32768, 32767, -2] };
        let record = PackedRecord::pack(&fields);
        let hex = record.to_hex();
        assert_eq!(hex.len(), 32);
        assert_eq!(hex, hex.to_lowercase());
        assert_eq!(hex.parse::<PackedRecord>().unwrap(), record);
        assert!("beef".parse::<PackedRecord>().is_err());
    }

    proptest! {
        #[test]
        fn unpack_reproduces_masked_inputs(
            id in any::<i64>(),
            x in prop::array::uniform3(any::<i64>()),
            y in prop::array::uniform3(any::<i64>()),
            z in prop::array::uniform3(any::<i64>()),
        ) {
            let record = PackedRecord::pack(&RecordFields { id, x, y, z });
            let fields = record.unpack();
            prop_assert_eq!(fields.id, id & 0xFFFF);
            for i in 0..3 {
                prop_assert_eq!(fields.x[i], x[i] & 0x1FF);
                prop_assert_eq!(fields.y[i], y[i] & 0xFF);
                prop_assert_eq!(fields.z[i], z[i] & 0xFFFF);
            }
            prop_assert_eq!(record.0 & RESERVED_BITS, 0);
        }

        #[test]
        fn in_range_depths_round_trip_signed(z in prop::array::uniform3(any::<i16>())) {
            let fields = RecordFields { z: z.map(i64::from), ..Default::default() };
            prop_assert_eq!(PackedRecord::pack(&fields).depths(), z);
        }
    }
}
