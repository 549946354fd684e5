/// Decode a big-endian register pair as a two's-complement 16-bit value.
pub fn decode_pair(hi: u8, lo: u8) -> i16 {
    i16::from_be_bytes([hi, lo])
}

/// Raw three-axis reading in native sensor units.
/// Used for both the gyroscope and the accelerometer output blocks, and for
/// gyroscope calibration offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AxisReading {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl AxisReading {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Axis order x, y, z; high byte first per axis.
    pub fn from_bytes(data: [u8; 6]) -> Self {
        Self {
            x: decode_pair(data[0], data[1]),
            y: decode_pair(data[2], data[3]),
            z: decode_pair(data[4], data[5]),
        }
    }

    pub fn to_bytes(&self) -> [u8; 6] {
        let x = self.x.to_be_bytes();
        let y = self.y.to_be_bytes();
        let z = self.z.to_be_bytes();
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    /// Euclidean norm, see [`magnitude`](crate::magnitude::magnitude).
    pub fn magnitude(&self) -> u16 {
        crate::magnitude::magnitude(self)
    }
}
