use super::Rectangle;

/// An EAN-13 value read from an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    /// The twelve digits read from the bars, check digit last
    pub value: String,
    /// Candidate region, in source-image coordinates, the value was read from
    pub region: Rectangle,
    /// Row within `region` whose scan line decoded
    pub row: usize,
}

impl Barcode {
    /// Create a new barcode result
    pub fn new(value: String, region: Rectangle, row: usize) -> Self {
        Self { value, region, row }
    }

    /// Digits as numeric values
    pub fn digits(&self) -> Vec<u8> {
        self.value.bytes().map(|b| b - b'0').collect()
    }
}
