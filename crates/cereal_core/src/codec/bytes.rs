/// Forward-only cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Read one byte and advance, or `None` at end of input.
	pub fn next_byte(&mut self) -> Option<u8> {
		let byte = self.bytes.get(self.pos).copied()?;
		self.pos += 1;
		Some(byte)
	}
}
