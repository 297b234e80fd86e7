/// Grammar revision selected by the leading version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
	/// Revision `1`, the only defined grammar.
	V1,
}

impl Version {
	/// Map a version byte to a known revision.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			b'1' => Some(Self::V1),
			_ => None,
		}
	}

	/// Version byte written at the start of a document.
	pub fn byte(self) -> u8 {
		match self {
			Self::V1 => b'1',
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Version;

	#[test]
	fn recognizes_only_revision_one() {
		assert_eq!(Version::from_byte(b'1'), Some(Version::V1));
		assert_eq!(Version::from_byte(b'2'), None);
		assert_eq!(Version::from_byte(0), None);
		assert_eq!(Version::V1.byte(), b'1');
	}
}
