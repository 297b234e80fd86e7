use std::fmt;

/// Breadcrumb of field names and array indices locating a value.
///
/// Paths are never mutated in place: [`Path::child`] and [`Path::index`] return an
/// extended copy, so a failure inside one entry cannot leak into its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
	segments: Vec<String>,
}

impl Path {
	/// Literal label of the first segment.
	pub const ROOT: &'static str = "<root>";

	/// Path containing only the root segment.
	pub fn root() -> Self {
		Self {
			segments: vec![Self::ROOT.to_owned()],
		}
	}

	/// Copy of this path extended with a field name.
	pub fn child(&self, segment: &str) -> Self {
		let mut segments = Vec::with_capacity(self.segments.len() + 1);
		segments.extend(self.segments.iter().cloned());
		segments.push(segment.to_owned());
		Self { segments }
	}

	/// Copy of this path extended with a zero-based array index.
	pub fn index(&self, index: usize) -> Self {
		self.child(&index.to_string())
	}

	/// Ordered path segments, root first.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}
