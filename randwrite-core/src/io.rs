use std::io::{self, BufRead, ErrorKind};
use std::str;

/// Iterator decoding UTF-8 characters one at a time from a buffered reader.
///
/// Each call to `next` pulls exactly the bytes of one scalar value, so the
/// underlying stream is consumed lazily, end-to-end, and is never read past
/// its end.
///
/// Malformed input (an invalid leading byte, a bad continuation byte, or a
/// sequence truncated by end-of-stream) yields an `InvalidData` error.
pub(crate) struct Chars<R> {
	inner: R,
}

impl<R: BufRead> Chars<R> {
	pub(crate) fn new(inner: R) -> Self {
		Self { inner }
	}

	fn read_byte(&mut self) -> io::Result<Option<u8>> {
		let buf = self.inner.fill_buf()?;
		if buf.is_empty() {
			return Ok(None);
		}
		let byte = buf[0];
		self.inner.consume(1);
		Ok(Some(byte))
	}
}

/// Expected sequence length for a UTF-8 leading byte, or `None` if the byte
/// cannot start a sequence.
fn utf8_len(leading: u8) -> Option<usize> {
	match leading {
		0x00..=0x7F => Some(1),
		0xC2..=0xDF => Some(2),
		0xE0..=0xEF => Some(3),
		0xF0..=0xF4 => Some(4),
		_ => None,
	}
}

impl<R: BufRead> Iterator for Chars<R> {
	type Item = io::Result<char>;

	fn next(&mut self) -> Option<io::Result<char>> {
		let leading = match self.read_byte() {
			Ok(Some(byte)) => byte,
			Ok(None) => return None,
			Err(e) => return Some(Err(e)),
		};

		let len = match utf8_len(leading) {
			Some(len) => len,
			None => {
				return Some(Err(io::Error::new(
					ErrorKind::InvalidData,
					"stream is not valid UTF-8",
				)));
			}
		};

		let mut bytes = [leading, 0, 0, 0];
		for slot in bytes.iter_mut().take(len).skip(1) {
			match self.read_byte() {
				Ok(Some(byte)) => *slot = byte,
				Ok(None) => {
					return Some(Err(io::Error::new(
						ErrorKind::InvalidData,
						"stream ends inside a UTF-8 sequence",
					)));
				}
				Err(e) => return Some(Err(e)),
			}
		}

		match str::from_utf8(&bytes[..len]).ok().and_then(|s| s.chars().next()) {
			Some(c) => Some(Ok(c)),
			None => Some(Err(io::Error::new(
				ErrorKind::InvalidData,
				"stream is not valid UTF-8",
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Chars;
	use std::io::ErrorKind;

	fn decode(bytes: &[u8]) -> Vec<std::io::Result<char>> {
		Chars::new(bytes).collect()
	}

	#[test]
	fn decodes_ascii() {
		let chars: Vec<char> = decode(b"abc").into_iter().map(|c| c.unwrap()).collect();
		assert_eq!(chars, vec!['a', 'b', 'c']);
	}

	#[test]
	fn decodes_multibyte() {
		let chars: Vec<char> = decode("héllo œuf".as_bytes())
			.into_iter()
			.map(|c| c.unwrap())
			.collect();
		assert_eq!(chars.iter().collect::<String>(), "héllo œuf");
	}

	#[test]
	fn empty_stream_yields_nothing() {
		assert!(decode(b"").is_empty());
	}

	#[test]
	fn control_bytes_are_data() {
		let chars: Vec<char> = decode(b"a\0\n\rb").into_iter().map(|c| c.unwrap()).collect();
		assert_eq!(chars, vec!['a', '\0', '\n', '\r', 'b']);
	}

	#[test]
	fn invalid_leading_byte_is_an_error() {
		let mut items = decode(&[0xFF, b'a']);
		let err = items.remove(0).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidData);
	}

	#[test]
	fn truncated_sequence_is_an_error() {
		// 0xC3 expects one continuation byte
		let mut items = decode(&[b'a', 0xC3]);
		assert_eq!(items.remove(0).unwrap(), 'a');
		let err = items.remove(0).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidData);
	}
}
