//! List words.
//!
//! ```text
//! list    = space* (element (space+ element)*)? space*
//! element = "{" balanced "}" | '"' quoted '"' | bare
//! bare    = (char | "\" char)+
//! ```
//!
//! Braced elements are taken verbatim; quoted and bare elements honour
//! backslash escapes. A closing brace or quote must be followed by space.

use thiserror::Error;

#[cfg(test)]
mod tests;

/// A list word that could not be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ListError {
	/// Human-readable description of the problem.
	pub message: String,
	/// Byte offset in the input where the problem was found.
	pub position: usize,
}

struct ListParser<'a> {
	input: &'a str,
	position: usize,
}

impl<'a> ListParser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	fn rest(&self) -> &'a str {
		&self.input[self.position..]
	}

	fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		Some(ch)
	}

	fn skip_space(&mut self) {
		while self.peek().is_some_and(char::is_whitespace) {
			self.next();
		}
	}

	fn error(&self, message: impl Into<String>, position: usize) -> ListError {
		ListError {
			message: message.into(),
			position,
		}
	}

	/// After a closing delimiter only space or the end may follow.
	fn expect_separator(&self, kind: &str) -> Result<(), ListError> {
		match self.peek() {
			None => Ok(()),
			Some(ch) if ch.is_whitespace() => Ok(()),
			Some(ch) => Err(self.error(
				format!("list element in {kind} followed by \"{ch}\" instead of space"),
				self.position,
			)),
		}
	}

	fn braced(&mut self) -> Result<String, ListError> {
		let open = self.position;
		self.next();
		let start = self.position;
		let mut depth = 1usize;
		while let Some(ch) = self.next() {
			match ch {
				'\\' => {
					self.next();
				}
				'{' => depth += 1,
				'}' => {
					depth -= 1;
					if depth == 0 {
						let element = self.input[start..self.position - 1].to_owned();
						self.expect_separator("braces")?;
						return Ok(element);
					}
				}
				_ => {}
			}
		}
		Err(self.error("unmatched open brace in list", open))
	}

	fn quoted(&mut self) -> Result<String, ListError> {
		let open = self.position;
		self.next();
		let mut element = String::new();
		while let Some(ch) = self.next() {
			match ch {
				'"' => {
					self.expect_separator("quotes")?;
					return Ok(element);
				}
				'\\' => element.extend(self.next()),
				_ => element.push(ch),
			}
		}
		Err(self.error("unmatched open quote in list", open))
	}

	fn bare(&mut self) -> String {
		let mut element = String::new();
		while let Some(ch) = self.peek().filter(|ch| !ch.is_whitespace()) {
			self.next();
			if ch == '\\' {
				element.push(self.next().unwrap_or('\\'));
			} else {
				element.push(ch);
			}
		}
		element
	}

	fn parse(mut self) -> Result<Vec<String>, ListError> {
		let mut elements = Vec::new();
		loop {
			self.skip_space();
			let element = match self.peek() {
				None => return Ok(elements),
				Some('{') => self.braced()?,
				Some('"') => self.quoted()?,
				Some(_) => self.bare(),
			};
			elements.push(element);
		}
	}
}

/// Splits a list word into its elements.
pub fn parse_list(input: &str) -> Result<Vec<String>, ListError> {
	ListParser::new(input).parse()
}

/// Joins elements into a list word that [`parse_list`] splits back apart.
pub fn format_list<S: AsRef<str>>(elements: &[S]) -> String {
	let mut out = String::new();
	for (i, element) in elements.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		let element = element.as_ref();
		let needs_braces = element.is_empty()
			|| element
				.chars()
				.any(|ch| ch.is_whitespace() || matches!(ch, '{' | '}' | '"' | '\\'));
		if needs_braces && braces_balanced(element) {
			out.push('{');
			out.push_str(element);
			out.push('}');
		} else if needs_braces {
			for ch in element.chars() {
				if ch.is_whitespace() || matches!(ch, '{' | '}' | '"' | '\\') {
					out.push('\\');
				}
				out.push(ch);
			}
		} else {
			out.push_str(element);
		}
	}
	out
}

fn braces_balanced(element: &str) -> bool {
	let mut depth = 0usize;
	for ch in element.chars() {
		match ch {
			'\\' => return false,
			'{' => depth += 1,
			'}' => match depth.checked_sub(1) {
				Some(d) => depth = d,
				None => return false,
			},
			_ => {}
		}
	}
	depth == 0
}
