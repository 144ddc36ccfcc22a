use std::str::FromStr;

use serde::{Deserialize, Deserializer, de};

/// The identifier of a Collecto stop, as it appears in request paths.
///
/// The value is kept verbatim, including any surrounding whitespace, because it is forwarded to the
/// map server as-is. Comparisons against directory data ignore surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct StopCode(Box<str>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stop code must not be empty")]
pub struct InvalidStopCode;

impl StopCode
{
	pub fn new(code: &str) -> Result<Self, InvalidStopCode>
	{
		if code.trim().is_empty() {
			return Err(InvalidStopCode);
		}

		Ok(Self(Box::from(code)))
	}

	pub fn as_str(&self) -> &str
	{
		&self.0
	}

	/// Checks whether a `code_stop` value from the stop directory refers to this stop.
	pub fn matches(&self, code_stop: &str) -> bool
	{
		self.0.trim() == code_stop.trim()
	}
}

impl FromStr for StopCode
{
	type Err = InvalidStopCode;

	fn from_str(code: &str) -> Result<Self, Self::Err>
	{
		Self::new(code)
	}
}

impl<'de> Deserialize<'de> for StopCode
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let code = String::deserialize(deserializer)?;

		Self::new(&code).map_err(de::Error::custom)
	}
}
