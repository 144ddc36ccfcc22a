//! Helpers for deserializing loosely typed GeoJSON properties.

use serde::{Deserialize, Deserializer};

/// Deserializes a property that may be a string, a number, or `null`.
///
/// Numbers are kept in their textual form. Surrounding whitespace is trimmed and blank strings
/// are treated the same as missing values.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<Box<str>>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw
	{
		String(String),
		Integer(i64),
		Unsigned(u64),
		Float(f64),
	}

	let value = match Option::<Raw>::deserialize(deserializer)? {
		None => return Ok(None),
		Some(Raw::String(string)) => string,
		Some(Raw::Integer(int)) => int.to_string(),
		Some(Raw::Unsigned(int)) => int.to_string(),
		// keeps the fractional part of whole floats (`2.0`, not `2`)
		Some(Raw::Float(float)) => format!("{float:?}"),
	};

	let trimmed = value.trim();

	Ok((!trimmed.is_empty()).then(|| Box::from(trimmed)))
}

#[cfg(test)]
mod tests
{
	use serde::Deserialize;

	use crate::testing;

	#[derive(Debug, Deserialize)]
	struct Props
	{
		#[serde(default, deserialize_with = "super::lenient_string")]
		value: Option<Box<str>>,
	}

	fn parse(json: &str) -> testing::Result<Option<Box<str>>>
	{
		Ok(serde_json::from_str::<Props>(json)?.value)
	}

	#[test]
	fn accepts_strings_and_numbers() -> testing::Result
	{
		testing::assert_eq!(parse(r#"{ "value": " Rue Haute " }"#)?.as_deref(), Some("Rue Haute"));
		testing::assert_eq!(parse(r#"{ "value": 42 }"#)?.as_deref(), Some("42"));
		testing::assert_eq!(parse(r#"{ "value": 1.5 }"#)?.as_deref(), Some("1.5"));
		testing::assert_eq!(parse(r#"{ "value": -7 }"#)?.as_deref(), Some("-7"));

		Ok(())
	}

	#[test]
	fn large_and_whole_numbers_keep_their_digits() -> testing::Result
	{
		testing::assert_eq!(
			parse(r#"{ "value": 18446744073709551615 }"#)?.as_deref(),
			Some("18446744073709551615")
		);
		testing::assert_eq!(parse(r#"{ "value": 2.0 }"#)?.as_deref(), Some("2.0"));

		Ok(())
	}

	#[test]
	fn blank_and_missing_are_none() -> testing::Result
	{
		testing::assert_eq!(parse(r#"{ "value": "   " }"#)?, None);
		testing::assert_eq!(parse(r#"{ "value": null }"#)?, None);
		testing::assert_eq!(parse("{}")?, None);

		Ok(())
	}
}
