use serde::Deserialize;

use crate::util::serde::lenient_string;

/// The attributes of a stop, as published by the stop directory.
///
/// Missing and blank attributes are `None`; they render as empty text in reports.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Stop
{
	#[serde(default, deserialize_with = "lenient_string")]
	pub code_stop: Option<Box<str>>,

	/// The feature id, which is also the primary key of the map server's atlas layer.
	#[serde(default, deserialize_with = "lenient_string")]
	pub gid: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub name_fr: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub name_nl: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub housenr: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub road_fr: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub road_nl: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub mu_fr: Option<Box<str>>,

	#[serde(default, deserialize_with = "lenient_string")]
	pub mu_nl: Option<Box<str>>,

	/// File name of the stop photo, relative to the media host.
	#[serde(default, deserialize_with = "lenient_string")]
	pub image_stop: Option<Box<str>>,
}

impl Stop
{
	/// `<name_fr> - <name_nl>`
	pub fn names(&self) -> String
	{
		format!("{} - {}", text(self.name_fr.as_deref()), text(self.name_nl.as_deref()))
	}

	/// `<housenr>, <road_fr> - <mu_fr>`
	pub fn address_fr(&self) -> String
	{
		format!(
			"{}, {} - {}",
			text(self.housenr.as_deref()),
			text(self.road_fr.as_deref()),
			text(self.mu_fr.as_deref()),
		)
	}

	/// `<road_nl> <housenr> - <mu_nl>`
	pub fn address_nl(&self) -> String
	{
		format!(
			"{} {} - {}",
			text(self.road_nl.as_deref()),
			text(self.housenr.as_deref()),
			text(self.mu_nl.as_deref()),
		)
	}
}

fn text(value: Option<&str>) -> &str
{
	value.unwrap_or_default()
}
