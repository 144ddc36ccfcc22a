use serde::Deserialize;

use crate::stops::{Stop, StopCode};

/// A GeoJSON `FeatureCollection` of stops, as returned by a WFS `GetFeature` request.
#[derive(Debug, Deserialize)]
pub(super) struct FeatureCollection
{
	#[serde(default)]
	features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature
{
	#[serde(default)]
	properties: Option<Stop>,
}

impl FeatureCollection
{
	/// Returns the first stop whose `code_stop` matches `code`.
	pub(super) fn into_stop(self, code: &StopCode) -> Option<Stop>
	{
		self.features
			.into_iter()
			.filter_map(|feature| feature.properties)
			.find(|stop| {
				stop.code_stop
					.as_deref()
					.is_some_and(|code_stop| code.matches(code_stop))
			})
	}
}

#[cfg(test)]
mod tests
{
	use super::*;
	use crate::testing;

	const COLLECTION: &str = r#"{
		"type": "FeatureCollection",
		"totalFeatures": 4,
		"features": [
			{ "type": "Feature", "id": "Collecto_stops.1", "geometry": null, "properties": null },
			{ "type": "Feature", "id": "Collecto_stops.2", "properties": { "code_stop": 20, "gid": 2 } },
			{ "type": "Feature", "id": "Collecto_stops.3", "properties": { "code_stop": " 2 ", "gid": 3 } },
			{ "type": "Feature", "id": "Collecto_stops.4", "properties": { "code_stop": "2", "gid": 4 } }
		],
		"crs": { "type": "name", "properties": { "name": "urn:ogc:def:crs:EPSG::3812" } }
	}"#;

	#[test]
	fn finds_first_matching_feature() -> testing::Result
	{
		let collection = serde_json::from_str::<FeatureCollection>(COLLECTION)?;
		let stop = collection.into_stop(&StopCode::new("2")?);

		testing::assert_eq!(stop.and_then(|stop| stop.gid).as_deref(), Some("3"));

		Ok(())
	}

	#[test]
	fn numeric_codes_match() -> testing::Result
	{
		let collection = serde_json::from_str::<FeatureCollection>(COLLECTION)?;
		let stop = collection.into_stop(&StopCode::new("20")?);

		testing::assert_eq!(stop.and_then(|stop| stop.gid).as_deref(), Some("2"));

		Ok(())
	}

	#[test]
	fn unknown_code_is_none() -> testing::Result
	{
		let collection = serde_json::from_str::<FeatureCollection>(COLLECTION)?;

		testing::assert!(collection.into_stop(&StopCode::new("99")?).is_none());

		Ok(())
	}
}
