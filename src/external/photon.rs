use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, PlaceSuggestion},
    error::{invalid_input_error, malformed_response_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    properties: Properties,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Properties {
    name: Option<String>,
    osm_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    coordinates: [f64; 2],
}

#[tracing::instrument(skip(client))]
pub async fn search(
    client: &reqwest::Client,
    api_base: &str,
    query: &str,
) -> Result<Vec<PlaceSuggestion>, Error> {
    let url = format!("{}/api/", api_base);

    let res = client.get(url).query(&[("q", query)]).send().await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: FeatureCollection = res.json().await.map_err(malformed_response_error)?;

    Ok(suggestions_from(data))
}

// absent features means zero suggestions, nameless features are skipped
pub fn suggestions_from(data: FeatureCollection) -> Vec<PlaceSuggestion> {
    data.features
        .into_iter()
        .filter_map(|feature| {
            let name = feature.properties.name?;
            let id = feature.properties.osm_id?.to_string();

            Some(PlaceSuggestion {
                id,
                name,
                coordinates: Coordinates::from_lon_lat(feature.geometry.coordinates),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features_with_lon_lat_flip() {
        let data: FeatureCollection = serde_json::from_str(
            r#"{"features":[{"properties":{"name":"Paris","osm_id":1},"geometry":{"coordinates":[2.35,48.85]}}]}"#,
        )
        .unwrap();

        let suggestions = suggestions_from(data);

        assert_eq!(
            suggestions,
            vec![PlaceSuggestion {
                id: "1".into(),
                name: "Paris".into(),
                coordinates: Coordinates::new(48.85, 2.35),
            }]
        );
    }

    #[test]
    fn missing_features_means_zero_suggestions() {
        let data: FeatureCollection = serde_json::from_str("{}").unwrap();

        assert!(suggestions_from(data).is_empty());
    }

    #[test]
    fn nameless_features_are_skipped() {
        let data: FeatureCollection = serde_json::from_str(
            r#"{"features":[
                {"properties":{"osm_id":2},"geometry":{"coordinates":[0.0,0.0]}},
                {"properties":{"name":"Lyon","osm_id":3},"geometry":{"coordinates":[4.83,45.76]}}
            ]}"#,
        )
        .unwrap();

        let suggestions = suggestions_from(data);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Lyon");
    }
}
