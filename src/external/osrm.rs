use serde::{Deserialize, Serialize};

use crate::{
    entities::{Coordinates, RoutePath},
    error::{empty_result_error, invalid_input_error, malformed_response_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Route {
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

// OSRM addresses waypoints lon-first in the path segment
#[tracing::instrument(skip(client))]
pub async fn route(
    client: &reqwest::Client,
    api_base: &str,
    start: Coordinates,
    end: Coordinates,
) -> Result<RoutePath, Error> {
    let url = format!(
        "{}/route/v1/driving/{},{};{},{}",
        api_base, start.longitude, start.latitude, end.longitude, end.latitude
    );

    let res = client
        .get(url)
        .query(&[("overview", "full"), ("geometries", "geojson")])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: RouteResponse = res.json().await.map_err(malformed_response_error)?;

    path_from(data)
}

// geometry pairs arrive [lon, lat] and must be flipped into storage order
pub fn path_from(data: RouteResponse) -> Result<RoutePath, Error> {
    let route = data.routes.into_iter().next().ok_or_else(|| empty_result_error())?;

    Ok(route
        .geometry
        .coordinates
        .into_iter()
        .map(Coordinates::from_lon_lat)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_geometry_into_lat_first_pairs() {
        let data: RouteResponse = serde_json::from_str(
            r#"{"routes":[{"geometry":{"coordinates":[[2.35,48.85],[2.36,48.86]]}}]}"#,
        )
        .unwrap();

        let path = path_from(data).unwrap();

        assert_eq!(
            path.points(),
            &[Coordinates::new(48.85, 2.35), Coordinates::new(48.86, 2.36)]
        );
    }

    #[test]
    fn empty_routes_is_an_empty_result() {
        let data: RouteResponse = serde_json::from_str(r#"{"routes":[]}"#).unwrap();

        let err = path_from(data).unwrap_err();

        assert_eq!(err.code, 6);
    }

    #[test]
    fn missing_routes_key_is_an_empty_result() {
        let data: RouteResponse = serde_json::from_str("{}").unwrap();

        assert!(path_from(data).is_err());
    }
}
