use serde::Deserialize;
use tracing::debug;

use crate::{
    error::MatrixProviderError, travel_matrices::TravelMatrices,
    travel_matrix_provider::TravelMode,
};

pub const GOOGLE_DISTANCE_MATRIX_API_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

pub const GOOGLE_MAPS_API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// The service accepts at most 100 elements per request.
const MAX_ADDRESSES_PER_REQUEST: usize = 10;

#[derive(Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Deserialize)]
struct DistanceMatrixRow {
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Deserialize)]
struct DistanceMatrixElement {
    status: String,
    duration: Option<DistanceMatrixValue>,
}

#[derive(Deserialize)]
struct DistanceMatrixValue {
    /// Seconds
    value: i64,
}

pub struct GoogleMapsMatrixClientParams {
    pub api_key: String,
}

pub struct GoogleMapsMatrixClient {
    params: GoogleMapsMatrixClientParams,
    client: reqwest::Client,
}

impl GoogleMapsMatrixClient {
    pub fn new(params: GoogleMapsMatrixClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, MatrixProviderError> {
        let api_key = std::env::var(GOOGLE_MAPS_API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(MatrixProviderError::MissingApiKey)?;

        Ok(Self::new(GoogleMapsMatrixClientParams { api_key }))
    }

    pub async fn fetch_matrix(
        &self,
        addresses: &[String],
        mode: TravelMode,
    ) -> Result<TravelMatrices, MatrixProviderError> {
        let num_locations = addresses.len();
        let mut times = vec![vec![0; num_locations]; num_locations];

        for origin_start in (0..num_locations).step_by(MAX_ADDRESSES_PER_REQUEST) {
            let origin_end = (origin_start + MAX_ADDRESSES_PER_REQUEST).min(num_locations);

            for destination_start in (0..num_locations).step_by(MAX_ADDRESSES_PER_REQUEST) {
                let destination_end =
                    (destination_start + MAX_ADDRESSES_PER_REQUEST).min(num_locations);

                let response = self
                    .request(
                        &addresses[origin_start..origin_end],
                        &addresses[destination_start..destination_end],
                        mode,
                    )
                    .await?;

                copy_batch(
                    &mut times,
                    addresses,
                    (origin_start, origin_end),
                    (destination_start, destination_end),
                    response,
                )?;
            }
        }

        Ok(TravelMatrices::new(times))
    }

    async fn request(
        &self,
        origins: &[String],
        destinations: &[String],
        mode: TravelMode,
    ) -> Result<DistanceMatrixResponse, MatrixProviderError> {
        debug!(
            "GoogleMapsApi: requesting {}x{} travel times",
            origins.len(),
            destinations.len()
        );

        let response = self
            .client
            .get(GOOGLE_DISTANCE_MATRIX_API_URL)
            .query(&[
                ("origins", origins.join("|")),
                ("destinations", destinations.join("|")),
                ("mode", mode.to_string()),
                ("departure_time", String::from("now")),
                ("traffic_model", String::from("best_guess")),
                ("key", self.params.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MatrixProviderError::Api { status, message });
        }

        let body: DistanceMatrixResponse = response.json().await?;

        if body.status != "OK" {
            return Err(MatrixProviderError::Service {
                status: body.status,
                message: body.error_message.unwrap_or_default(),
            });
        }

        Ok(body)
    }
}

/// Writes one origins x destinations response into `times`, rejecting short rows so no pair
/// silently keeps a zero travel time.
fn copy_batch(
    times: &mut [Vec<i64>],
    addresses: &[String],
    (origin_start, origin_end): (usize, usize),
    (destination_start, destination_end): (usize, usize),
    response: DistanceMatrixResponse,
) -> Result<(), MatrixProviderError> {
    if response.rows.len() != origin_end - origin_start {
        return Err(MatrixProviderError::InvalidDimensions {
            expected: origin_end - origin_start,
            actual: response.rows.len(),
        });
    }

    for (i, row) in response.rows.into_iter().enumerate() {
        if row.elements.len() != destination_end - destination_start {
            return Err(MatrixProviderError::InvalidDimensions {
                expected: destination_end - destination_start,
                actual: row.elements.len(),
            });
        }

        for (j, element) in row.elements.into_iter().enumerate() {
            let from = origin_start + i;
            let to = destination_start + j;

            if from == to {
                continue;
            }

            times[from][to] = match (element.status.as_str(), element.duration) {
                ("OK", Some(duration)) => duration.value,
                (status, _) => {
                    return Err(MatrixProviderError::ElementNotFound {
                        origin: addresses[from].clone(),
                        destination: addresses[to].clone(),
                        status: status.to_owned(),
                    });
                }
            };
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let body = r#"{
            "status": "OK",
            "origin_addresses": ["A", "B"],
            "destination_addresses": ["A", "B"],
            "rows": [
                { "elements": [
                    { "status": "OK", "duration": { "value": 0, "text": "1 min" } },
                    { "status": "OK", "duration": { "value": 540, "text": "9 mins" } }
                ] },
                { "elements": [
                    { "status": "OK", "duration": { "value": 600, "text": "10 mins" } },
                    { "status": "ZERO_RESULTS" }
                ] }
            ]
        }"#;

        let response: DistanceMatrixResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "OK");
        assert_eq!(response.rows.len(), 2);
        assert_eq!(
            response.rows[0].elements[1].duration.as_ref().unwrap().value,
            540
        );
        assert!(response.rows[1].elements[1].duration.is_none());
    }

    fn addresses() -> Vec<String> {
        vec![String::from("A"), String::from("B")]
    }

    #[test]
    fn test_copy_batch() {
        let body = r#"{
            "status": "OK",
            "rows": [
                { "elements": [
                    { "status": "OK", "duration": { "value": 0 } },
                    { "status": "OK", "duration": { "value": 540 } }
                ] },
                { "elements": [
                    { "status": "OK", "duration": { "value": 600 } },
                    { "status": "OK", "duration": { "value": 0 } }
                ] }
            ]
        }"#;
        let mut times = vec![vec![0; 2]; 2];

        copy_batch(
            &mut times,
            &addresses(),
            (0, 2),
            (0, 2),
            serde_json::from_str(body).unwrap(),
        )
        .unwrap();

        assert_eq!(times, vec![vec![0, 540], vec![600, 0]]);
    }

    #[test]
    fn test_copy_batch_short_row() {
        let body = r#"{
            "status": "OK",
            "rows": [
                { "elements": [
                    { "status": "OK", "duration": { "value": 0 } },
                    { "status": "OK", "duration": { "value": 540 } }
                ] },
                { "elements": [
                    { "status": "OK", "duration": { "value": 600 } }
                ] }
            ]
        }"#;
        let mut times = vec![vec![0; 2]; 2];

        let result = copy_batch(
            &mut times,
            &addresses(),
            (0, 2),
            (0, 2),
            serde_json::from_str(body).unwrap(),
        );

        assert!(matches!(
            result,
            Err(MatrixProviderError::InvalidDimensions {
                expected: 2,
                actual: 1
            })
        ));
    }
}
