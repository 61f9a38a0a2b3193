use tracing::{info, warn};

use crate::{
    cache::{MatricesCache, NoCache},
    error::MatrixProviderError,
    google_maps_api::GoogleMapsMatrixClient,
    synthetic::synthetic_matrices,
    travel_matrices::TravelMatrices,
    travel_matrix_provider::TravelMatrixProvider,
};

pub struct TravelMatrixClient<C = NoCache> {
    google_client: Option<GoogleMapsMatrixClient>,
    cache: C,
}

impl Default for TravelMatrixClient<NoCache> {
    fn default() -> Self {
        TravelMatrixClient::new(NoCache)
    }
}

impl<C> TravelMatrixClient<C>
where
    C: MatricesCache,
{
    /// The Google client is configured from `GOOGLE_MAPS_API_KEY` when present.
    pub fn new(cache: C) -> Self {
        Self {
            google_client: GoogleMapsMatrixClient::from_env().ok(),
            cache,
        }
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn without_google_client(mut self) -> Self {
        self.google_client = None;
        self
    }

    pub async fn fetch_matrix(
        &self,
        addresses: &[String],
        provider: &TravelMatrixProvider,
    ) -> Result<TravelMatrices, MatrixProviderError> {
        match provider {
            TravelMatrixProvider::Custom { matrices } => {
                if matrices.num_locations() != addresses.len() {
                    return Err(MatrixProviderError::InvalidDimensions {
                        expected: addresses.len(),
                        actual: matrices.num_locations(),
                    });
                }

                Ok(matrices.clone())
            }
            TravelMatrixProvider::Synthetic {
                min_secs,
                max_secs,
                seed,
            } => {
                info!(
                    "Using synthetic travel times for {} addresses",
                    addresses.len()
                );
                Ok(synthetic_matrices(
                    addresses.len(),
                    *min_secs,
                    *max_secs,
                    *seed,
                ))
            }
            TravelMatrixProvider::GoogleDistanceMatrix { mode } => {
                match self.cache.get_cached(provider, addresses) {
                    Ok(Some(matrices)) => return Ok(matrices),
                    Ok(None) => {}
                    Err(err) => warn!("Matrix cache lookup failed: {err}"),
                }

                let client = self
                    .google_client
                    .as_ref()
                    .ok_or(MatrixProviderError::MissingApiKey)?;

                info!(
                    "Fetching travel times for {} addresses from Google Distance Matrix",
                    addresses.len()
                );
                let matrices = client.fetch_matrix(addresses, *mode).await?;

                if provider.is_cacheable()
                    && let Err(err) = self.cache.cache(provider, addresses, &matrices)
                {
                    warn!("Failed to cache travel matrices: {err}");
                }

                Ok(matrices)
            }
        }
    }
}
