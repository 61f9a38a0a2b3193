use std::{
    hash::{Hash, Hasher},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use fxhash::FxHasher64;

use crate::{
    error::MatrixProviderError, travel_matrices::TravelMatrices,
    travel_matrix_provider::TravelMatrixProvider,
};

pub const CACHE_FOLDER_ENV_VAR: &str = "COURIER_CACHE_FOLDER";

pub trait MatricesCache {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
        matrices: &TravelMatrices,
    ) -> Result<(), MatrixProviderError>;

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
    ) -> Result<Option<TravelMatrices>, MatrixProviderError>;
}

#[derive(Default)]
pub struct NoCache;

impl MatricesCache for NoCache {
    fn cache(
        &self,
        _provider: &TravelMatrixProvider,
        _addresses: &[String],
        _matrices: &TravelMatrices,
    ) -> Result<(), MatrixProviderError> {
        Ok(())
    }

    fn get_cached(
        &self,
        _provider: &TravelMatrixProvider,
        _addresses: &[String],
    ) -> Result<Option<TravelMatrices>, MatrixProviderError> {
        Ok(None)
    }
}

/// A missing cache caches nothing.
impl<C> MatricesCache for Option<C>
where
    C: MatricesCache,
{
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
        matrices: &TravelMatrices,
    ) -> Result<(), MatrixProviderError> {
        match self {
            Some(cache) => cache.cache(provider, addresses, matrices),
            None => Ok(()),
        }
    }

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
    ) -> Result<Option<TravelMatrices>, MatrixProviderError> {
        match self {
            Some(cache) => cache.get_cached(provider, addresses),
            None => Ok(None),
        }
    }
}

/// Stores one JSON file per (addresses, provider) pair in a folder.
pub struct FileCache {
    folder: PathBuf,
}

impl FileCache {
    pub fn new(folder: PathBuf) -> Self {
        FileCache { folder }
    }

    pub fn from_env() -> Result<Self, MatrixProviderError> {
        let folder = std::env::var(CACHE_FOLDER_ENV_VAR)
            .map_err(|_| MatrixProviderError::Cache(format!("{CACHE_FOLDER_ENV_VAR} is not set")))?;

        Ok(FileCache::new(PathBuf::from(folder)))
    }

    fn folder(&self) -> Result<&Path, MatrixProviderError> {
        if !self.folder.is_dir() {
            return Err(MatrixProviderError::Cache(format!(
                "Path {} is not a directory",
                self.folder.display()
            )));
        }

        Ok(&self.folder)
    }
}

fn get_filename(addresses: &[String], provider: &TravelMatrixProvider) -> String {
    let mut hasher = FxHasher64::default();

    addresses.hash(&mut hasher);
    provider.hash(&mut hasher);

    format!("{:016x}.json", hasher.finish())
}

impl MatricesCache for FileCache {
    fn cache(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
        matrices: &TravelMatrices,
    ) -> Result<(), MatrixProviderError> {
        let path = self.folder()?.join(get_filename(addresses, provider));

        let file =
            std::fs::File::create(path).map_err(|e| MatrixProviderError::Cache(e.to_string()))?;
        let mut writer = BufWriter::with_capacity(64 * 1024, file);
        serde_json::to_writer(&mut writer, matrices)?;
        writer
            .flush()
            .map_err(|e| MatrixProviderError::Cache(e.to_string()))?;

        Ok(())
    }

    fn get_cached(
        &self,
        provider: &TravelMatrixProvider,
        addresses: &[String],
    ) -> Result<Option<TravelMatrices>, MatrixProviderError> {
        let path = self.folder()?.join(get_filename(addresses, provider));

        if !path.is_file() {
            return Ok(None);
        }

        let file =
            std::fs::File::open(path).map_err(|e| MatrixProviderError::Cache(e.to_string()))?;
        let matrices: TravelMatrices = serde_json::from_reader(file)?;

        Ok(Some(matrices))
    }
}
