//! One-shot fetches of the static assets backing a map page.

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::csv::{CsvRow, parse_csv};
use crate::geo::FeatureCollection;
use crate::model::Region;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: gloo::net::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
}

async fn get(url: &str) -> Result<gloo::net::http::Response, LoadError> {
    let resp = Request::get(url).send().await.map_err(|source| LoadError::Http {
        url: url.to_string(),
        source,
    })?;
    if !resp.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    get(url).await?.json::<T>().await.map_err(|source| LoadError::Http {
        url: url.to_string(),
        source,
    })
}

async fn get_text(url: &str) -> Result<String, LoadError> {
    get(url).await?.text().await.map_err(|source| LoadError::Http {
        url: url.to_string(),
        source,
    })
}

pub async fn load_geometry(url: &str) -> Result<FeatureCollection, LoadError> {
    get_json(url).await
}

pub async fn load_regions(url: &str) -> Result<Vec<Region>, LoadError> {
    get_json(url).await
}

pub async fn load_csv(url: &str) -> Result<Vec<CsvRow>, LoadError> {
    Ok(parse_csv(&get_text(url).await?))
}
