//! IBGE Geography Client
//!
//! State and city listings from the public IBGE localities API. Responses
//! are projected down to the single field each dropdown needs.

use gloo_net::http::Request;

use crate::models::{CityRecord, UfRecord};

/// IBGE localities base URL
pub const IBGE_BASE: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

pub fn states_url() -> String {
    format!("{IBGE_BASE}/estados")
}

/// Cities listing for one state, keyed by its two-letter code.
pub fn cities_url(uf: &str) -> String {
    format!("{IBGE_BASE}/estados/{uf}/municipios")
}

/// List the state codes (`sigla`), in API order.
pub async fn list_ufs() -> Result<Vec<String>, String> {
    let records: Vec<UfRecord> = fetch_json(&states_url()).await?;
    Ok(records.into_iter().map(|record| record.sigla).collect())
}

/// List the city names (`nome`) for one state.
pub async fn list_cities(uf: &str) -> Result<Vec<String>, String> {
    let records: Vec<CityRecord> = fetch_json(&cities_url(uf)).await?;
    Ok(records.into_iter().map(|record| record.nome).collect())
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let text = Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .text()
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cities_url_embeds_the_state_code() {
        assert_eq!(
            cities_url("SP"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }

    #[test]
    fn states_url_has_no_parameters() {
        assert_eq!(
            states_url(),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados"
        );
    }
}
