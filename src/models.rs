//! Frontend Models
//!
//! DTOs for the backend API, the IBGE localities API and the submit payload.

use serde::{Deserialize, Serialize};

/// Recyclable item category served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// One row of the IBGE states listing; only the state code is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct UfRecord {
    pub sigla: String,
}

/// One row of the IBGE cities listing; only the name is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct CityRecord {
    pub nome: String,
}

/// Payload posted to the backend when registering a collection point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}
