// src/db/seed.rs
use crate::db::connection::Database;
use crate::db::listings::{count_listings, get_all_listings, save_listings};
use crate::db::parking::{get_all_parking, save_parking};
use crate::domain::listing::{Listing, ParkingFacility};
use crate::domain::spatial::SpatialIndex;
use crate::errors::ServerError;
use rusqlite::Connection;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

/// Dataset file: `{ "listings": [...], "parking": [...] }`.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub listings: Vec<ListingRecord>,
    #[serde(default)]
    pub parking: Vec<ParkingFacility>,
}

/// A listing in the exported dataset's own field naming.
#[derive(Debug, Deserialize)]
pub struct ListingRecord {
    pub id: i64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Rooms")]
    pub rooms: u32,
    #[serde(rename = "Number_of_Bathrooms")]
    pub bathrooms: f64,
    pub area: String,
    #[serde(rename = "Builder", default)]
    pub builder: String,
}

impl From<ListingRecord> for Listing {
    fn from(r: ListingRecord) -> Self {
        Listing {
            id: r.id,
            latitude: r.latitude,
            longitude: r.longitude,
            price: r.price,
            rooms: r.rooms,
            bathrooms: r.bathrooms,
            area: r.area,
            builder: r.builder,
        }
    }
}

pub fn read_seed_file(path: impl AsRef<Path>) -> Result<SeedFile, ServerError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ServerError::SeedError(format!("open {}: {e}", path.display())))?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ServerError::SeedError(format!("parse {}: {e}", path.display())))
}

/// Replaces the stored dataset with the seed file's contents in one
/// transaction. Records missing from the file do not survive.
pub fn seed_database(db: &Database, seed: SeedFile) -> Result<(), ServerError> {
    let listings: Vec<Listing> = seed.listings.into_iter().map(Listing::from).collect();

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        clear_dataset(&tx)?;
        let n_listings = save_listings(&tx, &listings)?;
        let n_parking = save_parking(&tx, &seed.parking)?;

        tx.commit().map_err(|e| ServerError::DbError(e.to_string()))?;

        info!(listings = n_listings, parking = n_parking, "dataset seeded");
        Ok(())
    })
}

fn clear_dataset(conn: &Connection) -> Result<(), ServerError> {
    conn.execute_batch("DELETE FROM listings; DELETE FROM parking_facilities;")
        .map_err(|e| ServerError::DbError(format!("clear dataset failed: {e}")))
}

/// Seeds from `seed_path` when it exists. A missing file is not fatal as long
/// as the database already holds listings.
pub fn seed_if_present(db: &Database, seed_path: &str) -> Result<(), ServerError> {
    if Path::new(seed_path).exists() {
        return seed_database(db, read_seed_file(seed_path)?);
    }

    let existing = db.with_conn(|conn| count_listings(conn))?;
    if existing == 0 {
        warn!(seed = seed_path, "no seed file and no listings in database");
    }
    Ok(())
}

/// Loads the immutable datasets the engines run against.
pub fn load_index(db: &Database) -> Result<SpatialIndex, ServerError> {
    let listings = get_all_listings(db)?;
    let parking = get_all_parking(db)?;
    info!(
        listings = listings.len(),
        parking = parking.len(),
        "dataset loaded"
    );
    Ok(SpatialIndex::new(listings, parking))
}
