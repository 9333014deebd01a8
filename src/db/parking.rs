// src/db/parking.rs
use crate::db::connection::Database;
use crate::domain::listing::ParkingFacility;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection};

pub fn save_parking(conn: &Connection, facilities: &[ParkingFacility]) -> Result<usize, ServerError> {
    let now = Utc::now().naive_utc();

    let mut stmt = conn
        .prepare(
            r#"
            INSERT INTO parking_facilities (id, position, name, latitude, longitude, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                position   = excluded.position,
                name       = excluded.name,
                latitude   = excluded.latitude,
                longitude  = excluded.longitude,
                updated_at = excluded.updated_at
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    for (position, facility) in facilities.iter().enumerate() {
        stmt.execute(params![
            facility.id,
            position as i64,
            facility.name,
            facility.latitude,
            facility.longitude,
            now,
        ])
        .map_err(|e| ServerError::DbError(format!("insert parking {}: {e}", facility.id)))?;
    }

    Ok(facilities.len())
}

/// All facilities in dataset order; nearest-parking tie-breaks rely on it.
pub fn get_all_parking(db: &Database) -> Result<Vec<ParkingFacility>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT id, name, latitude, longitude FROM parking_facilities ORDER BY position, id",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ParkingFacility {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}
