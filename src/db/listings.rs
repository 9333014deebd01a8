use crate::db::connection::Database;
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection};

/// Upserts listings; `position` records each listing's place in the source
/// dataset so it can be loaded back in the same order.
pub fn save_listings(conn: &Connection, listings: &[Listing]) -> Result<usize, ServerError> {
    let now = Utc::now().naive_utc();

    let mut stmt = conn
        .prepare(
            r#"
            INSERT INTO listings
                (id, position, latitude, longitude, price, rooms, bathrooms, area, builder, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                position   = excluded.position,
                latitude   = excluded.latitude,
                longitude  = excluded.longitude,
                price      = excluded.price,
                rooms      = excluded.rooms,
                bathrooms  = excluded.bathrooms,
                area       = excluded.area,
                builder    = excluded.builder,
                updated_at = excluded.updated_at
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    for (position, listing) in listings.iter().enumerate() {
        stmt.execute(params![
            listing.id,
            position as i64,
            listing.latitude,
            listing.longitude,
            listing.price,
            listing.rooms,
            listing.bathrooms,
            listing.area,
            listing.builder,
            now,
        ])
        .map_err(|e| ServerError::DbError(format!("insert listing {}: {e}", listing.id)))?;
    }

    Ok(listings.len())
}

/// All listings in dataset order.
pub fn get_all_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT id, latitude, longitude, price, rooms, bathrooms, area, builder
                FROM listings
                ORDER BY position, id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Listing {
                    id: row.get(0)?,
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                    price: row.get(3)?,
                    rooms: row.get(4)?,
                    bathrooms: row.get(5)?,
                    area: row.get(6)?,
                    builder: row.get(7)?,
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

pub fn count_listings(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("SELECT COUNT(*) FROM listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))
}
