use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 8] = [
    "ID",
    "Area",
    "Builder",
    "Price (CAD)",
    "Rooms",
    "Bathrooms",
    "Latitude",
    "Longitude",
];

/// Builds the workbook bytes for a set of listings, one row per listing in
/// the given order.
pub fn listings_workbook(listings: &[Listing]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, listing.id as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write id: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.area)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write area: {}", e)))?;

        worksheet
            .write_string(r, 2, &listing.builder)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write builder: {}", e)))?;

        worksheet
            .write_number(r, 3, listing.price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;

        worksheet
            .write_number(r, 4, f64::from(listing.rooms))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write rooms: {}", e)))?;

        worksheet
            .write_number(r, 5, listing.bathrooms)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write bathrooms: {}", e)))?;

        worksheet
            .write_number(r, 6, listing.latitude)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write latitude: {}", e)))?;

        worksheet
            .write_number(r, 7, listing.longitude)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write longitude: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_listings_xlsx(listings: &[Listing]) -> ResultResp {
    let buffer = listings_workbook(listings)?;
    xlsx_response(buffer, "halifax_listings.xlsx")
}
