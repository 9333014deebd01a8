use crate::domain::filter::{FilterCriteria, LinearFilter, ListingFilter};
use crate::domain::listing::Listing;
use crate::domain::prediction::PredictionForm;
use crate::domain::selection::{SelectionEngine, SelectionResult};
use crate::domain::spatial::SpatialIndex;
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_error_response, json_response, ResultResp,
};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates;
use crate::templates::pages::HomeVm;
use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// Everything a request handler needs. Built once at startup and shared
/// read-only between workers.
pub struct AppState {
    pub index: SpatialIndex,
    pub selection: SelectionEngine,
    pub filter: Box<dyn ListingFilter + Send + Sync>,
}

impl AppState {
    pub fn new(index: SpatialIndex, selection: SelectionEngine) -> Self {
        Self {
            index,
            selection,
            filter: Box::new(LinearFilter),
        }
    }

    fn filtered(&self, criteria: &FilterCriteria) -> Vec<Listing> {
        self.filter.apply(self.index.listings(), criteria)
    }

    /// Runs a selection against the currently filtered set. The clicked
    /// listing is looked up in the full dataset so a listing hidden by the
    /// filters can still be focused.
    fn select(&self, id: i64, filtered: &[Listing]) -> Option<SelectionResult> {
        let clicked = self.index.listing(id)?;
        Some(self.selection.select(clicked, filtered, self.index.parking()))
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(&req);
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(state, &params),
        ("GET", "/listings.xlsx") => {
            let criteria = criteria_from(&params);
            export_listings_xlsx(&state.filtered(&criteria))
        }
        ("GET", "/api/listings") => {
            let criteria = criteria_from(&params);
            json_response(&state.filtered(&criteria)).or_else(|e| Ok(json_error_response(&e)))
        }
        ("GET", "/api/selection") => {
            api_selection(state, &params).or_else(|e| Ok(json_error_response(&e)))
        }
        ("GET", "/predict-price") => html_response(templates::pages::predict_page(
            &PredictionForm::default(),
            &[],
        )),
        ("POST", "/predict-price") => {
            let form = PredictionForm::from_params(&parse_form_body(&mut req)?);
            let errors = form.validate(Local::now().date_naive());
            if errors.is_empty() {
                html_response(templates::pages::prediction_received_page(&form))
            } else {
                html_response_with_status(422, templates::pages::predict_page(&form, &errors))
            }
        }
        ("GET", p) if p.starts_with("/listing/") => {
            let id = parse_id(&p["/listing/".len()..]).ok_or(ServerError::NotFound)?;
            let listing = state.index.listing(id).ok_or(ServerError::NotFound)?;
            let parking = state.index.nearest_parking(listing).ok();
            html_response(templates::pages::listing_page(listing, parking))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let criteria = criteria_from(params);
    let filtered = state.filtered(&criteria);

    // An unknown or malformed id just means nothing is selected.
    let selection = params
        .get("selected")
        .and_then(|raw| parse_id(raw))
        .and_then(|id| state.select(id, &filtered));

    let vm = HomeVm {
        listings: &filtered,
        total: state.index.listings().len(),
        criteria: &criteria,
        selection: selection.as_ref(),
        reference_builder: state.selection.reference_builder(),
    };
    html_response(templates::pages::home_page(&vm))
}

fn api_selection(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let raw = params
        .get("id")
        .ok_or_else(|| ServerError::BadRequest("missing listing id".into()))?;
    let id = parse_id(raw)
        .ok_or_else(|| ServerError::BadRequest(format!("invalid listing id: {raw}")))?;

    let criteria = criteria_from(params);
    let filtered = state.filtered(&criteria);
    let selection = state.select(id, &filtered).ok_or(ServerError::NotFound)?;

    json_response(&selection)
}

/// Filters as the home page form submits them. A request that carries no
/// price bound gets the slider's full range.
fn criteria_from(params: &HashMap<String, String>) -> FilterCriteria {
    FilterCriteria::from_params(params).with_slider_defaults()
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| decode_pairs(q.as_bytes()))
        .unwrap_or_default()
}

fn parse_form_body(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    Ok(decode_pairs(&body))
}

/// `application/x-www-form-urlencoded` pairs; later keys win.
fn decode_pairs(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}
