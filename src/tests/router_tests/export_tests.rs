use crate::tests::utils::{fixture_state, get};
use std::io::Read;

#[test]
fn export_downloads_a_workbook() {
    let state = fixture_state();

    let resp = get(&state, "/listings.xlsx?area=Clayton+Park");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"halifax_listings.xlsx\""
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
