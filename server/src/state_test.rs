use super::*;

#[test]
fn fixture_users_in_fixed_order() {
    let catalog = Catalog::fixtures();
    let rows: Vec<(&str, &str)> = catalog.users.iter().map(|u| (u.id.as_str(), u.email.as_str())).collect();
    assert_eq!(
        rows,
        [("1", "test@example.com"), ("2", "demo@example.com"), ("3", "lugatex@yahoo.com")]
    );
}

#[test]
fn fixture_codes_in_fixed_order() {
    let catalog = Catalog::fixtures();
    let ids: Vec<&str> = catalog.codes.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
    assert_eq!(catalog.codes[0].description, "Bitcoin keeps hitting record highs");
}

#[test]
fn code_description_keeps_typographic_apostrophe() {
    let catalog = Catalog::fixtures();
    assert_eq!(catalog.codes[1].description, "Jamie Dimon doesn’t want to talk about it");
}

#[test]
fn default_state_serves_fixtures() {
    let state = AppState::default();
    assert_eq!(*state.catalog, Catalog::fixtures());
}

#[test]
fn cloned_state_shares_catalog() {
    let state = AppState::new(Catalog { users: Vec::new(), codes: Vec::new() });
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.catalog, &clone.catalog));
}
