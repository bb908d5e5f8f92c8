use super::*;

#[test]
fn resource_endpoints_format_expected_paths() {
    let id = Id::from("42");
    assert_eq!(order_endpoint(&id), "/pedidos/42");
    assert_eq!(table_endpoint(&id), "/mesas/42");
    assert_eq!(product_endpoint(&id), "/produtos/42");
    assert_eq!(category_endpoint(&id), "/categorias/42");
}

#[test]
fn product_save_target_creates_without_id() {
    let (method, path) = product_save_target(None);
    assert_eq!(method, Method::Post);
    assert_eq!(path, "/produtos");
}

#[test]
fn product_save_target_patches_with_id() {
    let id = Id::from("p9");
    let (method, path) = product_save_target(Some(&id));
    assert_eq!(method, Method::Patch);
    assert_eq!(path, "/produtos/p9");
}

#[test]
fn endpoint_urls_join_client_base() {
    let api = ApiClient::new("http://api.local/");
    assert_eq!(api.url(TABLE_OVERVIEW_PATH), "http://api.local/pedidos/mesas/ultimo");
    assert_eq!(api.url(&order_endpoint(&Id::from("3"))), "http://api.local/pedidos/3");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let api = ApiClient::new("http://api.local");
    let result = crate::net::gateway::block_on_ready(fetch_tables(&api));
    assert!(matches!(result, Err(ApiError::Unavailable)));
    let login_result = crate::net::gateway::block_on_ready(login(&api, "a@b.com", "pw"));
    assert!(matches!(login_result, Err(ApiError::Unavailable)));
}
