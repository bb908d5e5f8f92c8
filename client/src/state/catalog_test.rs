use super::*;

fn table(numero: i64, status: TableStatus) -> Table {
    Table { id: Id(format!("m{numero}")), numero, status, created_at: None }
}

fn draft(nome: &str, preco: &str, categoria: Option<&str>) -> ProductDraft {
    ProductDraft {
        nome: nome.to_owned(),
        preco: preco.to_owned(),
        descricao: "desc".to_owned(),
        categoria_id: categoria.map(Id::from),
    }
}

// =============================================================
// Price input
// =============================================================

#[test]
fn sanitize_price_keeps_digits_and_separators() {
    assert_eq!(sanitize_price_input("R$ 12,50"), "12,50");
    assert_eq!(sanitize_price_input("abc"), "");
}

#[test]
fn sanitize_price_drops_leading_zero_before_digit() {
    assert_eq!(sanitize_price_input("05"), "5");
    assert_eq!(sanitize_price_input("0,5"), "0,5");
    assert_eq!(sanitize_price_input("0.5"), "0.5");
    assert_eq!(sanitize_price_input("0"), "0");
}

#[test]
fn parse_price_uses_comma_as_decimal_separator() {
    assert_eq!(parse_price("12,5"), Some(12.5));
    assert_eq!(parse_price("12.5"), Some(12.5));
    assert_eq!(parse_price("7"), Some(7.0));
}

#[test]
fn parse_price_reads_numeric_prefix_only() {
    assert_eq!(parse_price("1,2,3"), Some(1.2));
    assert_eq!(parse_price("3x"), Some(3.0));
    assert_eq!(parse_price(","), None);
    assert_eq!(parse_price(""), None);
}

#[test]
fn format_price_input_uses_comma() {
    assert_eq!(format_price_input(12.5), "12,5");
    assert_eq!(format_price_input(45.0), "45");
}

// =============================================================
// Product form
// =============================================================

#[test]
fn product_draft_requires_name_price_and_category() {
    assert_eq!(draft("", "10", Some("1")).validate(), Err(FormError::MissingFields));
    assert_eq!(draft("Pizza", "", Some("1")).validate(), Err(FormError::MissingFields));
    assert_eq!(draft("Pizza", "10", None).validate(), Err(FormError::MissingFields));
}

#[test]
fn product_draft_rejects_non_positive_price() {
    assert_eq!(draft("Pizza", "0", Some("1")).validate(), Err(FormError::InvalidPrice));
    assert_eq!(draft("Pizza", ",", Some("1")).validate(), Err(FormError::InvalidPrice));
}

#[test]
fn product_submission_builds_multipart_fields() {
    let submission = draft("  Pizza ", "39,90", Some("4")).validate().unwrap();
    assert_eq!(
        submission.form_fields(),
        vec![
            ("nome", "Pizza".to_owned()),
            ("descricao", "desc".to_owned()),
            ("preco", "39.9".to_owned()),
            ("categoriaId", "4".to_owned()),
        ]
    );
}

#[test]
fn validate_image_checks_type_and_size() {
    assert_eq!(validate_image("image/png", 1024.0), Ok(()));
    assert_eq!(validate_image("image/webp", MAX_IMAGE_BYTES), Ok(()));
    assert_eq!(validate_image("image/svg+xml", 10.0), Err(FormError::UnsupportedImage));
    assert_eq!(validate_image("image/jpeg", MAX_IMAGE_BYTES + 1.0), Err(FormError::ImageTooLarge));
}

// =============================================================
// Categories & tables
// =============================================================

#[test]
fn category_name_is_trimmed_and_required() {
    assert_eq!(validate_category_name("  Bebidas "), Ok("Bebidas".to_owned()));
    assert_eq!(validate_category_name("   "), Err(FormError::MissingCategoryName));
}

#[test]
fn table_number_must_be_positive_and_unique() {
    let existing = vec![table(1, TableStatus::Livre), table(2, TableStatus::Bloqueada)];
    assert_eq!(validate_table_number("3", &existing), Ok(3));
    assert_eq!(validate_table_number("0", &existing), Err(FormError::InvalidTableNumber));
    assert_eq!(validate_table_number("-4", &existing), Err(FormError::InvalidTableNumber));
    assert_eq!(validate_table_number("", &existing), Err(FormError::InvalidTableNumber));
    assert_eq!(validate_table_number("2", &existing), Err(FormError::DuplicateTable(2)));
}

#[test]
fn blocked_tables_cannot_be_deleted() {
    assert_eq!(can_delete_table(&table(1, TableStatus::Livre)), Ok(()));
    let err = can_delete_table(&table(5, TableStatus::Bloqueada)).unwrap_err();
    assert_eq!(err, FormError::TableInUse(5));
    assert_eq!(err.to_string(), "Não é possível excluir a Mesa 5 pois ela está bloqueada.");
}
