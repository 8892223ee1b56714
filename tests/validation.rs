use motorpool_bot::commands::dealer::logic::{
    parse_new_car, validate_make, validate_model, validate_photo_url, validate_year,
};

#[test]
fn make_accepts_letters_and_spaces() {
    assert!(validate_make("Toyota").is_ok());
    assert!(validate_make("Alfa Romeo").is_ok());
    assert!(validate_make("  Honda  ").is_ok());
}

#[test]
fn make_rejects_empty_overlong_and_symbols() {
    assert!(validate_make("").is_err());
    assert!(validate_make("   ").is_err());
    assert!(validate_make(&"a".repeat(51)).is_err());
    assert!(validate_make("B-M-W").is_err());
    assert!(validate_make("Mazda3").is_err());
}

#[test]
fn model_allows_digits_but_not_empty() {
    assert!(validate_model("Corolla").is_ok());
    assert!(validate_model("911 GT3").is_ok());
    assert!(validate_model("").is_err());
    assert!(validate_model(&"x".repeat(51)).is_err());
}

#[test]
fn year_bounds() {
    assert_eq!(validate_year("2022", 2026), Ok(2022));
    assert_eq!(validate_year(" 1900 ", 2026), Ok(1900));
    // Next year's models are accepted, anything later is not.
    assert_eq!(validate_year("2027", 2026), Ok(2027));
    assert!(validate_year("2028", 2026).is_err());
    assert!(validate_year("1899", 2026).is_err());
    assert!(validate_year("twenty", 2026).is_err());
    assert!(validate_year("", 2026).is_err());
}

#[test]
fn photo_url_requires_http() {
    assert!(validate_photo_url("https://cdn.example.com/car.jpg").is_ok());
    assert!(validate_photo_url("http://example.com/a.png").is_ok());
    assert!(validate_photo_url("ftp://example.com/a.png").is_err());
    assert!(validate_photo_url("car.jpg").is_err());
    assert!(validate_photo_url("").is_err());
}

#[test]
fn parse_new_car_happy_path_trims_fields() {
    let car = parse_new_car(" Toyota ", " Corolla ", "2020", " https://x/y.jpg ", 2026)
        .expect("should validate");
    assert_eq!(car.make, "Toyota");
    assert_eq!(car.model, "Corolla");
    assert_eq!(car.year, 2020);
    assert_eq!(car.photo_url, "https://x/y.jpg");
}

#[test]
fn parse_new_car_reports_first_failure() {
    let err = parse_new_car("Mazda3", "3", "2020", "https://x", 2026).unwrap_err();
    assert!(err.contains("letters and spaces"));

    let err = parse_new_car("Mazda", "3", "year", "https://x", 2026).unwrap_err();
    assert!(err.contains("numbers only"));
}
