use motorpool_bot::messages::{self, Lang};

#[test]
fn rendering_is_pure() {
    // Same (language, key, parameters) triple renders identically.
    assert_eq!(
        messages::welcome_new(Lang::En, "Alice"),
        messages::welcome_new(Lang::En, "Alice")
    );
    assert_eq!(
        messages::car_details(Lang::Ru, "Toyota", "Corolla", 2020, "Test Dealer"),
        messages::car_details(Lang::Ru, "Toyota", "Corolla", 2020, "Test Dealer")
    );
    assert_eq!(
        messages::booking_failed(Lang::En, "reason"),
        messages::booking_failed(Lang::En, "reason")
    );
}

#[test]
fn unknown_language_codes_fall_back_to_english() {
    assert_eq!(Lang::from_code("de"), Lang::En);
    assert_eq!(Lang::from_code(""), Lang::En);
    assert_eq!(Lang::from_code("ru"), Lang::Ru);
    assert_eq!(Lang::from_code("en"), Lang::En);
}

#[test]
fn language_code_roundtrip() {
    assert_eq!(Lang::from_code(Lang::En.code()), Lang::En);
    assert_eq!(Lang::from_code(Lang::Ru.code()), Lang::Ru);
}

#[test]
fn parameters_appear_in_rendered_text() {
    let text = messages::welcome_new(Lang::En, "Alice");
    assert!(text.contains("Alice"));

    let text = messages::car_details(Lang::En, "Honda", "Civic", 2021, "Test Dealer");
    assert!(text.contains("Honda"));
    assert!(text.contains("Civic"));
    assert!(text.contains("2021"));
    assert!(text.contains("Test Dealer"));

    let text = messages::booking_failed(Lang::Ru, "причина");
    assert!(text.contains("причина"));
}

#[test]
fn languages_render_differently() {
    assert_ne!(
        messages::main_menu(Lang::En),
        messages::main_menu(Lang::Ru)
    );
    assert_ne!(
        messages::booking_success(Lang::En),
        messages::booking_success(Lang::Ru)
    );
    assert_ne!(
        messages::no_active_booking(Lang::En),
        messages::no_active_booking(Lang::Ru)
    );
}

#[test]
fn language_prompt_is_bilingual() {
    // Shown before any language is chosen, so both languages see the same text.
    assert_eq!(
        messages::select_language(Lang::En),
        messages::select_language(Lang::Ru)
    );
}
