use motorpool_bot::interactions::ids::{
    self, parse_book, parse_car_page, parse_car_select, parse_id_suffix, parse_lang,
};

#[test]
fn parse_car_select_ok() {
    assert_eq!(parse_car_select("car_42"), Some(42));
    assert_eq!(parse_car_select("car_1"), Some(1));
}

#[test]
fn parse_car_select_rejects_pagination_ids() {
    assert_eq!(parse_car_select("car_page_0"), None);
    assert_eq!(parse_car_select("car_page_noop"), None);
}

#[test]
fn parse_car_select_bad() {
    assert_eq!(parse_car_select("car_"), None);
    assert_eq!(parse_car_select("car_x"), None);
    assert_eq!(parse_car_select("book_42"), None);
}

#[test]
fn parse_book_distinguishes_confirm() {
    assert_eq!(parse_book("book_7"), Some((false, 7)));
    assert_eq!(parse_book("book_confirm_7"), Some((true, 7)));
    assert_eq!(parse_book("book_confirm_"), None);
    assert_eq!(parse_book("return_7"), None);
}

#[test]
fn parse_car_page_ok_and_noop() {
    assert_eq!(parse_car_page("car_page_0"), Some(0));
    assert_eq!(parse_car_page("car_page_12"), Some(12));
    assert_eq!(parse_car_page("car_page_noop"), None);
    assert_eq!(parse_car_page("car_3"), None);
}

#[test]
fn parse_lang_ok() {
    assert_eq!(parse_lang("lang_en"), Some("en"));
    assert_eq!(parse_lang("lang_ru"), Some("ru"));
    assert_eq!(parse_lang("lang_"), None);
    assert_eq!(parse_lang("language"), None);
}

#[test]
fn parse_id_suffix_roundtrips_keyboard_ids() {
    let id = format!("{}15", ids::RETURN_PREFIX);
    assert_eq!(parse_id_suffix(&id, ids::RETURN_PREFIX), Some(15));

    let id = format!("{}3", ids::ADMIN_BOOKING_DELETE_CONFIRM_PREFIX);
    assert_eq!(
        parse_id_suffix(&id, ids::ADMIN_BOOKING_DELETE_CONFIRM_PREFIX),
        Some(3)
    );

    let id = format!("{}9", ids::DEALER_CAR_DELETE_PREFIX);
    assert_eq!(parse_id_suffix(&id, ids::DEALER_CAR_DELETE_PREFIX), Some(9));
}

#[test]
fn delete_confirm_ids_do_not_collide_with_delete_ids() {
    // The confirm prefix contains the plain prefix, so dispatch must try the
    // confirm form first. These assertions pin that ordering requirement.
    let confirm = format!("{}4", ids::DEALER_CAR_DELETE_CONFIRM_PREFIX);
    assert_eq!(
        parse_id_suffix(&confirm, ids::DEALER_CAR_DELETE_CONFIRM_PREFIX),
        Some(4)
    );
    assert_eq!(parse_id_suffix(&confirm, ids::DEALER_CAR_DELETE_PREFIX), None);

    let confirm = format!("{}8", ids::ADMIN_DEALER_DELETE_CONFIRM_PREFIX);
    assert_eq!(
        parse_id_suffix(&confirm, ids::ADMIN_DEALER_DELETE_CONFIRM_PREFIX),
        Some(8)
    );
    assert_eq!(parse_id_suffix(&confirm, ids::ADMIN_DEALER_DELETE_PREFIX), None);
}
