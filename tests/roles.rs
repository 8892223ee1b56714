use motorpool_bot::model::{Flow, Role};

const ALL_FLOWS: [Flow; 15] = [
    Flow::BrowseCars,
    Flow::BookCar,
    Flow::ReturnCar,
    Flow::ViewOwnBooking,
    Flow::ChangeLanguage,
    Flow::AddCar,
    Flow::ListOwnCars,
    Flow::DeleteOwnCar,
    Flow::UpdateCarPhoto,
    Flow::ViewDealerStats,
    Flow::ViewAllBookings,
    Flow::CancelBooking,
    Flow::ListDealers,
    Flow::AddDealer,
    Flow::RemoveDealer,
];

fn permitted(role: Role) -> Vec<Flow> {
    ALL_FLOWS.into_iter().filter(|f| role.permits(*f)).collect()
}

#[test]
fn customers_only_get_customer_flows() {
    assert_eq!(
        permitted(Role::Customer),
        vec![
            Flow::BrowseCars,
            Flow::BookCar,
            Flow::ReturnCar,
            Flow::ViewOwnBooking,
            Flow::ChangeLanguage,
        ]
    );
}

#[test]
fn dealers_only_get_inventory_flows() {
    assert_eq!(
        permitted(Role::Dealer),
        vec![
            Flow::AddCar,
            Flow::ListOwnCars,
            Flow::DeleteOwnCar,
            Flow::UpdateCarPhoto,
            Flow::ViewDealerStats,
        ]
    );
}

#[test]
fn admins_only_get_oversight_flows() {
    assert_eq!(
        permitted(Role::Admin),
        vec![
            Flow::ViewAllBookings,
            Flow::CancelBooking,
            Flow::ListDealers,
            Flow::AddDealer,
            Flow::RemoveDealer,
        ]
    );
}

#[test]
fn no_flow_is_shared_between_roles() {
    for flow in ALL_FLOWS {
        let granted = [Role::Customer, Role::Dealer, Role::Admin]
            .into_iter()
            .filter(|r| r.permits(flow))
            .count();
        assert_eq!(granted, 1, "flow {flow:?} granted to {granted} roles");
    }
}
