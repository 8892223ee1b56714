//! This module defines the shared data structures used throughout the
//! application, plus the role model that gates every flow.

use crate::database::{self, RentalResult};
use serenity::model::id::{GuildId, UserId};
use serenity::prelude::TypeMapKey;
use sqlx::PgPool;
use std::sync::Arc;

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe
/// access from any command or event handler.
pub struct AppState {
    /// The connection pool for the PostgreSQL database.
    pub db: PgPool,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

/// One of the fixed flows a user can invoke. Every slash command and
/// component family maps to exactly one of these before any work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    BrowseCars,
    BookCar,
    ReturnCar,
    ViewOwnBooking,
    ChangeLanguage,
    AddCar,
    ListOwnCars,
    DeleteOwnCar,
    UpdateCarPhoto,
    ViewDealerStats,
    ViewAllBookings,
    CancelBooking,
    ListDealers,
    AddDealer,
    RemoveDealer,
}

/// Who is acting. Dealers and admins exist only inside the admin guild;
/// everywhere else the sender is a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Dealer,
    Admin,
}

impl Role {
    /// Resolve the sender's role from where the event arrived and the dealer
    /// roster. Inside the admin guild, registered dealers act as dealers and
    /// everyone else as an admin; outside it everyone is a customer.
    pub async fn resolve(
        db: &PgPool,
        admin_guild_id: GuildId,
        guild_id: Option<GuildId>,
        user_id: UserId,
    ) -> RentalResult<Role> {
        if guild_id != Some(admin_guild_id) {
            return Ok(Role::Customer);
        }
        if database::dealers::is_dealer(db, user_id).await? {
            Ok(Role::Dealer)
        } else {
            Ok(Role::Admin)
        }
    }

    /// The permission table. A flow not granted here is answered with a
    /// localized refusal, never dispatched.
    pub fn permits(self, flow: Flow) -> bool {
        use Flow::*;
        match self {
            Role::Customer => matches!(
                flow,
                BrowseCars | BookCar | ReturnCar | ViewOwnBooking | ChangeLanguage
            ),
            Role::Dealer => matches!(
                flow,
                AddCar | ListOwnCars | DeleteOwnCar | UpdateCarPhoto | ViewDealerStats
            ),
            Role::Admin => matches!(
                flow,
                ViewAllBookings | CancelBooking | ListDealers | AddDealer | RemoveDealer
            ),
        }
    }
}
