//! Customer-facing message templates.
//!
//! Pure mapping from (language, template key, parameters) to rendered text.
//! No state and no side effects: rendering the same triple twice yields the
//! same string. Unknown language codes fall back to English. Dealer and
//! admin panel text is English-only and lives next to the panels themselves.

/// Languages the customer menus are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Ru,
}

impl Lang {
    /// Parse a stored language code. Anything unrecognized renders English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ru" => Lang::Ru,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }
}

// --- Start / registration ---

pub fn welcome_new(lang: Lang, name: &str) -> String {
    match lang {
        Lang::En => format!("👋 Welcome, {name}! You have been registered as a customer."),
        Lang::Ru => format!("👋 Добро пожаловать, {name}! Вы зарегистрированы как клиент."),
    }
}

pub fn welcome_back(lang: Lang, name: &str) -> String {
    match lang {
        Lang::En => format!("👋 Welcome back, {name}!"),
        Lang::Ru => format!("👋 С возвращением, {name}!"),
    }
}

pub fn admin_restriction(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ Customer actions are not available in the admin server.",
        Lang::Ru => "❌ Действия клиентов недоступны на сервере администраторов.",
    }
}

// Shown before a language is chosen, so it carries both languages itself.
pub fn select_language(_lang: Lang) -> &'static str {
    "Please select your language / Пожалуйста, выберите язык:"
}

pub fn language_changed(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "✅ Language changed to English",
        Lang::Ru => "✅ Язык изменен на русский",
    }
}

// --- Main menu ---

pub fn main_menu(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Main Menu:",
        Lang::Ru => "Главное меню:",
    }
}

pub fn list_cars_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "🚗 List Cars",
        Lang::Ru => "🚗 Список автомобилей",
    }
}

pub fn my_booking_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "📄 My Booking",
        Lang::Ru => "📄 Моя бронь",
    }
}

pub fn contact_admin_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "📞 Contact Admin",
        Lang::Ru => "📞 Связаться с админом",
    }
}

pub fn change_language_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "🌐 Change Language",
        Lang::Ru => "🌐 Сменить язык",
    }
}

// --- Car listing ---

pub fn select_car(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Select a car to view details:",
        Lang::Ru => "Выберите автомобиль для просмотра деталей:",
    }
}

pub fn no_cars(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "No cars available at the moment.",
        Lang::Ru => "Сейчас нет доступных автомобилей.",
    }
}

pub fn car_details(lang: Lang, make: &str, model: &str, year: i32, dealer: &str) -> String {
    match lang {
        Lang::En => format!("🚗 {make} {model} ({year})\n👤 Dealer: {dealer}"),
        Lang::Ru => format!("🚗 {make} {model} ({year})\n👤 Дилер: {dealer}"),
    }
}

// --- Booking ---

pub fn confirm_booking(lang: Lang, make: &str, model: &str, year: i32) -> String {
    match lang {
        Lang::En => format!(
            "📋 Please confirm your booking:\n\n🚗 {make} {model} ({year})\n\nDo you want to proceed with this booking?"
        ),
        Lang::Ru => format!(
            "📋 Подтвердите бронирование:\n\n🚗 {make} {model} ({year})\n\nПродолжить бронирование?"
        ),
    }
}

pub fn booking_success(lang: Lang) -> &'static str {
    match lang {
        Lang::En => {
            "✅ Car booked successfully!\nYou can view your booking details in 'My Booking' section."
        }
        Lang::Ru => {
            "✅ Автомобиль успешно забронирован!\nВы можете посмотреть детали в разделе 'Моя бронь'."
        }
    }
}

pub fn booking_failed(lang: Lang, reason: &str) -> String {
    match lang {
        Lang::En => format!("❌ Booking failed: {reason}"),
        Lang::Ru => format!("❌ Ошибка бронирования: {reason}"),
    }
}

pub fn no_active_booking(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "You have no active bookings.",
        Lang::Ru => "У вас нет активных бронирований.",
    }
}

pub fn active_booking(lang: Lang, booking_info: &str) -> String {
    match lang {
        Lang::En => format!("Your active booking:\n\n{booking_info}"),
        Lang::Ru => format!("Ваше активное бронирование:\n\n{booking_info}"),
    }
}

pub fn return_success(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "✅ Car returned successfully!",
        Lang::Ru => "✅ Автомобиль успешно возвращен!",
    }
}

pub fn return_failed(lang: Lang, reason: &str) -> String {
    match lang {
        Lang::En => format!("❌ Return failed: {reason}"),
        Lang::Ru => format!("❌ Ошибка возврата: {reason}"),
    }
}

// --- Navigation buttons ---

pub fn back_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "🔙 Back",
        Lang::Ru => "🔙 Назад",
    }
}

pub fn book_car_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "📝 Book This Car",
        Lang::Ru => "📝 Забронировать",
    }
}

pub fn return_car_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "✅ Return Car",
        Lang::Ru => "✅ Вернуть автомобиль",
    }
}

pub fn confirm_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "✅ Confirm Booking",
        Lang::Ru => "✅ Подтвердить",
    }
}

pub fn cancel_btn(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ Cancel",
        Lang::Ru => "❌ Отмена",
    }
}

// --- Errors and status ---

pub fn db_error(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ Error connecting to the database. Please try again later.",
        Lang::Ru => "❌ Ошибка подключения к базе данных. Попробуйте позже.",
    }
}

pub fn error_try_again(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ An error occurred. Please try again later.",
        Lang::Ru => "❌ Произошла ошибка. Попробуйте еще раз.",
    }
}

pub fn customer_not_found(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ Customer not found. Please start over.",
        Lang::Ru => "❌ Клиент не найден. Начните сначала.",
    }
}

pub fn car_not_found(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "❌ Car not found or no longer available.",
        Lang::Ru => "❌ Автомобиль не найден или недоступен.",
    }
}

pub fn car_unavailable(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "This car is not available for booking. It may have been recently booked.",
        Lang::Ru => "Этот автомобиль недоступен для бронирования. Возможно, его только что забронировали.",
    }
}

pub fn already_booked(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "You already have an active booking.",
        Lang::Ru => "У вас уже есть активное бронирование.",
    }
}

pub fn booking_not_found(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Booking not found or already completed.",
        Lang::Ru => "Бронирование не найдено или уже завершено.",
    }
}

// --- Contact ---

pub fn contact_admin_msg(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "For assistance, please contact the admin team.",
        Lang::Ru => "Для помощи свяжитесь с командой администраторов.",
    }
}
