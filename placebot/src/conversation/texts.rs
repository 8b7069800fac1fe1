//! User-facing texts (Uzbek, as the bot's audience expects).

pub const WELCOME: &str =
    "Xush kelibsiz! Iltimos, yaqin atrofdagi joylarni topish uchun toifani tanlang.";
pub const PICK_CATEGORY: &str = "Iltimos, yaqin atrofdagi joylarni topish uchun toifani tanlang.";
pub const MENU_COMMAND: &str = "Kategoriyalar";
pub const MENU_SHORTCUT_PROMPT: &str = "Kategoriyalar:";
pub const SEND_LOCATION_BUTTON: &str = "📍 Joylashuvni yuborish";
pub const SEARCH_FAILED: &str = "An error occurred while searching for places.";
pub const SELECT_CATEGORY_FIRST: &str = "Iltimos, avval toifani tanlang.";
pub const UNKNOWN_CATEGORY: &str = "Bunday toifa topilmadi. Iltimos, ro'yxatdan tanlang.";

/// Prompt sent after a category is chosen.
pub fn location_prompt(category_name: &str) -> String {
    format!(
        "Siz {name} turini tanlading. Iltimos, {name}lar yaqinida topish uchun joylashuvingizni yuboring.",
        name = category_name
    )
}
