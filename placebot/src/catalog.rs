//! Category catalog: ordered (display name, Places type code) pairs. Order is the menu order.

use placebot_core::{HandlerError, InlineButton, ReplyMarkup};

/// A venue category and the Places `type` it searches for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub display_name: String,
    pub type_code: String,
}

impl Category {
    pub fn new(display_name: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            type_code: type_code.into(),
        }
    }
}

/// Immutable, ordered list of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by callback payload.
    pub fn find(&self, type_code: &str) -> Result<&Category, HandlerError> {
        self.categories
            .iter()
            .find(|c| c.type_code == type_code)
            .ok_or_else(|| HandlerError::UnknownCategory(type_code.to_string()))
    }

    /// Inline menu: one button per row, payload = type code.
    pub fn menu_markup(&self) -> ReplyMarkup {
        ReplyMarkup::InlineKeyboard(
            self.categories
                .iter()
                .map(|c| {
                    vec![InlineButton {
                        text: c.display_name.clone(),
                        callback_data: c.type_code.clone(),
                    }]
                })
                .collect(),
        )
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Category::new("🍽️ Restoranlar", "restaurant"),
            Category::new("⛽ Gaz stansiyalari", "gas_station"),
            Category::new("🛒 Do‘konlar", "grocery_or_supermarket"),
            Category::new("🏥 Kasalxonalar/Poliklinikalar", "hospital"),
            Category::new("🛍️ Savdo markazlari", "shopping_mall"),
            Category::new("🏨 Yotoqxona", "lodging"),
            Category::new("🌳 Parks", "park"),
            Category::new("🏋️‍♂️ Sport zallari", "gym"),
        ])
    }
}
