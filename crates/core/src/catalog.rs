//! The read-only menu catalog.
//!
//! The demo ships with a hardcoded sample menu. A production system
//! would swap this for a fetched catalog; the rest of the crate only
//! depends on the lookup and filter methods here.

use crate::menu::{Category, MenuItem, NutritionInfo};
use crate::types::{MenuItemId, Price};

/// Read-only collection of orderable menu items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from a list of items.
    #[must_use]
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// All items, in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items in `category` whose name or description contains `query`
    /// (case-insensitive). An empty query matches everything.
    #[must_use]
    pub fn filter(&self, category: Category, query: &str) -> Vec<&MenuItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.category == category)
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The demo's sample menu.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            MenuItem {
                id: MenuItemId::new("1"),
                name: "Truffle Mushroom Risotto".to_owned(),
                description:
                    "Creamy arborio rice with wild mushrooms, truffle oil, and parmesan cheese"
                        .to_owned(),
                price: Price::from_major(28),
                image: "/static/images/risotto.jpg".to_owned(),
                category: Category::Mains,
                model_url: Some("/models/risotto.glb".to_owned()),
                vegetarian: true,
                spicy: false,
                rating: Some(4.8),
                prep_time: Some("25 min".to_owned()),
                ingredients: vec![
                    "Arborio rice".to_owned(),
                    "Wild mushrooms".to_owned(),
                    "Truffle oil".to_owned(),
                    "Parmesan".to_owned(),
                    "White wine".to_owned(),
                ],
                nutrition: Some(NutritionInfo {
                    calories: "520".to_owned(),
                    protein: "14g".to_owned(),
                    carbs: "68g".to_owned(),
                    fat: "18g".to_owned(),
                }),
            },
            MenuItem {
                id: MenuItemId::new("2"),
                name: "Grilled Salmon Teriyaki".to_owned(),
                description:
                    "Fresh Atlantic salmon with teriyaki glaze, steamed vegetables, and jasmine rice"
                        .to_owned(),
                price: Price::from_major(32),
                image: "/static/images/salmon.jpg".to_owned(),
                category: Category::Mains,
                model_url: Some("/models/salmon.glb".to_owned()),
                vegetarian: false,
                spicy: false,
                rating: Some(4.9),
                prep_time: Some("20 min".to_owned()),
                ingredients: vec![
                    "Atlantic salmon".to_owned(),
                    "Teriyaki glaze".to_owned(),
                    "Seasonal vegetables".to_owned(),
                    "Jasmine rice".to_owned(),
                ],
                nutrition: Some(NutritionInfo {
                    calories: "610".to_owned(),
                    protein: "42g".to_owned(),
                    carbs: "55g".to_owned(),
                    fat: "22g".to_owned(),
                }),
            },
            MenuItem {
                id: MenuItemId::new("3"),
                name: "Crispy Calamari".to_owned(),
                description:
                    "Golden fried squid rings with spicy marinara sauce and lemon wedges"
                        .to_owned(),
                price: Price::from_major(16),
                image: "/static/images/calamari.jpg".to_owned(),
                category: Category::Starters,
                model_url: Some("/models/calamari.glb".to_owned()),
                vegetarian: false,
                spicy: true,
                rating: Some(4.6),
                prep_time: Some("15 min".to_owned()),
                ingredients: vec![
                    "Squid".to_owned(),
                    "Marinara sauce".to_owned(),
                    "Lemon".to_owned(),
                    "Seasoned flour".to_owned(),
                ],
                nutrition: None,
            },
            MenuItem {
                id: MenuItemId::new("4"),
                name: "Chocolate Lava Cake".to_owned(),
                description:
                    "Warm chocolate cake with molten center, vanilla ice cream, and berry compote"
                        .to_owned(),
                price: Price::from_major(12),
                image: "/static/images/lava-cake.jpg".to_owned(),
                category: Category::Desserts,
                model_url: Some("/models/lava-cake.glb".to_owned()),
                vegetarian: true,
                spicy: false,
                rating: Some(4.9),
                prep_time: Some("12 min".to_owned()),
                ingredients: vec![
                    "Dark chocolate".to_owned(),
                    "Vanilla ice cream".to_owned(),
                    "Berry compote".to_owned(),
                ],
                nutrition: None,
            },
            MenuItem {
                id: MenuItemId::new("5"),
                name: "Craft Cocktail Selection".to_owned(),
                description: "House-made mixers, premium spirits, fresh garnishes".to_owned(),
                price: Price::from_major(14),
                image: "/static/images/cocktail.jpg".to_owned(),
                category: Category::Drinks,
                model_url: None,
                vegetarian: false,
                spicy: false,
                rating: Some(4.7),
                prep_time: None,
                ingredients: Vec::new(),
                nutrition: None,
            },
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
