//! # Seed Data Generator
//!
//! Builds the demo catalog the storefront serves: restaurants, their menus,
//! and a handful of customer accounts.
//!
//! ## Determinism
//! The generator runs on a fixed-seed RNG, so every process start produces
//! the **same** catalog - the same ids, names, and prices. Clients can
//! bookmark a restaurant across server restarts and integration tests can
//! rely on stable data without fixture files.
//!
//! ## Generated Data
//! - 20 restaurants, each with 8-15 menu items
//! - Menu categories: Appetizers, Entrees, Sides, Drinks, Desserts
//! - Item prices: $5.99 - $29.99 (2 decimals)
//! - ~30% of items flagged popular, ~95% available
//! - ~85% of restaurants open, delivery fees $0.00 - $5.99
//! - 5 customer accounts

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use savor_core::{MenuItem, Restaurant, User};

/// Fixed RNG seed; changing it changes every generated id and price.
const SEED: u64 = 42;

const CUISINES: &[&str] = &[
    "American",
    "Italian",
    "Chinese",
    "Japanese",
    "Mexican",
    "Indian",
    "Thai",
    "Mediterranean",
    "Korean",
    "Vietnamese",
];

const MENU_CATEGORIES: &[&str] = &["Appetizers", "Entrees", "Sides", "Drinks", "Desserts"];

const RESTAURANT_ADJECTIVES: &[&str] = &[
    "Golden", "Rustic", "Urban", "Jade", "Old Town", "Saffron", "Copper", "Wild Basil", "Sunset",
    "Harborside", "Maple", "Blue Door",
];

const RESTAURANT_KINDS: &[&str] = &["Grill", "Kitchen", "Bistro", "Cafe", "Deli"];

const RESTAURANT_BLURBS: &[&str] = &[
    "Family recipes, made fresh every day.",
    "Seasonal plates and a short, honest menu.",
    "Neighborhood favorite since day one.",
    "Bold flavors, generous portions.",
    "Comfort food with a modern twist.",
    "Slow-cooked classics and quick lunches.",
];

/// Dish names per category; `DISHES[i]` pairs with `MENU_CATEGORIES[i]`.
const DISHES: &[&[&str]] = &[
    &[
        "Crispy Calamari",
        "Garlic Knots",
        "Spring Rolls",
        "Loaded Nachos",
        "Bruschetta",
        "Chicken Satay",
        "Edamame",
        "Stuffed Mushrooms",
        "Buffalo Wings",
        "Shrimp Cocktail",
    ],
    &[
        "Margherita Pizza",
        "Pad Thai",
        "Chicken Tikka Masala",
        "Beef Bulgogi",
        "Fish Tacos",
        "Mushroom Risotto",
        "Lamb Gyro Platter",
        "Pho with Brisket",
        "General Tso's Chicken",
        "Pulled Pork Sandwich",
        "Eggplant Parmesan",
        "Teriyaki Salmon",
    ],
    &[
        "Garlic Fries",
        "Steamed Rice",
        "Mac and Cheese",
        "Side Caesar",
        "Coleslaw",
        "Grilled Vegetables",
        "Naan Bread",
        "Miso Soup",
    ],
    &[
        "Fresh Lemonade",
        "Thai Iced Tea",
        "Mango Lassi",
        "Sparkling Water",
        "Cold Brew Coffee",
        "Horchata",
        "Green Tea",
        "House Soda",
    ],
    &[
        "Tiramisu",
        "Mochi Ice Cream",
        "Churros",
        "Baklava",
        "Cheesecake",
        "Gulab Jamun",
        "Brownie Sundae",
        "Panna Cotta",
    ],
];

const DISH_BLURBS: &[&str] = &[
    "A house specialty, served piping hot.",
    "Made to order with locally sourced ingredients.",
    "A customer favorite, perfectly seasoned.",
    "Generous portion, great for sharing.",
    "Light, fresh, and full of flavor.",
    "Rich and satisfying comfort food.",
];

const USER_NAMES: &[&str] = &[
    "Ava Thompson",
    "Liam Chen",
    "Sofia Ramirez",
    "Noah Patel",
    "Emma Kowalski",
];

const STREETS: &[&str] = &[
    "Maple Ave",
    "Oak St",
    "Cedar Ln",
    "Elm St",
    "Birch Rd",
    "Willow Way",
];

/// The complete generated catalog.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub users: Vec<User>,
}

/// Generates the deterministic demo catalog.
pub fn seed() -> SeedData {
    let mut rng = StdRng::seed_from_u64(SEED);

    let restaurants: Vec<Restaurant> = (0..20).map(|_| gen_restaurant(&mut rng)).collect();

    let mut menu_items = Vec::new();
    for restaurant in &restaurants {
        let count = rng.gen_range(8..=15);
        for _ in 0..count {
            menu_items.push(gen_menu_item(&mut rng, &restaurant.id));
        }
    }

    let users: Vec<User> = USER_NAMES.iter().map(|n| gen_user(&mut rng, n)).collect();

    SeedData {
        restaurants,
        menu_items,
        users,
    }
}

/// Deterministic UUID from the seeded RNG (standard v4 layout).
fn gen_id(rng: &mut StdRng) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .to_string()
}

/// Dollar amount with 2 decimals in `[min, max]`.
fn gen_price(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    (rng.gen_range(min..=max) * 100.0).round() / 100.0
}

fn gen_restaurant(rng: &mut StdRng) -> Restaurant {
    let adjective = RESTAURANT_ADJECTIVES.choose(rng).unwrap();
    let kind = RESTAURANT_KINDS.choose(rng).unwrap();
    let id = gen_id(rng);

    let cuisine_count = rng.gen_range(1..=3);
    let cuisine: Vec<String> = CUISINES
        .choose_multiple(rng, cuisine_count)
        .map(|c| c.to_string())
        .collect();

    let window_start = rng.gen_range(15..=30);
    let window_end = rng.gen_range(31..=60);

    Restaurant {
        image: format!("https://images.savor.example/restaurants/{}.jpg", id),
        name: format!("{} {}", adjective, kind),
        description: RESTAURANT_BLURBS.choose(rng).unwrap().to_string(),
        cuisine,
        rating: (rng.gen_range(3.0..=5.0) * 10.0_f64).round() / 10.0,
        review_count: rng.gen_range(10..=500),
        delivery_time: format!("{}-{} min", window_start, window_end),
        delivery_fee: gen_price(rng, 0.0, 5.99),
        minimum_order: *[10.0, 15.0, 20.0, 25.0].choose(rng).unwrap(),
        address: format!("{} {}", rng.gen_range(100..=9999), STREETS.choose(rng).unwrap()),
        is_open: rng.gen_bool(0.85),
        id,
    }
}

fn gen_menu_item(rng: &mut StdRng, restaurant_id: &str) -> MenuItem {
    let category_idx = rng.gen_range(0..MENU_CATEGORIES.len());
    let id = gen_id(rng);

    MenuItem {
        image: format!("https://images.savor.example/dishes/{}.jpg", id),
        id,
        restaurant_id: restaurant_id.to_string(),
        name: DISHES[category_idx].choose(rng).unwrap().to_string(),
        description: DISH_BLURBS.choose(rng).unwrap().to_string(),
        price: gen_price(rng, 5.99, 29.99),
        category: MENU_CATEGORIES[category_idx].to_string(),
        is_popular: rng.gen_bool(0.3),
        is_available: rng.gen_bool(0.95),
    }
}

fn gen_user(rng: &mut StdRng, name: &str) -> User {
    let id = gen_id(rng);
    let handle = name.to_lowercase().replace(' ', ".");

    User {
        avatar: format!("https://images.savor.example/avatars/{}.jpg", id),
        id,
        name: name.to_string(),
        email: format!("{}@example.com", handle),
        phone: format!("(555) {:03}-{:04}", rng.gen_range(100..=999), rng.gen_range(0..=9999)),
        address: format!("{} {}", rng.gen_range(100..=9999), STREETS.choose(rng).unwrap()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
