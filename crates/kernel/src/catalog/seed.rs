//! Built-in placeholder catalog.

use chrono::NaiveDate;

use super::types::{CuisineArt, CuisineEntry, MenuCategory, MenuItem, RestaurantRecord, Review};

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    photo: &str,
    cuisines: &[&str],
    rating: f64,
    review_count: u32,
    delivery_time: &str,
    promotion: Option<&str>,
    is_open: bool,
    has_free_delivery: bool,
) -> RestaurantRecord {
    RestaurantRecord {
        id: id.to_string(),
        name: name.to_string(),
        image_url: unsplash(photo, 500),
        cuisine_types: cuisines.iter().map(|c| c.to_string()).collect(),
        rating,
        review_count: Some(review_count),
        delivery_time: delivery_time.to_string(),
        promotion: promotion.map(str::to_string),
        is_open,
        has_free_delivery,
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w={width}&q=60")
}

/// The eight restaurants of the listing screen.
pub fn restaurants() -> Vec<RestaurantRecord> {
    vec![
        restaurant(
            "1",
            "The Pizza Place",
            "photo-1513104890138-7c749659a591",
            &["Italian", "Pizza"],
            4.5,
            150,
            "25-35 min",
            Some("20% OFF"),
            true,
            false,
        ),
        restaurant(
            "2",
            "Sushi Sensation",
            "photo-1579871494447-9811cf80d66c",
            &["Japanese", "Sushi"],
            4.8,
            220,
            "30-40 min",
            None,
            true,
            true,
        ),
        restaurant(
            "3",
            "Burger Barn",
            "photo-1568901346375-23c9450c58cd",
            &["American", "Burgers"],
            4.2,
            180,
            "20-30 min",
            None,
            false,
            false,
        ),
        restaurant(
            "4",
            "Curry Corner",
            "photo-1585937421612-70a05862ba7e",
            &["Indian", "Curry"],
            4.6,
            190,
            "35-45 min",
            Some("Free Naan"),
            true,
            true,
        ),
        restaurant(
            "5",
            "Taco Town",
            "photo-1565299715199-866c917206bb",
            &["Mexican", "Tacos"],
            4.3,
            120,
            "20-25 min",
            None,
            true,
            false,
        ),
        restaurant(
            "6",
            "Pasta Paradise",
            "photo-1621996346565-e326a22e0024",
            &["Italian", "Pasta"],
            4.7,
            90,
            "30-40 min",
            None,
            true,
            false,
        ),
        restaurant(
            "7",
            "Salad Spot",
            "photo-1540189549336-e6e99c3679fe",
            &["Healthy", "Salads"],
            4.9,
            75,
            "15-25 min",
            Some("10% Student Discount"),
            true,
            true,
        ),
        restaurant(
            "8",
            "Dessert Dreams",
            "photo-1551024601-bec78aea704b",
            &["Desserts", "Cakes", "Ice Cream"],
            4.4,
            110,
            "20-30 min",
            None,
            false,
            false,
        ),
    ]
}

/// Homepage cuisine shortcuts.
pub fn cuisines() -> Vec<CuisineEntry> {
    let icon = |id: &str, name: &str, symbol: &str| CuisineEntry {
        id: id.to_string(),
        name: name.to_string(),
        art: CuisineArt::Icon {
            symbol: symbol.to_string(),
        },
    };
    let image = |id: &str, name: &str, photo: &str| CuisineEntry {
        id: id.to_string(),
        name: name.to_string(),
        art: CuisineArt::Image {
            url: unsplash(photo, 64),
        },
    };

    vec![
        icon("italian", "Italian", "pizza"),
        icon("american", "American", "beef"),
        icon("japanese", "Japanese", "fish"),
        image("mexican", "Mexican", "photo-1599974510931-33a7058baa16"),
        icon("indian", "Indian", "soup"),
        image("chinese", "Chinese", "photo-1585851370419-49548637329a"),
        image("thai", "Thai", "photo-1569864060319-2096e0ae11c2"),
        icon("vegetarian", "Vegetarian", "utensils"),
    ]
}

/// Sample menu served for every restaurant detail page.
pub fn menu() -> Vec<MenuCategory> {
    let item = |id: &str, name: &str, description: &str, price_cents, photo: &str, custom| {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
            image_url: unsplash(photo, 800),
            customization_required: custom,
        }
    };
    let category = |id: &str, name: &str, items| MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        items,
    };

    vec![
        category(
            "cat1",
            "Pizzas",
            vec![item(
                "m1",
                "Margherita Pizza",
                "Classic pizza with fresh mozzarella, tomatoes, and basil.",
                1299,
                "photo-1595854368051-9187ada14987",
                false,
            )],
        ),
        category(
            "cat2",
            "Pastas",
            vec![item(
                "m2",
                "Spaghetti Carbonara",
                "Creamy pasta with pancetta, egg yolk, and Parmesan cheese.",
                1550,
                "photo-1588013273468-31508b965afd",
                true,
            )],
        ),
        category(
            "cat3",
            "Salads & Sides",
            vec![item(
                "m3",
                "Caesar Salad",
                "Crisp romaine lettuce with Caesar dressing, croutons, and Parmesan.",
                975,
                "photo-1550304943-432413685018",
                false,
            )],
        ),
        category(
            "cat4",
            "Desserts",
            vec![item(
                "m4",
                "Tiramisu",
                "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone cream.",
                700,
                "photo-1571115177499-0973e39409b4",
                false,
            )],
        ),
    ]
}

/// Homepage "Featured Restaurants" row.
pub fn featured() -> Vec<String> {
    ["1", "3", "2", "5"].iter().map(|id| id.to_string()).collect()
}

/// Reviews on The Pizza Place, newest first.
pub fn reviews() -> Vec<Review> {
    let review = |id: &str, user_name: &str, rating, text: &str, (y, m, d)| Review {
        id: id.to_string(),
        restaurant_id: "1".to_string(),
        user_name: user_name.to_string(),
        rating,
        text: text.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    };

    vec![
        review(
            "r1",
            "Alice Wonderland",
            5,
            "Absolutely loved the Margherita Pizza! Best in town.",
            (2024, 7, 15),
        ),
        review(
            "r2",
            "Bob The Builder",
            4,
            "Carbonara was delicious, though a bit rich for me. Service was excellent.",
            (2024, 7, 10),
        ),
        review(
            "r3",
            "Charlie Brown",
            4,
            "Great atmosphere and friendly staff. The salad was fresh.",
            (2024, 7, 5),
        ),
    ]
}
