//! Keyword-based query categorization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad category of a price query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Grocery,
    Product,
    Electronics,
    Travel,
    RealEstateRent,
    RealEstateSale,
    Healthcare,
    ServicesGeneral,
    Education,
    Transport,
    Fuel,
    Other,
}

/// Checked in order; the first category with a matching keyword wins
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Grocery,
        &["grocery", "vegetable", "vegetables", "fruit", "bigbasket", "jiomart"],
    ),
    (
        Category::Product,
        &["price", "price of", "buy", "amazon", "flipkart", "product"],
    ),
    (Category::Electronics, &["iphone", "mobile", "laptop", "electronics"]),
    (Category::Travel, &["flight", "hotel", "itinerary", "train", "bus"]),
    (Category::RealEstateRent, &["rent", "2bhk", "1bhk", "rent in"]),
    (Category::RealEstateSale, &["buy apartment", "sell", "for sale"]),
    (
        Category::Healthcare,
        &["hospital", "surgery", "knee", "practo", "doctor"],
    ),
    (
        Category::ServicesGeneral,
        &["plumbing", "carpenter", "service charge", "fee"],
    ),
    (Category::Education, &["tuition", "course", "fee"]),
    (Category::Transport, &["taxi", "cab", "ola", "uber", "fare"]),
    (Category::Fuel, &["petrol", "diesel", "fuel price"]),
];

impl Category {
    /// Guess a category from substring keywords in the query
    pub fn guess(query: &str) -> Self {
        let query = query.to_lowercase();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| query.contains(kw)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Grocery => "grocery",
            Category::Product => "product",
            Category::Electronics => "electronics",
            Category::Travel => "travel",
            Category::RealEstateRent => "real_estate_rent",
            Category::RealEstateSale => "real_estate_sale",
            Category::Healthcare => "healthcare",
            Category::ServicesGeneral => "services_general",
            Category::Education => "education",
            Category::Transport => "transport",
            Category::Fuel => "fuel",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
