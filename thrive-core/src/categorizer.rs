//! Deterministic purchase categorization from merchant metadata.
//!
//! Three keyword tables are tried in order: the merchant's free-text
//! category, the merchant name (well-known brands), and finally the
//! purchase description. Substring matching on lowercased text covers
//! the sandbox data without any model calls.

use crate::finance::{CategorizedPurchase, Merchant, Purchase, TransactionCategory};

/// Keywords matched against the merchant's free-text category.
/// Blocks are in priority order; the first block with a hit wins, so
/// overlapping keywords resolve to the earlier category.
const CATEGORY_KEYWORDS: &[(TransactionCategory, &[&str])] = &[
    (
        TransactionCategory::Food,
        &[
            "food", "restaurant", "dining", "cafe", "coffee", "bakery", "grocery",
            "supermarket", "meal", "fast food", "pizzeria", "deli",
        ],
    ),
    (
        TransactionCategory::Shopping,
        &[
            "shopping", "retail", "clothing", "apparel", "department store", "electronics",
            "mall", "boutique", "merchandise",
        ],
    ),
    (
        TransactionCategory::Entertainment,
        &[
            "entertainment", "movie", "cinema", "theater", "game", "arcade", "music",
            "concert", "streaming",
        ],
    ),
    (
        TransactionCategory::Travel,
        &[
            "travel", "hotel", "airline", "flight", "lodging", "resort", "cruise",
            "vacation",
        ],
    ),
    (
        TransactionCategory::Transportation,
        &[
            "transportation", "transit", "gas", "fuel", "automotive", "parking", "taxi",
            "rideshare", "car service",
        ],
    ),
    (
        TransactionCategory::Utilities,
        &[
            "utilities", "utility", "electric", "water", "internet", "telecom", "phone",
            "cable", "energy",
        ],
    ),
    (
        TransactionCategory::Health,
        &[
            "health", "medical", "pharmacy", "doctor", "dental", "clinic", "hospital",
            "fitness", "gym", "wellness",
        ],
    ),
    (
        TransactionCategory::Education,
        &[
            "education", "school", "university", "college", "tuition", "bookstore",
            "tutoring",
        ],
    ),
    (
        TransactionCategory::Personal,
        &["personal", "beauty", "salon", "spa", "barber", "cosmetics", "grooming"],
    ),
    (
        TransactionCategory::Home,
        &["home", "furniture", "hardware", "garden", "appliance", "improvement", "decor"],
    ),
];

/// Well-known merchant names, tried when the category string gave no
/// match. Food precedes Transportation so "uber eats" wins over
/// "uber".
const NAME_KEYWORDS: &[(TransactionCategory, &[&str])] = &[
    (
        TransactionCategory::Food,
        &[
            "starbucks", "mcdonald", "chipotle", "subway", "dunkin", "taco bell",
            "panera", "domino", "wendy", "chick-fil-a", "whole foods", "trader joe",
            "kroger", "safeway", "aldi", "doordash", "grubhub", "uber eats", "instacart",
        ],
    ),
    (
        TransactionCategory::Shopping,
        &[
            "amazon", "walmart", "target", "costco", "best buy", "ebay", "etsy", "macy",
            "nordstrom", "old navy", "nike",
        ],
    ),
    (
        TransactionCategory::Entertainment,
        &[
            "netflix", "spotify", "hulu", "disney", "hbo", "steam", "playstation",
            "xbox", "amc", "ticketmaster", "regal",
        ],
    ),
    (
        TransactionCategory::Travel,
        &[
            "airbnb", "expedia", "marriott", "hilton", "hyatt", "delta air",
            "united airlines", "southwest", "booking.com", "vrbo",
        ],
    ),
    (
        TransactionCategory::Transportation,
        &["uber", "lyft", "shell", "chevron", "exxon", "mobil", "amtrak", "greyhound"],
    ),
    (
        TransactionCategory::Utilities,
        &[
            "verizon", "at&t", "t-mobile", "comcast", "xfinity", "spectrum",
            "duke energy", "pg&e",
        ],
    ),
    (
        TransactionCategory::Health,
        &[
            "cvs", "walgreens", "rite aid", "kaiser", "planet fitness",
            "24 hour fitness", "equinox", "peloton",
        ],
    ),
    (
        TransactionCategory::Education,
        &["coursera", "udemy", "chegg", "pearson", "kaplan"],
    ),
    (
        TransactionCategory::Personal,
        &["sephora", "ulta", "supercuts", "great clips"],
    ),
    (
        TransactionCategory::Home,
        &["home depot", "lowe's", "ikea", "wayfair", "bed bath", "ace hardware"],
    ),
];

/// Last-resort keywords over the purchase description. Smaller than
/// the other tables; also the only tier that can resolve Income.
const DESCRIPTION_KEYWORDS: &[(TransactionCategory, &[&str])] = &[
    (
        TransactionCategory::Food,
        &["restaurant", "coffee", "pizza", "burger", "grocery", "lunch", "dinner", "takeout"],
    ),
    (
        TransactionCategory::Entertainment,
        &["movie", "concert", "tickets"],
    ),
    (TransactionCategory::Travel, &["flight", "hotel", "airfare"]),
    (
        TransactionCategory::Transportation,
        &["gas station", "fuel", "parking", "toll", "ride"],
    ),
    (
        TransactionCategory::Utilities,
        &["electric bill", "water bill", "internet", "phone bill"],
    ),
    (
        TransactionCategory::Health,
        &["pharmacy", "gym", "fitness", "copay", "doctor"],
    ),
    (TransactionCategory::Education, &["tuition", "textbook"]),
    (TransactionCategory::Home, &["furniture", "hardware"]),
    (
        TransactionCategory::Income,
        &["payroll", "salary", "paycheck", "direct deposit"],
    ),
];

/// Resolve a purchase to exactly one category.
///
/// Priority: merchant category, then merchant name, then purchase
/// description, then `Other`. Absent or empty fields never match and
/// never fail; the merchant name is carried through when present.
pub fn categorize(purchase: &Purchase, merchant: Option<&Merchant>) -> CategorizedPurchase {
    let mut category = None;

    if let Some(m) = merchant {
        if !m.category.is_empty() {
            category = match_keywords(&m.category.to_lowercase(), CATEGORY_KEYWORDS);
        }
        if category.is_none() && !m.name.is_empty() {
            category = match_keywords(&m.name.to_lowercase(), NAME_KEYWORDS);
        }
    }

    if category.is_none() && !purchase.description.is_empty() {
        category = match_keywords(&purchase.description.to_lowercase(), DESCRIPTION_KEYWORDS);
    }

    CategorizedPurchase {
        purchase: purchase.clone(),
        category: category.unwrap_or(TransactionCategory::Other),
        merchant_name: merchant.and_then(|m| {
            if m.name.is_empty() {
                None
            } else {
                Some(m.name.clone())
            }
        }),
    }
}

/// First category block with any keyword contained in `text`
fn match_keywords(
    text: &str,
    table: &[(TransactionCategory, &[&str])],
) -> Option<TransactionCategory> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
}
