//! Template category system: the closed set of starter-app archetypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed starter-app archetypes.
///
/// The catalog dispatch over this enum is an exhaustive `match`, so adding
/// a category is a compile-time exhaustiveness concern rather than an
/// unchecked key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    /// Food-service app with menu, ordering, and cart.
    Restaurant,
    /// Service-business app with booking and contact flows.
    Business,
    /// Shop app with product catalog and checkout.
    Ecommerce,
    /// Fitness app with workouts and progress tracking.
    Fitness,
    /// Listing/search app for browsing entries.
    Directory,
}

impl TemplateCategory {
    /// All categories in a fixed order.
    pub const ALL: [Self; 5] = [
        Self::Restaurant,
        Self::Business,
        Self::Ecommerce,
        Self::Fitness,
        Self::Directory,
    ];

    /// Category used when a request scores zero against every keyword set.
    pub const DEFAULT: Self = Self::Restaurant;

    /// The lowercase identifier used in classification and serialization.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Business => "business",
            Self::Ecommerce => "ecommerce",
            Self::Fitness => "fitness",
            Self::Directory => "directory",
        }
    }

    /// Human-readable template name shown to the user.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant App",
            Self::Business => "Business/Service App",
            Self::Ecommerce => "E-commerce App",
            Self::Fitness => "Fitness App",
            Self::Directory => "Directory App",
        }
    }

    /// Keyword stems owned by this category for local intent scoring.
    ///
    /// A request's score for the category is the count of stems present as
    /// substrings of the lowercased input.
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Restaurant => &[
                "restaurant", "food", "menu", "order", "pizza", "cafe", "dine", "bar", "delivery",
            ],
            Self::Business => &[
                "business",
                "service",
                "company",
                "clinic",
                "office",
                "professional",
                "consult",
                "corporate",
            ],
            Self::Ecommerce => &[
                "shop", "store", "buy", "sell", "product", "ecommerce", "cart", "checkout",
                "payment",
            ],
            Self::Fitness => &[
                "fitness", "gym", "workout", "health", "wellness", "exercise", "training", "yoga",
            ],
            Self::Directory => &[
                "directory",
                "listing",
                "search",
                "find",
                "browse",
                "marketplace",
                "catalog",
            ],
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TemplateCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restaurant" => Ok(Self::Restaurant),
            "business" => Ok(Self::Business),
            "ecommerce" => Ok(Self::Ecommerce),
            "fitness" => Ok(Self::Fitness),
            "directory" => Ok(Self::Directory),
            other => anyhow::bail!(
                "Unknown template category '{other}'. Expected one of: restaurant, business, ecommerce, fitness, directory"
            ),
        }
    }
}
