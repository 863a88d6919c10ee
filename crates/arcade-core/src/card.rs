//! Card projection of a single game

use crate::catalog::GameRecord;
use crate::prefs::Ratings;

pub const STAR_COUNT: usize = 5;

/// Which destination a card carries. Fixed by the caller, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    /// Grid and search cards link to the game's page
    Link,
    /// The single-game player embeds the game itself
    Embed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Link(String),
    Embed(String),
}

impl Destination {
    pub fn href(&self) -> &str {
        match self {
            Destination::Link(url) | Destination::Embed(url) => url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Featured,
    Popular,
}

impl Badge {
    pub fn class(self) -> &'static str {
        match self {
            Badge::Featured => "icon featured",
            Badge::Popular => "icon popular",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Badge::Featured => "★",
            Badge::Popular => "🔥",
        }
    }
}

/// Square image edge length in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSize {
    Large,
    Medium,
    Small,
}

impl CardSize {
    pub fn pixels(self) -> u32 {
        match self {
            CardSize::Large => 300,
            CardSize::Medium => 200,
            CardSize::Small => 150,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPriority {
    High,
    Low,
}

impl FetchPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchPriority::High => "high",
            FetchPriority::Low => "low",
        }
    }
}

/// Everything needed to draw one card. Recomputed on every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    pub id: String,
    pub title: String,
    /// Lowercased name, exposed as `data-name`
    pub search_name: String,
    pub category: String,
    pub image: String,
    pub alt: String,
    pub stars: [bool; STAR_COUNT],
    pub badges: Vec<Badge>,
    pub size: CardSize,
    pub priority: FetchPriority,
    pub destination: Destination,
}

impl DisplayUnit {
    pub fn filled_stars(&self) -> usize {
        self.stars.iter().filter(|filled| **filled).count()
    }

    pub fn is_featured(&self) -> bool {
        self.badges.contains(&Badge::Featured)
    }

    pub fn is_popular(&self) -> bool {
        self.badges.contains(&Badge::Popular)
    }
}

/// Star `i` (1-based) is filled iff `i <= rating`. A fractional rating fills
/// no partial star.
pub fn star_flags(rating: f64) -> [bool; STAR_COUNT] {
    std::array::from_fn(|index| (index + 1) as f64 <= rating)
}

/// User rating when present, otherwise the catalog average
pub fn effective_rating(game: &GameRecord, ratings: &Ratings) -> f64 {
    ratings
        .get(&game.id)
        .map(|r| f64::from(r.get()))
        .unwrap_or(game.average_rating)
}

pub fn render_card(game: &GameRecord, ratings: &Ratings, target: CardTarget) -> DisplayUnit {
    let mut badges = Vec::with_capacity(2);
    if game.featured {
        badges.push(Badge::Featured);
    }
    if game.is_popular {
        badges.push(Badge::Popular);
    }

    let size = if game.featured {
        CardSize::Large
    } else if game.is_popular {
        CardSize::Medium
    } else {
        CardSize::Small
    };

    let priority = if game.is_highlighted() {
        FetchPriority::High
    } else {
        FetchPriority::Low
    };

    let destination = match target {
        CardTarget::Link => Destination::Link(game.url.clone()),
        CardTarget::Embed => Destination::Embed(game.game_url.clone()),
    };

    DisplayUnit {
        id: game.id.clone(),
        title: game.name.clone(),
        search_name: game.name.to_lowercase(),
        category: game.category.clone(),
        image: game.image.clone(),
        alt: format!("{} {}", game.name, game.category),
        stars: star_flags(effective_rating(game, ratings)),
        badges,
        size,
        priority,
        destination,
    }
}
