//! Single-game page: embedded player, favorite button and user rating

use crate::card::{render_card, star_flags, CardTarget, DisplayUnit, STAR_COUNT};
use crate::catalog::GameRecord;
use crate::config::SiteConfig;
use crate::prefs::{KeyValueStore, PreferenceStore, Rating};

pub const GAME_NOT_FOUND: &str = "Game not found.";
pub const GAME_LOAD_FAILED: &str = "Failed to load game data. Please try again later.";

pub fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from Favorites"
    } else {
        "Add to Favorites"
    }
}

pub fn fullscreen_label(is_fullscreen: bool) -> &'static str {
    if is_fullscreen {
        "Exit Fullscreen"
    } else {
        "Enter Fullscreen"
    }
}

/// Stars lit while the pointer hovers star `hovered` (1-based)
pub fn preview_stars(hovered: u8) -> [bool; STAR_COUNT] {
    star_flags(f64::from(hovered))
}

/// "4.5" stays "4.5", "4.0" prints as "4"
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{}", rating)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub id: String,
    pub name: String,
    pub page_title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    /// Embed-target unit; its destination is the player URL
    pub player: DisplayUnit,
    pub average_rating: f64,
    pub user_rating: Option<Rating>,
    pub is_favorite: bool,
}

impl GameDetail {
    pub fn build<S: KeyValueStore>(game: &GameRecord, prefs: &PreferenceStore<S>, config: &SiteConfig) -> Self {
        let ratings = prefs.ratings();
        Self {
            id: game.id.clone(),
            name: game.name.clone(),
            page_title: config.page_title(&game.name),
            category: game.category.clone(),
            description: game.description.clone(),
            image: game.image.clone(),
            player: render_card(game, &ratings, CardTarget::Embed),
            average_rating: game.average_rating,
            user_rating: ratings.get(&game.id).copied(),
            is_favorite: prefs.is_favorite(&game.id),
        }
    }

    /// User rating if set, otherwise the catalog average
    pub fn displayed_rating(&self) -> f64 {
        self.user_rating
            .map(|r| f64::from(r.get()))
            .unwrap_or(self.average_rating)
    }

    pub fn category_line(&self) -> String {
        format!(
            "Category: {} | Rating: {}/5",
            self.category,
            format_rating(self.displayed_rating())
        )
    }

    /// Header stars round a fractional rating up, unlike the card rows
    pub fn rating_stars(&self) -> [bool; STAR_COUNT] {
        let rating = self.displayed_rating();
        std::array::from_fn(|index| (index as f64) < rating)
    }

    pub fn user_stars(&self) -> [bool; STAR_COUNT] {
        star_flags(self.user_rating.map(|r| f64::from(r.get())).unwrap_or(0.0))
    }

    pub fn player_url(&self) -> &str {
        self.player.destination.href()
    }

    pub fn favorite_label(&self) -> &'static str {
        favorite_label(self.is_favorite)
    }

    /// Toggle the favorite and refresh the flag from the store
    pub fn toggle_favorite<S: KeyValueStore>(&mut self, prefs: &PreferenceStore<S>) {
        prefs.toggle_favorite(&self.id);
        self.is_favorite = prefs.is_favorite(&self.id);
    }

    /// Store a rating and refresh the displayed values from the store
    pub fn rate<S: KeyValueStore>(&mut self, prefs: &PreferenceStore<S>, rating: Rating) {
        prefs.set_rating(&self.id, rating);
        self.user_rating = prefs.rating(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Destination;
    use crate::prefs::MemoryStore;

    fn snake() -> GameRecord {
        GameRecord {
            id: "snake".into(),
            name: "Snake".into(),
            category: "arcade".into(),
            url: "games/snake.html".into(),
            game_url: "https://play.example/snake".into(),
            average_rating: 3.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_uses_embed_destination() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let detail = GameDetail::build(&snake(), &prefs, &SiteConfig::default());
        assert_eq!(detail.page_title, "Snake - Zontal Arcade");
        assert_eq!(detail.player.destination, Destination::Embed("https://play.example/snake".into()));
        assert_eq!(detail.player_url(), "https://play.example/snake");
        assert_eq!(detail.category_line(), "Category: arcade | Rating: 3.5/5");
        assert_eq!(detail.rating_stars(), [true, true, true, true, false]);
        assert_eq!(detail.user_stars(), [false; 5]);
        assert_eq!(detail.favorite_label(), "Add to Favorites");
    }

    #[test]
    fn test_rate_updates_display() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut detail = GameDetail::build(&snake(), &prefs, &SiteConfig::default());
        detail.rate(&prefs, Rating::new(5).unwrap());
        assert_eq!(detail.displayed_rating(), 5.0);
        assert_eq!(detail.category_line(), "Category: arcade | Rating: 5/5");
        assert_eq!(detail.user_stars(), [true; 5]);

        let rebuilt = GameDetail::build(&snake(), &prefs, &SiteConfig::default());
        assert_eq!(rebuilt.user_rating.map(Rating::get), Some(5));
    }

    #[test]
    fn test_toggle_favorite_label() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut detail = GameDetail::build(&snake(), &prefs, &SiteConfig::default());
        detail.toggle_favorite(&prefs);
        assert!(detail.is_favorite);
        assert_eq!(detail.favorite_label(), "Remove from Favorites");
        detail.toggle_favorite(&prefs);
        assert_eq!(detail.favorite_label(), "Add to Favorites");
        assert!(prefs.favorites().is_empty());
    }

    #[test]
    fn test_labels_and_preview() {
        assert_eq!(fullscreen_label(true), "Exit Fullscreen");
        assert_eq!(fullscreen_label(false), "Enter Fullscreen");
        assert_eq!(preview_stars(2), [true, true, false, false, false]);
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.25), "4.25");
    }
}
