mod card_observer;
mod game_card;
mod game_grid;
mod game_page;
mod navbar;
mod search_bar;

pub use game_grid::GameGrid;
pub use game_page::{GamePage, GameStatus};
pub use navbar::Navbar;
pub use search_bar::SearchBar;
