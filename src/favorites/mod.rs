// Favorites module - persisted list of words the user has starred

mod guard;
mod store;

pub use guard::ToggleTicket;
pub use store::{FavoriteWord, FavoritesError, FavoritesStore};
