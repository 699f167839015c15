mod calendar;
mod model;
mod page;
mod secret_tap;

pub use calendar::{HolidayTheme, THEME_REFRESH_MS};
pub use model::{
    placeholder_cover_url, sort_newest_first, Banner, BannerPosition, Book, ParsePositionError,
    Release, DEFAULT_AUTHOR_PHOTO,
};
pub use page::Page;
pub use secret_tap::SecretTap;
