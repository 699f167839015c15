pub mod about;
pub mod admin;
pub mod ads;
pub mod blog;
pub mod book_card;
pub mod book_showcase;
pub mod button;
pub mod chapter_text;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod home;
pub mod intro;
pub mod legal;
pub mod modal;
pub mod offline_banner;
pub mod release_card;
pub mod segmented_control;
pub mod text_input;

pub use about::AboutView;
pub use admin::{AdminPanel, BannerForm, BookForm, ReleaseForm};
pub use ads::{AdSidebar, MobileAdBanner};
pub use blog::{BlogFeed, BlogPost};
pub use book_card::BookCard;
pub use book_showcase::BookShowcase;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use chapter_text::ChapterText;
pub use footer::Footer;
pub use header::Header;
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use home::HomeView;
pub use intro::IntroOverlay;
pub use legal::{PrivacyView, TermsView};
pub use modal::Modal;
pub use offline_banner::OfflineBanner;
pub use release_card::ReleaseCard;
pub use segmented_control::{Segment, SegmentedControl};
pub use text_input::{TextArea, TextInput, TextInputType};
