mod app;
pub use app::App;

mod auth_modal;
pub use auth_modal::AuthModal;

mod draft_card;
pub use draft_card::DraftCard;

mod draft_detail_modal;
pub use draft_detail_modal::DraftDetailModal;

mod filter_bar;
pub use filter_bar::FilterBar;
