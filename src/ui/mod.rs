//! UI-Komponenten: Menü, Status-Bar, Kartenansicht, Input-Handling, Dialoge.

pub mod card_view;
pub mod detail;
pub mod input;
/// UI-Layer mit egui
///
/// Menüs und Dialoge erzeugen nur `AppIntent`s, der Zustand wird nie direkt
/// verändert.
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use card_view::paint_cards;
pub use detail::show_detail_window;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
