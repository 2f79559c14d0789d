pub mod component;
pub mod render;
pub mod state;
pub mod theme;

pub use component::MacroNewsView;
pub use render::{clamp_summary, render, render_page};
pub use state::NewsState;
pub use theme::{Style, Theme};
