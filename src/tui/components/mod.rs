//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `Header`: Title bar above the list and the detail pane
//! - `Spinner`: Loading indicator
//! - `ChapterDetail`: Placeholder detail pane for a pushed route
//! - `chapter_row`: Builds the lines of one list row
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `ChapterList`: Scrollable, clickable list. `ChapterListState` persists
//!   in `TuiState`; the wrapper is rebuilt every frame.
//!
//! Components receive external data as props, not by reaching into the
//! `App`, which keeps them testable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Title bar)
//! ├── spinner.rs       (Loading indicator)
//! ├── chapter_row.rs   (One row: badge, names, subtitle, arrow)
//! ├── chapter_list.rs  (Scrollable row container)
//! └── detail.rs        (Detail pane)
//! ```

pub mod chapter_list;
pub mod chapter_row;
pub mod detail;
pub mod header;
pub mod spinner;

pub use chapter_list::{ChapterList, ChapterListState};
pub use detail::ChapterDetail;
pub use header::Header;
pub use spinner::Spinner;
