//! # TUI Components
//!
//! Every piece of the chat screen lives here.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields, rebuilt every frame:
//! - `Header`: app name, readiness, "↓ New"
//! - `MessageBubble`: one chat message
//! - `TypingIndicator`: animated row while a reply is pending
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep state across frames in the parent `TuiState`:
//! - `InputBox`: the composer
//! - `MessageList` / `MessageListState`: scrollable conversation with layout caching
//! - `StarterGrid` / `StarterState`: canned prompts with click hit testing
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs               (this file)
//! ├── header.rs            (top status line)
//! ├── message.rs           (single message bubble)
//! ├── message_list.rs      (scrollable message container)
//! ├── typing_indicator.rs  (pending-reply animation)
//! ├── starters.rs          (starter suggestions)
//! └── input_box/           (composer)
//! ```

mod header;
pub use header::Header;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};
pub mod message;
pub mod message_list;
pub use message_list::{MessageList, MessageListState};
pub mod starters;
pub use starters::{STARTERS, StarterGrid, StarterState};
pub mod typing_indicator;
