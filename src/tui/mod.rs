pub mod draw;
pub mod event_handlers;
pub mod events;
pub mod input;
pub mod state;
pub mod state_manager;

pub use draw::render_to_buffer;
pub use event_handlers::{handle_key, KeyResult};
pub use events::run;
pub use input::{handle_text_input_key, TextInput};
pub use state::{fruit_options, App, Field, Screen};
pub use state_manager::StateManager;
