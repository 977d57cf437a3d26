mod console;
mod menu;
mod mode;
mod screens;

pub use console::Console;
pub use menu::{run_menu, TITLE};
pub use mode::Mode;
pub use screens::{add_entry, delete_entry, edit_entry, run_mode, view_entries, Screen};

const TOPIC: &str = "Topic";
const WHAT_I_KNOW: &str = "What I Know for Sure";
const QUESTIONS: &str = "Questions That I Have";
const AHA_MOMENTS: &str = "Ah-Ha Moments";
