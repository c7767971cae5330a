//! # Render Module
//!
//! Text layout for the summary block and help screen.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       Total Per Person       │
//! │            $30.00            │
//! └──────────────────────────────┘
//!   Bill     100
//!   Split    4
//!   Tip      $20.00
//!            20 %
//! ```

use crate::state::{ConfigState, FormSnapshot};

const HEADER_WIDTH: usize = 30;

/// Help text for the `help` command.
pub const HELP: &str = "\
Commands:
  bill <amount>   set the bill (empty clears it)
  split + | -     add or remove a person
  tip <0.0-1.0>   move the tip slider
  pct <0-100>     move the slider to the nearest stop for a percentage
  show            print the summary
  json            print the form as JSON
  reset           clear the form
  help            this text
  quit            leave";

/// First line printed when a session starts.
pub const WELCOME: &str = "Tip calculator. Type 'help' for commands.";

/// Renders the summary for one snapshot.
///
/// The split and tip rows only appear once a bill is entered, like the
/// controls they describe.
pub fn render_summary(snapshot: &FormSnapshot, config: &ConfigState) -> String {
    let total = config.format_currency(snapshot.total_per_person);
    let border = "─".repeat(HEADER_WIDTH);

    let mut out = String::new();
    out.push_str(&format!("┌{border}┐\n"));
    out.push_str(&format!(
        "│{:^width$}│\n",
        "Total Per Person",
        width = HEADER_WIDTH
    ));
    out.push_str(&format!("│{:^width$}│\n", total, width = HEADER_WIDTH));
    out.push_str(&format!("└{border}┘"));

    if snapshot.bill_text.is_empty() {
        out.push_str("\n  Enter Bill");
        return out;
    }

    out.push_str(&format!("\n  Bill     {}", snapshot.bill_text));
    out.push_str(&format!("\n  Split    {}", snapshot.split_count));
    out.push_str(&format!(
        "\n  Tip      {}",
        config.format_currency(snapshot.tip_amount)
    ));
    out.push_str(&format!("\n           {} %", snapshot.tip_percentage));
    out
}
