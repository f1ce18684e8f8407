//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::store::Profile;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of profiles (#, Name, Address, Username).
///
/// Passwords are never printed; positions are 1-based to match the
/// `edit`/`delete`/`connect` arguments.
pub fn print_profiles_table(profiles: &[Profile]) {
    if profiles.is_empty() {
        info("No profiles stored yet.");
        tip("Run `rdvault add` to store your first connection.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Address", "Username"]);

    for (i, p) in profiles.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            p.name.clone(),
            p.address.clone(),
            p.username.clone(),
        ]);
    }

    println!("{table}");
}
