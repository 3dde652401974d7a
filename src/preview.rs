use crate::tree::{Entry, Tree};
use colored::Colorize;
use std::path::Path;

/// Print one level of the tree with a nice ASCII style.
fn print_entries(tree: &Tree, prefix: &str) {
    let len = tree.0.len();

    for (i, (name, entry)) in tree.0.iter().enumerate() {
        let is_last = i == len - 1;

        let connector = if is_last {
            "└── ".yellow()
        } else {
            "├── ".yellow()
        };
        let label = match entry {
            Entry::File(_) => name.green(),
            Entry::Dir(_) => name.blue(),
        };
        println!("{}{}{}", prefix.yellow(), connector, label);

        if let Entry::Dir(children) = entry {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };

            print_entries(children, &child_prefix);
        }
    }
}

/// Renders the tree a build would create under `destination`, without
/// touching the filesystem.
pub fn preview_as_tree(tree: &Tree, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    println!("{}", root_name.blue());

    print_entries(tree, "");
}
