//! Console output for warnings, errors and catalog listings

use crate::scopes::Scope;
use colored::Colorize;

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

pub fn print_available_scopes(scopes: &[Scope]) {
    println!("{}", available_scopes_line(scopes));
}

pub fn print_available_items(scope: &Scope) {
    println!("{}", available_items_line(scope));
}

/// `Available scopes: components, hooks`, or a notice when the catalog is empty
pub fn available_scopes_line(scopes: &[Scope]) -> String {
    if scopes.is_empty() {
        return "No available scopes".to_string();
    }
    let names: Vec<String> = scopes.iter().map(Scope::dir_name).collect();
    format!("{} {}", "Available scopes:".bold(), names.join(", "))
}

/// `Available components: Button, Card`
pub fn available_items_line(scope: &Scope) -> String {
    let heading = format!("Available {}:", scope.dir_name());
    if scope.items.is_empty() {
        return format!("{} {}", heading.bold(), "(none)".dimmed());
    }
    format!("{} {}", heading.bold(), scope.item_names().join(", "))
}
