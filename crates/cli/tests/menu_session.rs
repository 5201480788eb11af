//! Scripted end-to-end menu sessions over in-memory buffers.

use stockroom_auth::StaticCredentials;
use stockroom_cli::{menu, Console, Controller, SessionState};

/// Runs a full session and returns the controller plus everything printed.
fn session(script: &str) -> (Controller, String) {
    session_with(script, None, 5)
}

fn session_with(script: &str, username: Option<&str>, threshold: u32) -> (Controller, String) {
    let mut controller = Controller::new(StaticCredentials, threshold);
    let mut console = Console::new(script.as_bytes(), Vec::new());
    menu::run(&mut controller, &mut console, username.map(String::from))
        .expect("in-memory session should not fail");
    let output = String::from_utf8(console.into_output()).unwrap();
    (controller, output)
}

#[test]
fn invalid_login_ends_program() {
    let (controller, out) = session("admin\nnope\n1\n");
    assert!(out.contains("Invalid login credentials."));
    assert!(!out.contains("Logged in as"));
    assert_eq!(controller.state(), &SessionState::Unauthenticated);
}

#[test]
fn admin_full_flow() {
    let script = "\
admin
admin123
2
P1
Widget
Tools
9.99
3
7
6
P1
-5
6
P1
2
1
8
";
    let (controller, out) = session(script);

    assert!(out.contains("Welcome, admin!"));
    assert!(out.contains("Logged in as Admin"));
    assert!(out.contains("7. Check Low Stock"));
    assert!(out.contains("Product Widget added successfully."));
    assert!(out.contains("Low stock alert:\nWidget (ID: P1) has low stock: 3"));
    assert!(out.contains("Insufficient stock to reduce."));
    assert!(out.contains("Stock for Widget updated. New stock: 5"));
    assert!(out.contains("ID: P1, Name: Widget, Category: Tools, Price: 9.99, Stock: 5"));
    assert!(out.trim_end().ends_with("Logging out..."));

    assert!(controller.is_terminated());
    assert_eq!(controller.catalog().get("P1").unwrap().stock_quantity, 5);
}

#[test]
fn user_menu_rejects_admin_choices() {
    let script = "user\nuser123\n1\n2\n6\n7\n5\nwid\n\n8\n";
    let (controller, out) = session(script);

    assert!(out.contains("Logged in as User"));
    assert!(out.contains("1. View Products\n5. Search Products\n8. Logout\n"));
    assert!(!out.contains("2. Add Product"));
    assert!(out.contains("No products available."));
    // Admin-only numbers are not on the user's menu, so they read as unknown.
    assert_eq!(out.matches("Invalid choice, try again.").count(), 3);
    assert!(!out.contains("Access Denied"));
    // Unoffered choices never show field prompts.
    assert!(!out.contains("Enter product ID"));
    assert!(out.contains("No matching products found."));
    assert!(controller.catalog().is_empty());
    assert!(controller.is_terminated());
}

#[test]
fn invalid_choices_reprompt() {
    let (controller, out) = session("admin\nadmin123\n9\nhello\n\n8\n");
    assert_eq!(out.matches("Invalid choice, try again.").count(), 3);
    assert_eq!(out.matches("Logged in as Admin").count(), 4);
    assert!(controller.is_terminated());
}

#[test]
fn parse_errors_do_not_touch_catalog() {
    let script = "admin\nadmin123\n2\nP1\nWidget\nTools\nabc\n3\n1\n8\n";
    let (controller, out) = session(script);
    assert!(out.contains("Invalid price: 'abc' is not a valid number."));
    assert!(out.contains("No products available."));
    assert!(controller.catalog().is_empty());
}

#[test]
fn edit_delete_and_not_found() {
    let script = "\
admin
admin123
2
P1
Widget
Tools
9.99
3
3
P1


0
0
3
P9




4
P9
1
4
P1
1
8
";
    let (_, out) = session(script);
    assert!(out.contains("Product P1 updated."));
    assert!(out.contains("ID: P1, Name: Widget, Category: Tools, Price: 0.0, Stock: 0"));
    assert_eq!(out.matches("Product not found.").count(), 2);
    assert!(out.contains("Product P1 deleted."));
    assert!(out.contains("No products available."));
}

#[test]
fn search_without_filters_finds_nothing() {
    let script = "admin\nadmin123\n2\nP1\nWidget\nTools\n1\n1\n5\n\n\n5\n\ntool\n8\n";
    let (_, out) = session(script);
    assert!(out.contains("No matching products found."));
    assert!(out.contains("ID: P1, Name: Widget"));
}

#[test]
fn end_of_input_logs_out() {
    let (controller, out) = session("admin\nadmin123\n2\nP1\n");
    assert!(controller.is_terminated());
    assert!(controller.catalog().is_empty());
    assert!(!out.contains("Logging out..."));
}

#[test]
fn preset_username_and_threshold() {
    let script = "admin123\n2\nP1\nWidget\nTools\n1\n8\n7\n8\n";
    let (_, out) = session_with(script, Some("admin"), 10);
    assert!(!out.contains("Username: "));
    assert!(out.contains("Welcome, admin!"));
    assert!(out.contains("Widget (ID: P1) has low stock: 8"));
}

#[test]
fn user_admin_choice_is_invalid() {
    let (controller, out) = session("user\nuser123\n2\n8\n");
    assert!(out.contains("Invalid choice, try again."));
    assert!(!out.contains("Enter product ID: "));
    assert!(controller.catalog().is_empty());
    assert!(controller.is_terminated());
}
