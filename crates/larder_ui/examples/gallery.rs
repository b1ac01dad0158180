//! Contract Gallery Demo
//!
//! Builds one configuration of every component in the catalog and logs the
//! resolved derived fields, standing in for the host framework that would
//! normally render them.
//!
//! Run with: cargo run -p larder_ui --example gallery

use larder_ui::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> larder_ui::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // The host framework mints handles for rendered content; raw ids stand
    // in for its node arena here.
    let box_icon = NodeHandle::from_raw(1);
    let pencil_icon = NodeHandle::from_raw(2);
    let item_summary = NodeHandle::from_raw(3);
    let invite_button = NodeHandle::from_raw(4);

    let app = AppHost::new("app.example.com");

    let save = ui::button("Save Changes")
        .variant(ButtonVariant::Primary)
        .on_click(|| tracing::info!("save pressed"))
        .build();
    tracing::info!(label = save.label(), interactive = save.is_interactive(), "button");
    save.press();

    let edit = ui::icon_button(pencil_icon, "Edit item")
        .variant(ButtonVariant::Secondary)
        .build()?;
    tracing::info!(accessible_label = edit.accessible_label(), "icon button");

    let added = ui::alert(AlertSeverity::Success, "Milk has been added to your inventory")
        .title("Item Added")
        .dismissible()
        .on_dismiss(|| tracing::info!("alert dismissed"))
        .build()?;
    added.dismiss();

    let status = ui::badge("Active").variant(BadgeVariant::Success).build();
    tracing::info!(content = ?status.content(), "badge");

    let empty = ui::empty_state("No Inventory Items")
        .icon(box_icon)
        .description("Add your first item to get started.")
        .action(EmptyStateAction::new("Add Item", || {
            tracing::info!("add item")
        }))
        .build();
    empty.action().expect("configured above").trigger();

    let quantity = ui::input()
        .input_type(InputType::Number)
        .label("Quantity")
        .help_text("Minimum quantity is 1")
        .error("Required field")
        .build();
    tracing::info!(state = ?quantity.validation_state(), "quantity input");

    let notes = ui::textarea().label("Notes").rows(4).max_length(500).build();
    tracing::info!(rows = notes.rows(), "notes textarea");

    let location = ui::select()
        .label("Storage Location")
        .placeholder("Select location...")
        .option(SelectOption::new("pantry", "Pantry"))
        .option(SelectOption::new("fridge", "Fridge"))
        .option(SelectOption::new("freezer", "Freezer").disabled())
        .on_change(|value: &&str| tracing::info!(value = %value, "location chosen"))
        .build();
    location.choose(&"pantry");
    location.choose(&"freezer");

    let row = ui::card(item_summary)
        .interactive()
        .on_click(|| tracing::info!("open item"))
        .build();
    row.press();

    let busy = ui::loading_spinner()
        .size(SpinnerSize::ExtraLarge)
        .center()
        .label("Loading inventory...")
        .build();
    tracing::info!(label = busy.label(), "spinner");

    let docs = ui::link("https://docs.example.org/larder", "View Documentation").build();
    tracing::info!(
        external = docs.is_external(&app),
        icon = docs.shows_external_icon(&app),
        "docs link"
    );

    let nav = ui::tab_navigation("inventory")
        .tab(Tab::new("inventory", "Inventory").icon(box_icon))
        .tab(Tab::new("shopping", "Shopping List").badge(5))
        .tab(Tab::new("members", "Members").disabled())
        .on_change(|id: &str| tracing::info!(id, "tab selected"))
        .build()?;
    nav.select("shopping");
    nav.select("members");

    let header = ui::page_header("Family Members")
        .description("Invite family members to collaborate.")
        .breadcrumb(Breadcrumb::new("Dashboard").href("/dashboard"))
        .breadcrumb(Breadcrumb::new("Settings").href("/settings"))
        .breadcrumb(Breadcrumb::new("Members"))
        .action(invite_button)
        .build();
    tracing::info!(title = header.title(), crumbs = header.breadcrumbs().len(), "page header");

    Ok(())
}
