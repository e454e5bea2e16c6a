#![deny(clippy::all, clippy::pedantic)]

use std::collections::HashSet;

use novacore_admin::forms::menu_item::parent_options;
use novacore_admin::forms::{MenuForm, MenuItemForm};
use novacore_admin::shell::Route;
use novacore_admin::views::MenusView;
use novacore_admin::views::tree::ids_in_order;
use novacore_api_types::dashboard::DashboardMenuItem;

use crate::args::{MenuItemFields, MenuItemPatch, MenuItemsCmd, MenusCmd};
use crate::context::{CliError, Ctx, check};

pub async fn handle(ctx: &Ctx, cmd: MenusCmd) -> Result<(), CliError> {
    let mut view = MenusView::new(ctx.dashboard(), ctx.msgs);
    match cmd {
        MenusCmd::List { filter, search } => {
            view.set_filter(filter.into());
            if let Some(term) = search {
                view.set_search(term);
            }
            view.load().await;
        }
        MenusCmd::Show { id } => {
            view.load().await;
            view.select(id).await;
        }
        MenusCmd::Create { name, description } => {
            let form = MenuForm { name, description };
            check(view.create_menu(&form).await)?;
        }
        MenusCmd::Update {
            id,
            name,
            description,
        } => {
            let current = if name.is_some() && description.is_some() {
                Some(MenuForm::default())
            } else {
                view.load().await;
                view.visible_menus()
                    .into_iter()
                    .find(|menu| menu.id == id)
                    .map(MenuForm::from_menu)
            };
            match current {
                Some(mut form) => {
                    if let Some(name) = name {
                        form.name = name;
                    }
                    if let Some(description) = description {
                        form.description = description;
                    }
                    check(view.update_menu(id, &form).await)?;
                }
                None if view.state.has_error() => {}
                None => return Err(CliError::InvalidInput(format!("menu {id} not found"))),
            }
        }
        MenusCmd::Delete { id } => check(view.delete_menu(id).await)?,
        MenusCmd::Toggle { id } => check(view.toggle_menu(id).await)?,
        MenusCmd::Items(items) => return handle_items(ctx, view, items.action).await,
    }

    let body = view.render()?;
    match view.selected() {
        Some(detail) => ctx.emit(Route::Menus, &view.state, &body, Some(detail)),
        None => ctx.emit(Route::Menus, &view.state, &body, Some(&view.visible_menus())),
    }
}

async fn handle_items(ctx: &Ctx, mut view: MenusView, cmd: MenuItemsCmd) -> Result<(), CliError> {
    match cmd {
        MenuItemsCmd::Add { menu_id, fields } => {
            let form = item_form(fields);
            if form.parent_id.is_some() {
                view.select(menu_id).await;
                ensure_parent(&view, &form, None)?;
            }
            if !view.state.has_error() {
                check(view.add_item(menu_id, &form).await)?;
            }
        }
        MenuItemsCmd::Update {
            menu_id,
            item_id,
            patch,
        } => {
            view.select(menu_id).await;
            let current = view
                .selected()
                .and_then(|detail| find_item(&detail.items, item_id))
                .map(MenuItemForm::from_item);
            match current {
                Some(mut form) => {
                    apply_patch(&mut form, patch);
                    ensure_parent(&view, &form, Some(item_id))?;
                    check(view.update_item(menu_id, item_id, &form).await)?;
                }
                None if view.state.has_error() => {}
                None => {
                    return Err(CliError::InvalidInput(format!(
                        "item {item_id} not found in menu {menu_id}"
                    )));
                }
            }
        }
        MenuItemsCmd::Delete { menu_id, item_id } => {
            check(view.delete_item(menu_id, item_id).await)?;
        }
        MenuItemsCmd::Toggle { menu_id, item_id } => {
            check(view.toggle_item(menu_id, item_id).await)?;
        }
        MenuItemsCmd::Reorder { menu_id, ids } => {
            view.select(menu_id).await;
            if let Some(detail) = view.selected() {
                let mut known: HashSet<i64> = detail.items.iter().map(|item| item.id).collect();
                known.extend(ids_in_order(&detail.items));
                let given: HashSet<i64> = ids.iter().copied().collect();
                if given.len() != ids.len() || !given.is_subset(&known) {
                    return Err(CliError::InvalidInput(format!(
                        "--ids must name items of menu {menu_id}, each once"
                    )));
                }
                check(view.reorder_items(menu_id, ids).await)?;
            }
        }
    }

    let body = view.render()?;
    ctx.emit(Route::Menus, &view.state, &body, view.selected())
}

fn item_form(fields: MenuItemFields) -> MenuItemForm {
    MenuItemForm {
        label: fields.label,
        url: fields.url,
        icon: fields.icon,
        order: fields.order,
        parent_id: fields.parent,
    }
}

fn apply_patch(form: &mut MenuItemForm, patch: MenuItemPatch) {
    if let Some(label) = patch.label {
        form.label = label;
    }
    if let Some(url) = patch.url {
        form.url = url;
    }
    if let Some(icon) = patch.icon {
        form.icon = icon;
    }
    if let Some(order) = patch.order {
        form.order = order;
    }
    if patch.root {
        form.parent_id = None;
    } else if let Some(parent) = patch.parent {
        form.parent_id = Some(parent);
    }
}

fn find_item(items: &[DashboardMenuItem], id: i64) -> Option<&DashboardMenuItem> {
    items.iter().find_map(|item| {
        if item.id == id {
            Some(item)
        } else {
            find_item(item.children.as_deref().unwrap_or_default(), id)
        }
    })
}

/// A parent must be another item of the same menu.
fn ensure_parent(
    view: &MenusView,
    form: &MenuItemForm,
    editing: Option<i64>,
) -> Result<(), CliError> {
    let (Some(parent), Some(detail)) = (form.parent_id, view.selected()) else {
        return Ok(());
    };
    if parent_options(&detail.items, editing)
        .iter()
        .any(|(id, _)| *id == parent)
    {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "item {parent} cannot be the parent here"
        )))
    }
}
