#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::forms::MenuForm;
use novacore_admin::shell::Route;
use novacore_admin::views::{ActiveFilter, CmsMenusView};

use crate::args::CmsMenusCmd;
use crate::context::{CliError, Ctx, check};

pub async fn handle(ctx: &Ctx, cmd: CmsMenusCmd) -> Result<(), CliError> {
    let mut view = CmsMenusView::new(ctx.cms(), ctx.msgs);
    match cmd {
        CmsMenusCmd::List { filter } => {
            view.set_active_filter(ActiveFilter::from(filter).as_query());
            view.load().await;
        }
        CmsMenusCmd::Show { id, name } => match (id, name) {
            (_, Some(name)) => view.select_by_name(&name).await,
            (Some(id), None) => view.select(id).await,
            (None, None) => {
                return Err(CliError::InvalidInput("menu id or --name required".into()));
            }
        },
        CmsMenusCmd::Create { name, description } => {
            check(view.create(&MenuForm { name, description }).await)?;
        }
        CmsMenusCmd::Update {
            id,
            name,
            description,
        } => {
            let current = if name.is_some() && description.is_some() {
                Some(MenuForm::default())
            } else {
                view.select(id).await;
                view.selected().map(MenuForm::from_cms_menu)
            };
            if let Some(mut form) = current {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                check(view.update(id, &form).await)?;
            }
        }
        CmsMenusCmd::Delete { id } => check(view.delete(id).await)?,
    }

    let body = view.render()?;
    match view.selected() {
        Some(menu) => ctx.emit(Route::CmsMenus, &view.state, &body, Some(menu)),
        None => ctx.emit(Route::CmsMenus, &view.state, &body, view.menus()),
    }
}
