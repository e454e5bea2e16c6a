#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::api::cms::PageTransition;
use novacore_admin::forms::PageForm;
use novacore_admin::shell::Route;
use novacore_admin::views::PagesView;
use novacore_admin::views::pages::PageAction;
use novacore_api_types::cms::{AddPageBlockRequest, UpdatePageBlockRequest};

use crate::args::{BlocksCmd, PageFields, PagePatch, PagesCmd, VersionsCmd};
use crate::context::{CliError, Ctx, check};
use crate::io::{read_opt_value, read_value};

pub async fn handle(ctx: &Ctx, cmd: PagesCmd) -> Result<(), CliError> {
    let requested = match &cmd {
        PagesCmd::List { page_size, .. } => *page_size,
        _ => None,
    };
    let mut view = PagesView::new(ctx.cms(), ctx.msgs, ctx.page_size(requested));
    match cmd {
        PagesCmd::List {
            page,
            status,
            template_id,
            created_by,
            search,
            ..
        } => {
            view.set_filters(status.map(Into::into), template_id, created_by, search);
            view.set_page(page);
            view.load().await;
        }
        PagesCmd::Show { id, slug } => match (id, slug) {
            (_, Some(slug)) => view.select_by_slug(&slug).await,
            (Some(id), None) => view.select(id).await,
            (None, None) => {
                return Err(CliError::InvalidInput("page id or --slug required".into()));
            }
        },
        PagesCmd::Create(fields) => check(view.create(&page_form(fields)?).await)?,
        PagesCmd::Update { id, patch } => {
            view.select(id).await;
            if let Some(mut form) = view.selected().map(PageForm::from_page) {
                apply_patch(&mut form, patch)?;
                check(view.update(id, &form).await)?;
            }
        }
        PagesCmd::Publish { id } => {
            check(view.apply(id, PageAction::Transition(PageTransition::Publish)).await)?;
        }
        PagesCmd::Unpublish { id } => {
            check(view.apply(id, PageAction::Transition(PageTransition::Unpublish)).await)?;
        }
        PagesCmd::Archive { id } => {
            check(view.apply(id, PageAction::Transition(PageTransition::Archive)).await)?;
        }
        PagesCmd::Duplicate { id } => check(view.apply(id, PageAction::Duplicate).await)?,
        PagesCmd::Delete { id } => check(view.apply(id, PageAction::Delete).await)?,
        PagesCmd::Blocks(blocks) => blocks_cmd(&mut view, blocks.action).await?,
        PagesCmd::Versions(versions) => {
            return versions_cmd(ctx, view, versions.action).await;
        }
    }

    let body = view.render()?;
    match view.selected() {
        Some(page) => ctx.emit(Route::CmsPages, &view.state, &body, Some(page)),
        None => ctx.emit(Route::CmsPages, &view.state, &body, view.result()),
    }
}

async fn blocks_cmd(view: &mut PagesView, cmd: BlocksCmd) -> Result<(), CliError> {
    match cmd {
        BlocksCmd::Add {
            page_id,
            block_type,
            configuration,
            configuration_file,
            order,
        } => {
            let req = AddPageBlockRequest {
                block_type: block_type.into(),
                configuration: read_value(configuration, configuration_file)?,
                order,
            };
            check(view.add_block(page_id, &req).await)
        }
        BlocksCmd::Update {
            page_id,
            block_id,
            block_type,
            configuration,
            configuration_file,
            order,
        } => {
            let req = UpdatePageBlockRequest {
                block_type: block_type.map(Into::into),
                configuration: read_opt_value(configuration, configuration_file)?,
                order,
            };
            check(view.update_block(page_id, block_id, &req).await)
        }
        BlocksCmd::Delete { page_id, block_id } => {
            check(view.delete_block(page_id, block_id).await)
        }
        BlocksCmd::Reorder { page_id, ids } => check(view.reorder_blocks(page_id, ids).await),
    }
}

async fn versions_cmd(ctx: &Ctx, mut view: PagesView, cmd: VersionsCmd) -> Result<(), CliError> {
    match cmd {
        VersionsCmd::List { page_id } => view.select(page_id).await,
        VersionsCmd::Create { page_id } => check(view.create_version(page_id).await)?,
        VersionsCmd::Restore {
            page_id,
            version_id,
        } => check(view.restore_version(page_id, version_id).await)?,
    }

    let body = view.render()?;
    ctx.emit(Route::CmsPages, &view.state, &body, view.versions())
}

fn page_form(fields: PageFields) -> Result<PageForm, CliError> {
    Ok(PageForm {
        title: fields.title,
        slug: fields.slug,
        content: read_opt_value(fields.content, fields.content_file)?.unwrap_or_default(),
        template_id: fields.template_id,
    })
}

fn apply_patch(form: &mut PageForm, patch: PagePatch) -> Result<(), CliError> {
    if let Some(title) = patch.title {
        form.title = title;
    }
    if let Some(slug) = patch.slug {
        form.slug = slug;
    }
    if let Some(content) = read_opt_value(patch.content, patch.content_file)? {
        form.content = content;
    }
    if let Some(template_id) = patch.template_id {
        form.template_id = Some(template_id);
    }
    Ok(())
}
