#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::forms::TemplateForm;
use novacore_admin::shell::Route;
use novacore_admin::views::TemplatesView;

use crate::args::{TemplateFields, TemplatePatch, TemplatesCmd};
use crate::context::{CliError, Ctx, check};
use crate::io::read_opt_value;

pub async fn handle(ctx: &Ctx, cmd: TemplatesCmd) -> Result<(), CliError> {
    let mut view = TemplatesView::new(ctx.cms(), ctx.msgs);
    match cmd {
        TemplatesCmd::List => view.load().await,
        TemplatesCmd::Show { id } => view.select(id).await,
        TemplatesCmd::Create(fields) => check(view.create(&template_form(fields)?).await)?,
        TemplatesCmd::Update { id, patch } => {
            view.select(id).await;
            if let Some(mut form) = view.selected().map(TemplateForm::from_template) {
                apply_patch(&mut form, patch)?;
                check(view.update(id, &form).await)?;
            }
        }
        TemplatesCmd::Delete { id } => check(view.delete(id).await)?,
    }

    let body = view.render()?;
    match view.selected() {
        Some(template) => ctx.emit(Route::CmsTemplates, &view.state, &body, Some(template)),
        None => ctx.emit(Route::CmsTemplates, &view.state, &body, view.templates()),
    }
}

fn template_form(fields: TemplateFields) -> Result<TemplateForm, CliError> {
    Ok(TemplateForm {
        name: fields.name,
        description: fields.description,
        content: read_opt_value(fields.content, fields.content_file)?.unwrap_or_default(),
        is_active: true,
    })
}

fn apply_patch(form: &mut TemplateForm, patch: TemplatePatch) -> Result<(), CliError> {
    if let Some(name) = patch.name {
        form.name = name;
    }
    if let Some(description) = patch.description {
        form.description = description;
    }
    if let Some(content) = read_opt_value(patch.content, patch.content_file)? {
        form.content = content;
    }
    if let Some(is_active) = patch.active {
        form.is_active = is_active;
    }
    Ok(())
}
