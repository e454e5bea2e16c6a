#![deny(clippy::all, clippy::pedantic)]

use novacore_admin::forms::{SettingsEditor, Widget};
use novacore_admin::shell::Route;
use novacore_admin::views::SettingsView;

use crate::args::SettingsCmd;
use crate::context::{CliError, Ctx};

pub async fn handle(ctx: &Ctx, cmd: SettingsCmd) -> Result<(), CliError> {
    let mut view = SettingsView::new(ctx.dashboard(), ctx.msgs);
    view.load().await;

    match cmd {
        SettingsCmd::Show => {}
        SettingsCmd::Set { key, value } => {
            if let Some(editor) = view.editor_mut() {
                let index = find(editor, &key)?;
                editor.edit(index, value);
                view.save().await;
            }
        }
        SettingsCmd::Toggle { key } => {
            if let Some(editor) = view.editor_mut() {
                let index = find(editor, &key)?;
                if editor.widget(index) != Some(Widget::Toggle) {
                    return Err(CliError::InvalidInput(format!(
                        "setting `{key}` is not a boolean"
                    )));
                }
                editor.toggle(index);
                view.save().await;
            }
        }
    }

    let body = view.render()?;
    let rows = view.editor().map(SettingsEditor::rows);
    ctx.emit(Route::Settings, &view.state, &body, rows)
}

fn find(editor: &SettingsEditor, key: &str) -> Result<usize, CliError> {
    editor
        .find(key)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown setting `{key}`")))
}
