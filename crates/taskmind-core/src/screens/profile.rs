use crate::cli::ProfileAction;
use crate::profile::{self, Profile};
use crate::render::Renderer;
use crate::store::FileStore;
use crate::theme::Theme;

pub fn run(
    store: &FileStore,
    renderer: &Renderer,
    theme: Theme,
    action: Option<ProfileAction>,
) -> anyhow::Result<()> {
    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => {
            let profile = profile::load_or_default(store);
            renderer.heading("Profile");
            renderer.line(&format!("Name: {}", profile.name));
            let mode = if theme.is_dark() { "on" } else { "off" };
            renderer.line(&format!("Dark mode: {mode}"));
            Ok(())
        }

        ProfileAction::Name { name } => {
            profile::persist(store, &Profile { name: name.clone() });
            renderer.line(&format!("Hello, {name}"));
            Ok(())
        }

        ProfileAction::Theme => {
            let mut theme = theme;
            theme.toggle(store);
            let mode = if theme.is_dark() { "dark" } else { "light" };
            renderer.line(&format!("Switched to {mode} mode."));
            Ok(())
        }
    }
}
