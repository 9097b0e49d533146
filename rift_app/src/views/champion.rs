//! Detail page for a single champion.

use navi::{Html, LoadError, RouteContext, View};
use navi_components::RouterLink;
use tracing::debug;

use crate::{
    roster::{self, Roster},
    router::HOME,
};

/// Shows the champion named by the `id` route param.
///
/// The id is taken as-is; ids missing from the roster get a notice instead.
#[derive(Debug, Clone)]
pub struct ChampionView {
    roster: Roster,
}

impl ChampionView {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl View for ChampionView {
    fn render(&self, cx: &RouteContext<'_>) -> Html {
        let id = cx.param("id").unwrap_or_default();

        let body = match self.roster.find(id) {
            Some(champion) => format!(
                r#"<h1>{}</h1><p class="title">{}</p><p class="role">{}</p>"#,
                Html::text(&champion.name),
                Html::text(&champion.title),
                Html::text(&champion.role),
            ),
            None => format!(
                r#"<h1>Unknown champion</h1><p class="notice">No champion with id "{}".</p>"#,
                Html::text(id)
            ),
        };

        let back = RouterLink::named(HOME)
            .text("All champions")
            .class("back")
            .render(cx.router())
            .unwrap_or_default();

        Html::new(format!(
            r#"<article class="champion" data-id="{}">{body}{back}</article>"#,
            Html::text(id)
        ))
    }
}

/// Deferred loader bound to the `champion` route.
///
/// # Errors
///
/// Fails if the bundled roster cannot be parsed.
pub async fn load() -> Result<ChampionView, LoadError> {
    debug!("loading champion view");

    roster::load_roster()
        .map(ChampionView::new)
        .map_err(|e| LoadError::new(format!("champion roster: {e}")))
}
