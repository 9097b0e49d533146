use navi::{Html, RouteContext, View};
use navi_components::RouterLink;
use tracing::warn;

use crate::{roster::Roster, router::CHAMPION};

/// Landing page listing every champion in the roster.
#[derive(Debug, Clone)]
pub struct Dashboard {
    roster: Roster,
}

impl Dashboard {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl View for Dashboard {
    fn render(&self, cx: &RouteContext<'_>) -> Html {
        let items: Html = self
            .roster
            .iter()
            .filter_map(|champion| {
                let link = RouterLink::named(CHAMPION)
                    .param("id", &champion.id)
                    .text(&champion.name)
                    .render(cx.router());

                match link {
                    Ok(link) => Some(Html::new(format!(
                        r#"<li>{link} <span class="title">{}</span></li>"#,
                        Html::text(&champion.title)
                    ))),
                    Err(e) => {
                        warn!(champion = %champion.id, error = %e, "skipping champion link");
                        None
                    }
                }
            })
            .collect();

        Html::new(format!(
            r#"<section class="dashboard"><h1>Champions</h1><ul class="roster">{items}</ul></section>"#
        ))
    }
}
