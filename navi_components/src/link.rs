use navi::{Html, RouteParams, Router, RouterError};
use navi_utils::escape_html;

#[derive(Debug, Clone)]
enum Target {
    Path(String),
    Named { name: String, params: RouteParams },
}

/// Anchor that navigates through the router instead of reloading the page.
///
/// The rendered `href` carries the base prefix and history mode so the link
/// still works when opened in a new tab; the `data-navi-link` attribute holds
/// the route path picked up by the click handler installed by
/// `Navi::mount`. Links to the current route get the `active` class.
#[derive(Debug, Clone)]
pub struct RouterLink {
    target: Target,
    text: String,
    class: Option<String>,
}

impl RouterLink {
    /// Link to a literal route path
    pub fn to(path: impl Into<String>) -> Self {
        Self::new(Target::Path(path.into()))
    }

    /// Link to a named route; add params with [`RouterLink::param`]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Target::Named {
            name: name.into(),
            params: RouteParams::new(),
        })
    }

    fn new(target: Target) -> Self {
        Self {
            target,
            text: String::new(),
            class: None,
        }
    }

    /// Set a parameter of a named link. Ignored for literal paths.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Target::Named { params, .. } = &mut self.target {
            params.insert(name, value);
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render the anchor.
    ///
    /// # Errors
    ///
    /// Named links fail like [`Router::url_for`]: unknown route, missing or
    /// invalid params.
    pub fn render(&self, router: &Router) -> Result<Html, RouterError> {
        let path = match &self.target {
            Target::Path(path) => path.clone(),
            Target::Named { name, params } => router.url_for(name, params)?,
        };

        let href = router.config().href(&path);

        let active = router
            .current_route()
            .is_some_and(|route| route.path == path);

        let mut classes: Vec<&str> = self.class.iter().map(String::as_str).collect();
        if active {
            classes.push("active");
        }

        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape_html(&classes.join(" ")))
        };

        Ok(Html::new(format!(
            r#"<a href="{}" data-navi-link="{}"{class_attr}>{}</a>"#,
            escape_html(&href),
            escape_html(&path),
            escape_html(&self.text),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use navi::{RouteComponent, RouteContext, RouteDescriptor, RouterConfig, View};

    struct Blank;

    impl View for Blank {
        fn render(&self, _cx: &RouteContext<'_>) -> Html {
            Html::default()
        }
    }

    fn router(config: RouterConfig) -> Router {
        Router::builder(config)
            .route(RouteDescriptor::new("/", "home", RouteComponent::eager(Blank)))
            .route(RouteDescriptor::new(
                "/champion/{id}",
                "champion",
                RouteComponent::eager(Blank),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_named_link() {
        let router = router(RouterConfig::web("/rift"));

        let html = RouterLink::named("champion")
            .param("id", "ahri")
            .text("Ahri")
            .render(&router)
            .unwrap();

        assert_eq!(
            html.as_str(),
            r#"<a href="/rift/champion/ahri" data-navi-link="/champion/ahri">Ahri</a>"#
        );
    }

    #[test]
    fn test_hash_link_and_escaping() {
        let router = router(RouterConfig::hash(""));

        let html = RouterLink::to("/champion/kaisa")
            .text("Kai'Sa <Daughter of the Void>")
            .class("champion-link")
            .render(&router)
            .unwrap();

        assert_eq!(
            html.as_str(),
            r##"<a href="#/champion/kaisa" data-navi-link="/champion/kaisa" class="champion-link">Kai&#39;Sa &lt;Daughter of the Void&gt;</a>"##
        );
    }

    #[test]
    fn test_active_link() {
        let router = router(RouterConfig::web("/"));
        router
            .navigate("/champion/42")
            .now_or_never()
            .unwrap()
            .unwrap();

        let active = RouterLink::named("champion")
            .param("id", "42")
            .text("42")
            .render(&router)
            .unwrap();
        assert!(active.as_str().contains(r#"class="active""#));

        let inactive = RouterLink::to("/").text("Home").render(&router).unwrap();
        assert!(!inactive.as_str().contains("class="));
    }

    #[test]
    fn test_named_link_errors() {
        let router = router(RouterConfig::default());

        assert!(matches!(
            RouterLink::named("champion").render(&router),
            Err(RouterError::MissingParam { .. })
        ));
        assert!(matches!(
            RouterLink::named("nowhere").render(&router),
            Err(RouterError::UnknownRoute(_))
        ));
    }
}
