//! Reconciliation Scheduler.
//!
//! DESIGN
//! ======
//! The scheduler owns no preference values. Every trigger re-reads the store,
//! so a value changed by a user action is what the next partial swap applies,
//! and nothing is replayed from a stale copy.
//!
//! Each step runs in isolation. A rule that fails is logged and recorded in
//! the returned [`Report`]; the remaining steps still run. Layout-sensitive
//! categories are not applied by [`Reconciler::handle`] during a load or swap.
//! They are listed in [`Report::deferred`] and the host calls
//! [`Reconciler::settle_layout`] once layout has settled.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::catalog::{PatternCatalog, ThemeCatalog};
use crate::config::UiConfig;
use crate::consts::NAV_ACTIVE_CLASSES;
use crate::dom::{Document, Element, target_selector};
use crate::error::StyleError;
use crate::store::Preferences;
use crate::style::{Applicator, Applied, Catalog, Category, Phase};

/// Controller that marks the sidebar's navigation links.
pub const NAV_CONTROLLER: &str = "sidebar-active";

/// Attribute holding the path prefix a navigation link is active for.
pub const PATH_PREFIX_ATTR: &str = "data-path-prefix";

/// Attribute holding the document title for a navigation link.
pub const NAV_TITLE_ATTR: &str = "data-sidebar-title";

/// What triggered reconciliation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Full page load.
    InitialLoad,
    /// A partial-page swap settled (`htmx:afterSettle`).
    PartialSwap,
    /// The user picked a new value for one category.
    UserChange { category: Category, value: String },
}

/// One unit of reconciliation work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Style(Category),
    NavHighlight,
    Title,
}

/// How a step ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The document reflects this value.
    Applied(String),
    /// The stored value was rejected; the default was applied instead.
    FellBack { rejected: String, applied: String },
    /// Nothing to do (no matching link, catalog unavailable).
    Skipped,
    /// The step failed; the document is unchanged for this step.
    Failed(StyleError),
}

/// Result of one scheduler trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub outcomes: Vec<(Step, Outcome)>,
    /// Categories waiting for [`Reconciler::settle_layout`].
    pub deferred: Vec<Category>,
}

impl Report {
    /// Outcome of a step, if it ran.
    #[must_use]
    pub fn outcome(&self, step: Step) -> Option<&Outcome> {
        self.outcomes.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }

    /// Value the document now shows for `category`, if the step applied one.
    #[must_use]
    pub fn applied(&self, category: Category) -> Option<&str> {
        match self.outcome(Step::Style(category))? {
            Outcome::Applied(value) | Outcome::FellBack { applied: value, .. } => Some(value),
            Outcome::Skipped | Outcome::Failed(_) => None,
        }
    }

    fn push(&mut self, step: Step, outcome: Outcome) {
        self.outcomes.push((step, outcome));
    }
}

/// Drives the [`Applicator`] from navigation events.
#[derive(Debug)]
pub struct Reconciler<D: Document> {
    doc: D,
    prefs: Preferences,
    applicator: Applicator,
    pending_layout: Vec<Category>,
}

impl<D: Document> Reconciler<D> {
    #[must_use]
    pub fn new(doc: D, prefs: Preferences, config: &UiConfig) -> Self {
        Self {
            doc,
            prefs,
            applicator: Applicator::new(config.theme_mode, &config.base_path),
            pending_layout: Vec::new(),
        }
    }

    #[must_use]
    pub fn doc(&self) -> &D {
        &self.doc
    }

    #[must_use]
    pub fn applicator(&self) -> &Applicator {
        &self.applicator
    }

    /// Whether a layout-phase pass is waiting.
    #[must_use]
    pub fn layout_pending(&self) -> bool {
        !self.pending_layout.is_empty()
    }

    pub fn handle(&mut self, event: NavigationEvent) -> Report {
        let mut report = Report::default();
        match event {
            NavigationEvent::InitialLoad | NavigationEvent::PartialSwap => {
                for category in Category::ALL {
                    if category.phase() == Phase::AfterLayout {
                        if !self.pending_layout.contains(&category) {
                            self.pending_layout.push(category);
                        }
                        report.deferred.push(category);
                    } else {
                        let outcome = self.apply_stored(category);
                        report.push(Step::Style(category), outcome);
                    }
                }
                report.push(Step::NavHighlight, self.highlight_nav());
                report.push(Step::Title, self.title_from_nav());
            }
            NavigationEvent::UserChange { category, value } => {
                let outcome = self.apply_user(category, &value);
                report.push(Step::Style(category), outcome);
            }
        }
        report
    }

    /// Run the deferred layout-phase categories.
    pub fn settle_layout(&mut self) -> Report {
        let mut report = Report::default();
        for category in std::mem::take(&mut self.pending_layout) {
            let outcome = self.apply_stored(category);
            report.push(Step::Style(category), outcome);
        }
        report
    }

    /// Flip the stored sidebar state and apply it immediately.
    pub fn toggle_sidebar(&mut self) -> Report {
        let key = Category::SidebarCollapse.key();
        let collapsed = self.prefs.entry(key) == "true";
        self.handle(NavigationEvent::UserChange {
            category: Category::SidebarCollapse,
            value: (!collapsed).to_string(),
        })
    }

    /// Install the theme catalog and re-apply the theme from the store.
    pub fn themes_loaded(&mut self, themes: Catalog<ThemeCatalog>) -> Report {
        self.applicator.set_themes(themes);
        self.reapply(Category::Theme)
    }

    /// Install the pattern catalog and re-apply the background from the store.
    pub fn patterns_loaded(&mut self, patterns: Catalog<PatternCatalog>) -> Report {
        self.applicator.set_patterns(patterns);
        self.reapply(Category::Background)
    }

    fn reapply(&self, category: Category) -> Report {
        let mut report = Report::default();
        let outcome = self.apply_stored(category);
        report.push(Step::Style(category), outcome);
        report
    }

    fn apply_stored(&self, category: Category) -> Outcome {
        let key = category.key();
        let value = self.prefs.find_entry(key).unwrap_or_else(|| self.applicator.default_value(category));

        match self.applicator.apply(&self.doc, category, &value) {
            Ok(applied) => outcome_of(applied),
            Err(StyleError::Rejected { .. }) => {
                log::warn!("stored {category} value `{value}` rejected; using default");
                let default = self.applicator.default_value(category);
                match self.applicator.apply(&self.doc, category, &default) {
                    Ok(Applied::Value(applied)) => Outcome::FellBack { rejected: value, applied },
                    Ok(Applied::Unavailable) => Outcome::Skipped,
                    Err(e) => failed(category, e),
                }
            }
            Err(e) => failed(category, e),
        }
    }

    fn apply_user(&self, category: Category, value: &str) -> Outcome {
        let canonical = match self.applicator.validate(category, value) {
            Ok(canonical) => canonical,
            Err(e) => return failed(category, e),
        };
        let outcome = match self.applicator.apply(&self.doc, category, &canonical) {
            Ok(applied) => outcome_of(applied),
            Err(e) => failed(category, e),
        };
        // A valid choice is remembered even when this page lacks the element it styles.
        self.prefs.store(category.key(), &canonical);
        outcome
    }

    fn nav_links(&self) -> Vec<(D::Element, bool)> {
        let path = self.doc.path();
        self.doc
            .query_all(&target_selector(NAV_CONTROLLER, "link"))
            .into_iter()
            .map(|link| {
                let active = link.attr(PATH_PREFIX_ATTR).is_some_and(|p| !p.is_empty() && path.starts_with(&p));
                (link, active)
            })
            .collect()
    }

    fn highlight_nav(&self) -> Outcome {
        let links = self.nav_links();
        if links.is_empty() {
            return Outcome::Skipped;
        }
        let mut active_count = 0;
        for (link, active) in &links {
            for class in NAV_ACTIVE_CLASSES {
                link.toggle_class(class, *active);
            }
            active_count += usize::from(*active);
        }
        Outcome::Applied(active_count.to_string())
    }

    /// The last active link with a title wins.
    fn title_from_nav(&self) -> Outcome {
        let title = self
            .nav_links()
            .into_iter()
            .rev()
            .filter(|(_, active)| *active)
            .find_map(|(link, _)| link.attr(NAV_TITLE_ATTR).filter(|t| !t.is_empty()));
        match title {
            Some(title) => {
                self.doc.set_title(&title);
                Outcome::Applied(title)
            }
            None => Outcome::Skipped,
        }
    }
}

fn outcome_of(applied: Applied) -> Outcome {
    match applied {
        Applied::Value(value) => Outcome::Applied(value),
        Applied::Unavailable => Outcome::Skipped,
    }
}

fn failed(category: Category, e: StyleError) -> Outcome {
    match &e {
        StyleError::MissingTarget { .. } | StyleError::CatalogPending { .. } => {
            log::debug!("{category} not applied: {e}");
        }
        StyleError::Rejected { .. } => log::warn!("{category}: {e}"),
    }
    Outcome::Failed(e)
}
