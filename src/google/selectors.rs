//! CSS selectors for Google result pages.
//!
//! Google's markup is not stable. Each field has several selectors that the
//! parser tries in order, so when a layout change breaks extraction the fix
//! is usually a new entry here plus a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for organic result blocks and their fields.
pub mod search {
    use super::*;

    /// Classic organic result container.
    pub static RESULT_BLOCK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.g").unwrap());

    /// Container used by the lightweight (no-JS) result layout.
    pub static RESULT_BLOCK_ALT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.Gx5Zad").unwrap());

    /// Result heading.
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());

    /// ARIA heading, used when the layout drops the h3.
    pub static TITLE_ROLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[role='heading']").unwrap());

    /// Result link.
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

    /// Known snippet container classes, most common first.
    pub static SNIPPET_CLASSES: &[&str] = &["VwiC3b", "yXK7lf", "lEBKkf"];

    /// One selector per snippet class, in the same order.
    pub static SNIPPET_BY_CLASS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
        SNIPPET_CLASSES
            .iter()
            .map(|class| Selector::parse(&format!("div.{}", class)).unwrap())
            .collect()
    });

    /// Generic text span, the last resort for snippets.
    pub static SNIPPET_SPAN: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span").unwrap());
}

/// Selectors for detecting interstitials instead of results.
pub mod errors {
    use super::*;

    /// "Unusual traffic" CAPTCHA page.
    pub static CAPTCHA: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form#captcha-form, \
             div#recaptcha, \
             form[action*='sorry']",
        )
        .unwrap()
    });

    /// Cookie consent wall.
    pub static CONSENT: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "form[action*='consent.google'], \
             div#CXQnmb",
        )
        .unwrap()
    });
}
