use leptos::prelude::*;
use leptos_router::{
    hooks::{use_navigate, use_query_map},
    NavigateOptions,
};

use crate::site::{Page, PAGE_QUERY_PARAM};

type Navigate = Box<dyn Fn(&str, NavigateOptions)>;

/// The current page and the way to change it, handed down through context.
///
/// The page lives in the URL (`?page=lab`), so the router's history makes the
/// browser's back and forward buttons restore the right view.
///
/// The router's navigate function is captured here, inside the `<Router>`, so
/// `navigate_to` also works from callbacks that run without a reactive owner
/// (window listeners, timers).
#[derive(Clone, Copy)]
pub struct PageNav {
    page: Memo<Page>,
    navigate: StoredValue<Navigate, LocalStorage>,
}

impl PageNav {
    pub fn new() -> Self {
        let query = use_query_map();
        let page = Memo::new(move |_| {
            query.with(|q| Page::from_query(q.get(PAGE_QUERY_PARAM).as_deref()))
        });
        let navigate = use_navigate();
        Self {
            page,
            navigate: StoredValue::new_local(Box::new(navigate) as Navigate),
        }
    }

    pub fn page(&self) -> Page {
        self.page.get()
    }

    pub fn page_untracked(&self) -> Page {
        self.page.get_untracked()
    }

    pub fn navigate_to(&self, page: Page) {
        log::debug!("navigating to {page:?}");
        self.navigate
            .with_value(|navigate| navigate(page.href(), NavigateOptions::default()));
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn use_page_nav() -> PageNav {
    expect_context::<PageNav>()
}
