//! HTML rendering — turns one instance's state plus its toasts into the page.
//!
//! Templates are compiled into the binary. Names end in `.html`, so minijinja
//! auto-escapes every interpolated value (user input included).

use minijinja::Environment;
use serde::Serialize;

use crate::errors::AppError;
use crate::form::{FormState, Icp};
use crate::notify::Notification;
use crate::panel::{render_panel, Tile};

pub const HERO_IMAGE: &str = "/assets/ai-sales-person.svg";

const PAGE_TEMPLATE: &str = "page.html";
const TILE_TEMPLATE: &str = "tile.html";

#[derive(Debug, Serialize)]
struct IcpOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

/// Field values echoed back into the inputs, read through the form's accessors.
#[derive(Debug, Serialize)]
struct FormView<'a> {
    linkedin_url: &'a str,
    call_transcript: &'a str,
    customer_name: &'a str,
    rep_name: &'a str,
    contextual_info: &'a str,
}

impl<'a> FormView<'a> {
    fn new(form: &'a FormState) -> Self {
        Self {
            linkedin_url: form.linkedin_url(),
            call_transcript: form.call_transcript(),
            customer_name: form.customer_name(),
            rep_name: form.rep_name(),
            contextual_info: form.contextual_info(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PageView<'a> {
    form: FormView<'a>,
    icp_options: Vec<IcpOption>,
    results_visible: bool,
    tiles: Vec<Tile>,
    toasts: &'a [Notification],
    hero_image: &'static str,
}

impl<'a> PageView<'a> {
    fn new(form: &'a FormState, toasts: &'a [Notification]) -> Self {
        let icp_options = Icp::ALL
            .into_iter()
            .map(|icp| IcpOption {
                value: icp.as_str(),
                label: icp.label(),
                selected: form.selected_icp() == Some(icp),
            })
            .collect();

        Self {
            form: FormView::new(form),
            icp_options,
            results_visible: form.results_visible(),
            tiles: render_panel(form),
            toasts,
            hero_image: HERO_IMAGE,
        }
    }
}

/// Owns the compiled template environment. Built once at startup, shared via `AppState`.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE, include_str!("../../templates/page.html"))?;
        env.add_template(TILE_TEMPLATE, include_str!("../../templates/tile.html"))?;
        Ok(Self { env })
    }

    pub fn render_page(
        &self,
        form: &FormState,
        toasts: &[Notification],
    ) -> Result<String, AppError> {
        let view = PageView::new(form, toasts);
        let html = self.env.get_template(PAGE_TEMPLATE)?.render(&view)?;
        Ok(html)
    }
}
