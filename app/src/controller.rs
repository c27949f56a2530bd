//! Page controller: startup sequencing, event wiring and the status line

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

use crate::engine::{self, Session};
use crate::executor;
use crate::render::RenderTarget;
use crate::seed;
use sqlplay_types::{PlaygroundError, PlaygroundOptions, SampleQuery, Severity, StatusNotification};

/// Session lifecycle. `Failed` is terminal; the page must be reloaded.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AppState {
    Initializing,
    Ready,
    Executing,
    Failed,
}

/// Top-level orchestrator. Owns the engine session, the render target, the
/// SQL input and the status line; all event handlers hold a shared reference
/// to it. Wiring happens once, at construction.
pub struct Controller {
    session: Session,
    target: RenderTarget,
    input: HtmlTextAreaElement,
    status: StatusLine,
    state: Cell<AppState>,
}

impl Controller {
    /// Boots the playground: engine, seed script, event wiring, ready
    /// notification. A startup failure ends in the status line and leaves
    /// the page dead until reload.
    pub async fn boot(options: PlaygroundOptions) {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let status = StatusLine::new(&document, options.status_autoclear_ms);
        match Self::start(&document, &status, &options).await {
            Ok(controller) => {
                controller.state.set(AppState::Ready);
                controller
                    .status
                    .show("Ready! Try running some SQL queries.", Severity::Success);
            }
            Err(err) => {
                log::error!("startup failed: {err}");
                status.show(
                    "Failed to initialize database. Please refresh the page.",
                    Severity::Error,
                );
            }
        }
    }

    async fn start(
        document: &Document,
        status: &StatusLine,
        options: &PlaygroundOptions,
    ) -> Result<Rc<Self>, PlaygroundError> {
        let session = Session::initialize().await?;
        seed::load_seed(&session, crate::SEED_SCRIPT).await?;

        let input: HtmlTextAreaElement = require(document, "sql-input")?.unchecked_into();
        let container: HtmlElement = require(document, "results-container")?.unchecked_into();
        let table = require(document, "results-table")?;
        let elapsed = require(document, "execution-time")?;

        let controller = Rc::new(Self {
            session,
            target: RenderTarget::new(document.clone(), container, table, elapsed),
            input,
            status: status.clone(),
            state: Cell::new(AppState::Initializing),
        });
        Self::wire_events(&controller, document, &options.samples)?;
        Ok(controller)
    }

    fn wire_events(
        controller: &Rc<Self>,
        document: &Document,
        samples: &[SampleQuery],
    ) -> Result<(), PlaygroundError> {
        if let Some(button) = document.get_element_by_id("execute-btn") {
            let handler = Rc::clone(controller);
            let on_click = Closure::<dyn FnMut()>::new(move || Self::trigger_execute(&handler));
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(wiring_error)?;
            on_click.forget();
        }

        if let Some(button) = document.get_element_by_id("clear-btn") {
            let handler = Rc::clone(controller);
            let on_click = Closure::<dyn FnMut()>::new(move || handler.target.clear());
            button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                .map_err(wiring_error)?;
            on_click.forget();
        }

        // Ctrl+Enter in the SQL input runs the query.
        {
            let handler = Rc::clone(controller);
            let on_keydown =
                Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    if event.ctrl_key() && event.key() == "Enter" {
                        Self::trigger_execute(&handler);
                    }
                });
            controller
                .input
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                .map_err(wiring_error)?;
            on_keydown.forget();
        }

        // Sample buttons populate the input without executing it.
        if let Some(bar) = document.get_element_by_id("sample-queries") {
            for sample in samples {
                let button = document.create_element("button").map_err(wiring_error)?;
                button.set_class_name("sample-query");
                button.set_text_content(Some(&sample.name));
                let handler = Rc::clone(controller);
                let query = sample.query.clone();
                let on_click =
                    Closure::<dyn FnMut()>::new(move || handler.input.set_value(&query));
                button
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                    .map_err(wiring_error)?;
                on_click.forget();
                bar.append_child(&button).map_err(wiring_error)?;
            }
        }

        Ok(())
    }

    /// Runs whatever is in the input. A second trigger while a query is in
    /// flight is rejected so the single shared connection is never raced.
    fn trigger_execute(controller: &Rc<Self>) {
        match controller.state.get() {
            AppState::Ready => {}
            AppState::Executing => {
                controller
                    .status
                    .show("A query is already running.", Severity::Warning);
                return;
            }
            AppState::Initializing | AppState::Failed => return,
        }

        controller.state.set(AppState::Executing);
        controller.status.show("Executing query...", Severity::Info);
        let task = Rc::clone(controller);
        spawn_local(async move {
            task.run_query().await;
            task.state.set(AppState::Ready);
        });
    }

    async fn run_query(&self) {
        match executor::execute(&self.session, &self.input.value()).await {
            Ok(execution) => {
                if let Err(err) = self.target.render(&execution.result, execution.elapsed_ms) {
                    log::error!("render failed: {err:?}");
                }
                self.status.show(
                    &format!("Query executed successfully in {}ms", execution.elapsed_ms),
                    Severity::Success,
                );
            }
            Err(PlaygroundError::EmptyQuery) => {
                self.status
                    .show("Please enter a SQL query.", Severity::Warning);
            }
            Err(err) => {
                log::error!("query execution failed: {err}");
                self.target.clear();
                self.status
                    .show(&format!("Error: {err}"), err.severity());
            }
        }
    }
}

/// The transient notification line. Success/info messages clear themselves
/// after the configured window; warnings and errors stay until replaced.
#[derive(Clone)]
pub struct StatusLine {
    element: Option<Element>,
    autoclear_ms: u32,
    generation: Rc<Cell<u64>>,
}

impl StatusLine {
    pub fn new(document: &Document, autoclear_ms: u32) -> Self {
        Self {
            element: document.get_element_by_id("status"),
            autoclear_ms,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn show(&self, message: &str, severity: Severity) {
        self.display(&StatusNotification::new(message, severity));
    }

    fn display(&self, notification: &StatusNotification) {
        let Some(element) = &self.element else { return };
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        element.set_text_content(Some(&notification.message));
        element.set_class_name(&format!("status {}", notification.severity.css_class()));
        if notification.severity.auto_clears() {
            self.schedule_clear(generation);
        }
    }

    // A newer message bumps the generation, so a stale timer finds the
    // check failing and leaves the line alone.
    fn schedule_clear(&self, generation: u64) {
        let Some(window) = web_sys::window() else { return };
        let element = self.element.clone();
        let current = Rc::clone(&self.generation);
        let callback = Closure::once(move || {
            if current.get() == generation {
                if let Some(element) = element {
                    element.set_text_content(Some(""));
                    element.set_class_name("status");
                }
            }
        });
        let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.autoclear_ms as i32,
        );
        if scheduled.is_ok() {
            // The browser owns the callback until the timer fires.
            callback.forget();
        }
    }
}

fn require(document: &Document, id: &str) -> Result<Element, PlaygroundError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlaygroundError::Initialization(format!("page is missing #{id}")))
}

fn wiring_error(err: JsValue) -> PlaygroundError {
    PlaygroundError::Initialization(engine::js_error_message(&err))
}
