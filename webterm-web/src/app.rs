//! The terminal mounted on the page
//!
//! State lives in an `Rc<RefCell<App>>` shared by the DOM event handlers.
//! Every handler updates the terminal and re-renders the affected nodes.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, KeyboardEvent};
use webterm_core::render::html;
use webterm_core::viewport::REVEAL_TARGET_ID;
use webterm_core::{LineEditor, Output, Terminal};

use crate::HISTORY_ID;

const MAIN_ID: &str = "main-container";
const PROMPT_ID: &str = "prompt";

pub struct App {
    document: Document,
    terminal: Terminal,
    editor: LineEditor,
}

impl App {
    /// Attach key and input handlers to `#input`
    ///
    /// A document without `#input` still mounts; it just takes no input.
    pub fn mount(document: Document, terminal: Terminal) -> Result<Rc<RefCell<App>>, JsValue> {
        let input = document
            .get_element_by_id(REVEAL_TARGET_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

        let app = Rc::new(RefCell::new(App {
            document,
            terminal,
            editor: LineEditor::new(),
        }));

        match input {
            Some(input) => attach_input_handlers(&app, &input)?,
            None => log::warn!("No #{} element, keyboard input disabled", REVEAL_TARGET_ID),
        }

        Ok(app)
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    fn on_keydown(&mut self, event: &KeyboardEvent) {
        match event.key().as_str() {
            "Enter" => {
                let line = self.editor.submit();
                self.terminal.submit(&line);
                self.render();
            }
            "ArrowUp" => {
                event.prevent_default();
                if self.editor.history_back(self.terminal.history_mut()) {
                    self.render_input();
                }
            }
            "ArrowDown" => {
                event.prevent_default();
                if self.editor.history_forward(self.terminal.history_mut()) {
                    self.render_input();
                }
            }
            "Tab" => {
                event.prevent_default();
                crate::page::focus_input(&self.document);
            }
            _ => {}
        }
    }

    /// Redraw scrollback, prompt, colors and the input line
    pub fn render(&self) {
        let theme = self.terminal.theme();

        if let Some(main) = self.document.get_element_by_id(MAIN_ID) {
            let style = format!(
                "background-color: {}; color: {}",
                theme.crust.hex(),
                theme.text.hex()
            );
            if let Err(e) = main.set_attribute("style", &style) {
                log::warn!("Failed to style #{}: {:?}", MAIN_ID, e);
            }
        }

        if let Some(history) = self.document.get_element_by_id(HISTORY_ID) {
            history.set_inner_html(&html::entries(self.terminal.buffer().commands(), theme));
        }

        if let Some(prompt) = self.document.get_element_by_id(PROMPT_ID) {
            let line = Output::from(self.terminal.prompt().line());
            prompt.set_inner_html(&html::output(&line, theme));
        }

        self.render_input();
    }

    fn render_input(&self) {
        let Some(input) = self
            .document
            .get_element_by_id(REVEAL_TARGET_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        input.set_value(self.editor.input());
        let style = self.terminal.theme().text.style_text();
        if let Err(e) = input.set_attribute("style", &style) {
            log::warn!("Failed to style #{}: {:?}", REVEAL_TARGET_ID, e);
        }
    }
}

fn attach_input_handlers(app: &Rc<RefCell<App>>, input: &HtmlInputElement) -> Result<(), JsValue> {
    let keydown_app = Rc::clone(app);
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        keydown_app.borrow_mut().on_keydown(&event);
    });
    input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let input_app = Rc::clone(app);
    let input_element = input.clone();
    let on_input = Closure::<dyn FnMut()>::new(move || {
        input_app.borrow_mut().editor.set_input(input_element.value());
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    Ok(())
}
