//! Browser bindings
//!
//! Keyboard listeners write into the shared `InputState`; the plant counter
//! is a DOM element whose text is replaced on every collection.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, Window};

use super::CounterDisplay;
use super::input::InputState;

/// Element id of the collected-plants counter
pub const COUNTER_ELEMENT_ID: &str = "plantCount";

/// Register keydown/keyup/blur listeners for the lifetime of the page
pub fn bind_keyboard(window: &Window, input: Rc<InputState>) -> Result<(), JsValue> {
    let down = Rc::clone(&input);
    let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        down.press(&e.key());
    });
    window.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let up = Rc::clone(&input);
    let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        up.release(&e.key());
    });
    window.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;
    on_up.forget();

    // Key-ups are lost while the page is unfocused
    let on_blur = Closure::<dyn FnMut()>::new(move || {
        input.clear();
    });
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
    on_blur.forget();

    Ok(())
}

/// Counter shown in a DOM element
pub struct DomCounter {
    element: Option<Element>,
}

impl DomCounter {
    pub fn find(document: &Document) -> Self {
        let element = document.get_element_by_id(COUNTER_ELEMENT_ID);
        if element.is_none() {
            log::warn!("No #{} element; plant count will not be shown", COUNTER_ELEMENT_ID);
        }
        Self { element }
    }
}

impl CounterDisplay for DomCounter {
    fn show_collected(&mut self, total: u64) {
        if let Some(el) = &self.element {
            el.set_text_content(Some(&total.to_string()));
        }
    }
}

/// Start loading the player sprite; the renderer falls back until it is ready
pub fn load_sprite(src: &str) -> Option<HtmlImageElement> {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Cannot create sprite image: {:?}", e);
            return None;
        }
    };

    let on_error = Closure::<dyn FnMut()>::new(|| {
        log::error!("Error loading turtle image");
    });
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    let on_load = Closure::<dyn FnMut()>::new(|| {
        log::info!("Turtle image loaded");
    });
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    img.set_src(src);
    Some(img)
}
