//! Chat Widget Component
//!
//! DOM side of a chat widget instance: renders bubbles, the thinking
//! placeholder and quick-action buttons, and feeds clicks and Enter presses
//! into a [`ChatSession`].

use std::cell::RefCell;
use std::rc::Rc;

use hopescope::chat::{
    ChatEndpoint, ChatMessage, ChatSession, ChatView, QuickAction, WidgetBinding,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::api::FetchTransport;
use crate::dom;

const THINKING_CLASS: &str = "chatbot-message bot thinking";
const QUICK_ACTION_CLASS: &str = "quick-action-btn-rect";

/// Session type for one widget on the page
pub type WidgetSession = ChatSession<DomChatView, FetchTransport>;

type QuickActionHandler = Rc<dyn Fn(QuickAction)>;

/// Elements of one widget instance
pub struct DomChatView {
    document: Document,
    messages: HtmlElement,
    input: HtmlInputElement,
    send: HtmlButtonElement,
    quick_actions: Option<HtmlElement>,
    thinking: RefCell<Option<Element>>,
    on_quick_action: RefCell<Option<QuickActionHandler>>,
    // listeners of the buttons currently in the panel
    quick_action_listeners: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl DomChatView {
    /// Look up the widget's elements; `None` if a required one is missing
    pub fn bind(binding: &WidgetBinding) -> Option<Self> {
        let document = dom::document()?;

        Some(Self {
            messages: dom::element_by_id(binding.messages)?,
            input: dom::element_by_id(binding.input)?,
            send: dom::element_by_id(binding.send)?,
            quick_actions: binding.quick_actions.and_then(dom::element_by_id),
            document,
            thinking: RefCell::new(None),
            on_quick_action: RefCell::new(None),
            quick_action_listeners: RefCell::new(Vec::new()),
        })
    }

    /// What a quick-action button does when clicked
    pub fn set_quick_action_handler(&self, handler: impl Fn(QuickAction) + 'static) {
        *self.on_quick_action.borrow_mut() = Some(Rc::new(handler));
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn send_button(&self) -> &HtmlButtonElement {
        &self.send
    }

    fn scroll_to_bottom(&self) {
        self.messages.set_scroll_top(self.messages.scroll_height());
    }

    fn create(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => Some(el),
            Err(e) => {
                dom::log_error(&format!("Failed to create <{}>: {:?}", tag, e));
                None
            }
        }
    }
}

impl ChatView for DomChatView {
    fn input_text(&self) -> String {
        self.input.value()
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn append_message(&self, message: &ChatMessage) {
        let Some(bubble) = self.create("div") else {
            return;
        };
        bubble.set_class_name(&message.css_class());

        // text nodes only; newlines become <br>
        for (i, line) in message.lines().enumerate() {
            if i > 0 {
                if let Some(br) = self.create("br") {
                    let _ = bubble.append_child(&br);
                }
            }
            let _ = bubble.append_child(&self.document.create_text_node(line));
        }

        let _ = self.messages.append_child(&bubble);
        self.scroll_to_bottom();
    }

    fn show_thinking(&self) {
        let Some(placeholder) = self.create("div") else {
            return;
        };
        placeholder.set_class_name(THINKING_CLASS);
        for _ in 0..3 {
            if let Some(dot) = self.create("span") {
                dot.set_text_content(Some("."));
                let _ = placeholder.append_child(&dot);
            }
        }

        let _ = self.messages.append_child(&placeholder);
        *self.thinking.borrow_mut() = Some(placeholder);
        self.scroll_to_bottom();
    }

    fn dismiss_thinking(&self) {
        if let Some(placeholder) = self.thinking.borrow_mut().take() {
            placeholder.remove();
        }
    }

    fn set_busy(&self, busy: bool) {
        self.input.set_disabled(busy);
        self.send.set_disabled(busy);
        if let Some(panel) = &self.quick_actions {
            let _ = panel
                .style()
                .set_property("pointer-events", if busy { "none" } else { "auto" });
        }
    }

    fn focus_input(&self) {
        let _ = self.input.focus();
    }

    fn render_quick_actions(&self, actions: &[QuickAction]) {
        let Some(panel) = &self.quick_actions else {
            return;
        };

        panel.set_inner_html("");
        let mut listeners = self.quick_action_listeners.borrow_mut();
        listeners.clear();

        let handler = self.on_quick_action.borrow().clone();

        for action in actions {
            let Some(button) = self.create("button") else {
                continue;
            };
            button.set_class_name(QUICK_ACTION_CLASS);
            button.set_text_content(Some(&action.question));

            if let Some(handler) = &handler {
                let handler = Rc::clone(handler);
                let action = action.clone();
                let on_click = Closure::wrap(Box::new(move || {
                    handler(action.clone());
                }) as Box<dyn FnMut()>);
                let _ = button
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
                listeners.push(on_click);
            }

            let _ = panel.append_child(&button);
        }
    }
}

/// Bind the widget hosted in `container_id`
///
/// Unknown ids and pages without the container are ignored. A container
/// with missing parts is logged and skipped.
pub fn init(container_id: &str) -> Option<Rc<WidgetSession>> {
    let binding = WidgetBinding::for_container(container_id)?;
    dom::element_by_id::<Element>(binding.container)?;

    let Some(view) = DomChatView::bind(binding) else {
        dom::log_error(&format!("Chat elements not found in container: {}", container_id));
        return None;
    };

    let session = Rc::new(ChatSession::new(
        view,
        FetchTransport::new(ChatEndpoint::relative()),
    ));

    let weak = Rc::downgrade(&session);
    session.view().set_quick_action_handler(move |action| {
        if let Some(session) = weak.upgrade() {
            spawn_local(async move {
                session.pick_quick_action(&action).await;
            });
        }
    });

    let on_send = {
        let session = Rc::clone(&session);
        Closure::wrap(Box::new(move || submit(&session)) as Box<dyn FnMut()>)
    };
    listen(session.view().send_button(), "click", &on_send);
    on_send.forget();

    let on_keypress = {
        let session = Rc::clone(&session);
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                submit(&session);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    listen(session.view().input(), "keypress", &on_keypress);
    on_keypress.forget();

    Some(session)
}

fn submit(session: &Rc<WidgetSession>) {
    let session = Rc::clone(session);
    spawn_local(async move {
        session.submit().await;
    });
}

fn listen<T: ?Sized>(target: &web_sys::EventTarget, event: &str, callback: &Closure<T>) {
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        dom::log_error(&format!("Failed to listen for {}: {:?}", event, e));
    }
}
