use crate::components::ripple_button::RippleButton;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// How long the success notice stays up before its timer dismisses it.
const SUCCESS_MS: i32 = 4000;

fn validate(name: &str, email: &str, message: &str) -> Option<&'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Some("All fields are required.");
    }
    if !email.contains('@') {
        return Some("That email address does not look right.");
    }
    None
}

/// Local-only contact form. Nothing leaves the page; a submission just
/// validates, shows a success notice and clears itself.
#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let sent = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                name.set(input.value());
            }
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                email.set(input.value());
            }
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                message.set(area.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(problem) = validate(&name, &email, &message) {
                error.set(Some(problem));
                return;
            }
            error.set(None);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            sent.set(true);

            let sent = sent.clone();
            crate::dom::spawn(async move {
                let _ = crate::dom::sleep_ms(SUCCESS_MS).await;
                sent.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact-panel">
            <h2>{ "Get in touch" }</h2>
            if *sent {
                <p class="contact-panel__success" role="status">
                    { "Thanks! We read everything, eventually." }
                </p>
            }
            if let Some(problem) = *error {
                <p class="contact-panel__error">{ problem }</p>
            }
            <label for="contact-name">{ "Name" }</label>
            <input
                id="contact-name"
                type="text"
                value={(*name).clone()}
                oninput={on_name}
            />
            <label for="contact-email">{ "Email" }</label>
            <input
                id="contact-email"
                type="email"
                value={(*email).clone()}
                oninput={on_email}
            />
            <label for="contact-message">{ "Message" }</label>
            <textarea
                id="contact-message"
                value={(*message).clone()}
                oninput={on_message}
            />
            <RippleButton
                label="Send"
                class={classes!("contact-panel__send")}
                onclick={on_submit}
            />
        </section>
    }
}
