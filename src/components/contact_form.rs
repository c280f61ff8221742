use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::MAILTO_RECIPIENT;

/// Builds the `mailto:` link handed to the visitor's mail client. Subject and
/// body are percent-encoded, so the CRLF separators travel as `%0D%0A`.
pub fn build_mailto(name: &str, email: &str, message: &str) -> String {
    let subject = format!("New Inquiry from {}", name);
    let body = format!("Name: {}\r\nEmail: {}\r\n\r\n{}", name, email, message);
    format!(
        "mailto:{}?subject={}&body={}",
        MAILTO_RECIPIENT,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_ref.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
            let email = email_ref.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .unwrap_or_default();

            let href = build_mailto(&name, &email, &message);
            info!("Handing contact form to mail client");
            if let Some(window) = window() {
                if let Err(e) = window.location().set_href(&href) {
                    warn!("Could not open mail client: {:?}", e);
                }
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input id="name" name="name" type="text" required=true ref={name_ref} />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input id="email" name="email" type="email" required=true ref={email_ref} />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="5" required=true ref={message_ref}></textarea>
            </div>
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_carries_subject_and_crlf_body() {
        assert_eq!(
            build_mailto("Dara", "dara@example.com", "Hi"),
            "mailto:hello@nisaytech.pp.ua?subject=New%20Inquiry%20from%20Dara\
             &body=Name%3A%20Dara%0D%0AEmail%3A%20dara%40example.com%0D%0A%0D%0AHi"
        );
    }

    #[test]
    fn user_text_cannot_break_the_query() {
        let href = build_mailto("A&B", "x@y.z", "cc=me?");
        assert!(href.contains("subject=New%20Inquiry%20from%20A%26B&body="));
        assert!(href.ends_with("cc%3Dme%3F"));
        assert_eq!(href.matches('&').count(), 1);
    }
}
