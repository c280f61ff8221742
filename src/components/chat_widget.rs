use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::chat::{bot_reply, outgoing, Chat, ChatAction, ChatMessage, Sender, WELCOME};
use crate::config::{CHAT_REPLY_DELAY, CHAT_WELCOME_DELAY};

fn bot_says(chat: UseReducerHandle<Chat>, text: &'static str, delay: u32) {
    let timeout = Timeout::new(delay, move || {
        chat.dispatch(ChatAction::Post(ChatMessage {
            text: text.to_string(),
            sender: Sender::Bot,
        }));
    });
    timeout.forget();
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let chat = use_reducer(Chat::default);
    let input_ref = use_node_ref();
    let messages_ref = use_node_ref();

    // Keep the newest message in view.
    {
        let messages_ref = messages_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(list) = messages_ref.cast::<HtmlElement>() {
                    list.set_scroll_top(list.scroll_height());
                }
                || ()
            },
            chat.messages.len(),
        );
    }

    let toggle = {
        let chat = chat.clone();
        Callback::from(move |_: MouseEvent| {
            if chat.toggle_needs_welcome() {
                bot_says(chat.clone(), WELCOME, CHAT_WELCOME_DELAY);
            }
            chat.dispatch(ChatAction::Toggle);
        })
    };

    let send = {
        let chat = chat.clone();
        let input_ref = input_ref.clone();
        move || {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else { return };
            let Some(text) = outgoing(&input.value()) else { return };
            input.set_value("");
            let reply = bot_reply(&text);
            debug!("Chat message, replying with {:?}", reply);
            chat.dispatch(ChatAction::Post(ChatMessage { text, sender: Sender::User }));
            bot_says(chat.clone(), reply, CHAT_REPLY_DELAY);
        }
    };

    let on_send_click = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send())
    };
    let on_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            send();
        }
    });

    html! {
        <div class="chat-widget">
            <button id="chat-toggle" class="chat-toggle" aria-label="Open chat" onclick={toggle.clone()}>
                {"💬"}
            </button>
            <div id="chat-box" class={classes!("chat-box", chat.open.then_some("open"))}>
                <div class="chat-header">
                    <span>{"Nisay Tech"}</span>
                    <button id="chat-close" class="chat-close" aria-label="Close chat" onclick={toggle}>
                        {"×"}
                    </button>
                </div>
                <div id="chat-messages" class="chat-messages" ref={messages_ref}>
                    { for chat.messages.iter().map(|message| html! {
                        <div class={classes!("chat-msg", message.sender.class())}>{ &message.text }</div>
                    }) }
                </div>
                <div class="chat-input-row">
                    <input id="chat-input" type="text" placeholder="Type a message..." ref={input_ref} onkeypress={on_keypress} />
                    <button id="chat-send" class="btn btn-primary btn-sm" onclick={on_send_click}>{"Send"}</button>
                </div>
            </div>
        </div>
    }
}
